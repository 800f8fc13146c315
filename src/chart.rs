//! Turnover chart model and geometry.
//!
//! Pure functions computing the bar chart geometry from a drawing size, so
//! the renderer only has to paint rectangles and labels. Values are annual
//! turnover in million naira.

/// One year of turnover data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnoverPoint {
    pub year: u16,
    pub value: f32,
}

/// Top of the Y axis (million naira).
pub const Y_MAX: f32 = 26_000.0;
/// Y axis tick step.
pub const Y_STEP: f32 = 2_000.0;

/// Chart margins, clockwise from the top.
pub const MARGIN_TOP: f32 = 18.0;
pub const MARGIN_RIGHT: f32 = 12.0;
pub const MARGIN_BOTTOM: f32 = 30.0;
pub const MARGIN_LEFT: f32 = 56.0;

/// Corner radius of the bars.
pub const BAR_RADIUS: f32 = 8.0;

/// The annual turnover series shown on the profile page.
pub fn turnover_series() -> Vec<TurnoverPoint> {
    [
        (2015, 10_000.0),
        (2016, 10_000.0),
        (2017, 8_000.0),
        (2018, 9_000.0),
        (2019, 16_000.0),
        (2020, 22_000.0),
    ]
    .iter()
    .map(|&(year, value)| TurnoverPoint { year, value })
    .collect()
}

/// A single bar, positioned relative to the chart's inner origin
/// (top-left corner inside the margins).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub point: TurnoverPoint,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A horizontal gridline at an axis tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gridline {
    /// Tick value in million naira
    pub value: f32,
    /// Y relative to the inner origin
    pub y: f32,
}

/// Full bar chart geometry for a given drawing size.
#[derive(Debug, Clone)]
pub struct ChartGeometry {
    pub inner_width: f32,
    pub inner_height: f32,
    pub bars: Vec<BarGeometry>,
    pub gridlines: Vec<Gridline>,
}

impl ChartGeometry {
    /// Computes bar and gridline geometry for a `width` × `height` chart
    /// area (margins included).
    ///
    /// Each bar occupies the middle 80% of its column; heights are floored
    /// at one unit so zero-ish values stay visible.
    pub fn compute(width: f32, height: f32, series: &[TurnoverPoint]) -> Self {
        let inner_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0);
        let inner_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0);
        let x_step = if series.is_empty() {
            0.0
        } else {
            inner_width / series.len() as f32
        };

        let bars = series
            .iter()
            .enumerate()
            .map(|(i, &point)| {
                let h = (point.value / Y_MAX * inner_height).max(1.0);
                BarGeometry {
                    point,
                    x: i as f32 * x_step + x_step * 0.1,
                    y: inner_height - h,
                    width: x_step * 0.8,
                    height: h,
                }
            })
            .collect();

        let mut gridlines = Vec::new();
        let mut value = 0.0;
        while value <= Y_MAX {
            gridlines.push(Gridline {
                value,
                y: inner_height - value / Y_MAX * inner_height,
            });
            value += Y_STEP;
        }

        Self {
            inner_width,
            inner_height,
            bars,
            gridlines,
        }
    }
}

/// Formats an amount with thousands separators for axis and tooltip labels.
///
/// # Examples
/// ```
/// assert_eq!(orgview::format_amount(1000), "1,000");
/// assert_eq!(orgview::format_amount(22000), "22,000");
/// ```
pub fn format_amount(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    if n < 0 {
        result.insert(0, '-');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_matches_reference_chart() {
        let series = turnover_series();
        assert_eq!(series.len(), 6);
        assert_eq!(series[0], TurnoverPoint { year: 2015, value: 10_000.0 });
        assert_eq!(series[5], TurnoverPoint { year: 2020, value: 22_000.0 });
    }

    #[test]
    fn bar_geometry_proportions() {
        let series = turnover_series();
        let geom = ChartGeometry::compute(668.0, 320.0, &series);

        // innerW = 668 - 56 - 12 = 600, six columns of 100
        assert_eq!(geom.inner_width, 600.0);
        assert_eq!(geom.inner_height, 320.0 - MARGIN_TOP - MARGIN_BOTTOM);

        let first = geom.bars[0];
        assert_eq!(first.x, 10.0);
        assert_eq!(first.width, 80.0);
        let expected_h = 10_000.0 / Y_MAX * geom.inner_height;
        assert!((first.height - expected_h).abs() < 1e-4);
        assert!((first.y + first.height - geom.inner_height).abs() < 1e-4);

        // Tallest bar is 2020
        let tallest = geom
            .bars
            .iter()
            .cloned()
            .reduce(|a, b| if b.height > a.height { b } else { a })
            .unwrap();
        assert_eq!(tallest.point.year, 2020);
    }

    #[test]
    fn bars_keep_minimum_height() {
        let series = [TurnoverPoint { year: 2021, value: 0.0 }];
        let geom = ChartGeometry::compute(400.0, 320.0, &series);
        assert_eq!(geom.bars[0].height, 1.0);
    }

    #[test]
    fn gridlines_cover_axis_in_steps() {
        let geom = ChartGeometry::compute(668.0, 320.0, &turnover_series());
        assert_eq!(geom.gridlines.len(), 14); // 0..=26,000 step 2,000
        assert_eq!(geom.gridlines[0].value, 0.0);
        assert_eq!(geom.gridlines[0].y, geom.inner_height);
        assert_eq!(geom.gridlines.last().unwrap().value, Y_MAX);
        assert_eq!(geom.gridlines.last().unwrap().y, 0.0);
    }

    #[test]
    fn amount_formatting() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(8_000), "8,000");
        assert_eq!(format_amount(1_234_567), "1,234,567");
        assert_eq!(format_amount(-26_000), "-26,000");
    }
}
