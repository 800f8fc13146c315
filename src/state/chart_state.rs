//! Turnover chart reveal state.

/// State for the bar chart's reveal animation.
///
/// The bars grow from the baseline the first time the chart is drawn; the
/// animation is primed with a zero frame so egui animates from 0 instead
/// of snapping to the target.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    reveal_primed: bool,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the zero frame has been emitted.
    pub fn reveal_primed(&self) -> bool {
        self.reveal_primed
    }

    /// Marks the zero frame as emitted.
    pub fn set_primed(&mut self) {
        self.reveal_primed = true;
    }

    /// Restarts the reveal animation.
    pub fn replay(&mut self) {
        self.reveal_primed = false;
    }
}
