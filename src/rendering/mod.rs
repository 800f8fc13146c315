//! Low-level painter rendering for the org chart and the turnover chart.

pub mod org_renderer;
pub mod chart_renderer;
pub mod text_utils;
