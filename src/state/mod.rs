//! State management modules for the OrgView GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Org chart state (laid-out tree, bounding box, last canvas size)
//! - Interaction state (drag panning)
//! - Filter state (active category chip)
//! - Modal state (open project details, focus restoration)
//! - Chart state (reveal animation progress)
//! - Theme state (theme manager, current theme)

mod org_state;
mod interaction;
mod filter_state;
mod modal_state;
mod chart_state;
mod theme_state;

pub use org_state::OrgChartState;
pub use interaction::InteractionState;
pub use filter_state::FilterState;
pub use modal_state::ModalState;
pub use chart_state::ChartState;
pub use theme_state::ThemeState;
