pub mod org;
pub mod layout;
pub mod viewport;
pub mod chart;
pub mod projects;
pub mod placeholder;
pub mod theme;

// Export org chart model
pub use org::{OrgNode, company_org_chart};

// Export layout engine
pub use layout::{
    measure, layout, run_layout, bounding_box, connectors,
    Connector, NODE_WIDTH, NODE_HEIGHT, H_GAP, V_GAP, CANVAS_WIDTH, CANVAS_HEIGHT,
};

// Export viewport controller
pub use viewport::{ViewportState, MIN_SCALE, MAX_SCALE};

// Export turnover chart model
pub use chart::{ChartGeometry, TurnoverPoint, turnover_series, format_amount};

// Export project catalog
pub use projects::{Category, CategoryFilter, Project, project_catalog};

// Export placeholder generator
pub use placeholder::{PlaceholderSpec, PlaceholderFormat, render_placeholder, encode_placeholder};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, with_alpha};
