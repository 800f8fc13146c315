//! Project filter chip state.

use orgview::{project_catalog, CategoryFilter};

/// State related to the project filter chips.
///
/// Exactly one chip is active at a time, mirroring the site's
/// `aria-pressed` chip row.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    active: CategoryFilter,
}

impl FilterState {
    /// Creates a filter state with "All" selected.
    pub fn new() -> Self {
        Self {
            active: CategoryFilter::All,
        }
    }

    /// Creates a filter state with a preselected chip.
    pub fn with_filter(filter: CategoryFilter) -> Self {
        Self { active: filter }
    }

    // ===== Queries =====

    /// Returns the active filter.
    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    /// Indices into the catalog of projects passing the active filter.
    pub fn visible_projects(&self) -> Vec<usize> {
        project_catalog()
            .iter()
            .enumerate()
            .filter(|(_, p)| self.active.matches(p))
            .map(|(i, _)| i)
            .collect()
    }

    // ===== Mutations =====

    /// Activates a chip.
    pub fn set_active(&mut self, filter: CategoryFilter) {
        self.active = filter;
    }
}
