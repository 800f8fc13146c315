//! Project catalog and category filtering.
//!
//! The catalog is static; filter chips select either everything or a single
//! category. An initial filter can be parsed from a command-line argument,
//! with unknown values falling back to "all".

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Project categories used by the filter chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Bridges,
    Roads,
    Buildings,
}

impl Category {
    /// All categories, in chip display order.
    pub const ALL: [Category; 3] = [Category::Bridges, Category::Roads, Category::Buildings];

    /// Chip label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Bridges => "Bridges",
            Category::Roads => "Roads",
            Category::Buildings => "Buildings",
        }
    }

    /// Parses a category token (case-insensitive).
    pub fn parse(s: &str) -> Option<Category> {
        match s.to_ascii_lowercase().as_str() {
            "bridges" => Some(Category::Bridges),
            "roads" => Some(Category::Roads),
            "buildings" => Some(Category::Buildings),
            _ => None,
        }
    }
}

/// Filter chip selection: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parses a filter token; anything unrecognised selects [`CategoryFilter::All`].
    pub fn parse(s: &str) -> CategoryFilter {
        match Category::parse(s) {
            Some(cat) => CategoryFilter::Only(cat),
            None => CategoryFilter::All,
        }
    }

    /// Whether a project passes this filter.
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => project.category == *cat,
        }
    }

    /// Chip label for this filter.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(cat) => cat.label(),
        }
    }
}

/// A project card in the catalog.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: &'static str,
    pub blurb: &'static str,
    pub category: Category,
    /// Caption baked onto the generated placeholder thumbnail
    pub caption: &'static str,
}

static CATALOG: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project {
            name: "Niger Crossing Bridge",
            blurb: "Dual-carriage river crossing with 420 m of post-tensioned spans and reinforced approaches on both banks.",
            category: Category::Bridges,
            caption: "BRIDGE",
        },
        Project {
            name: "Gurara Valley Viaduct",
            blurb: "Elevated viaduct over the Gurara valley, 18 piers cast in place with segmental deck erection.",
            category: Category::Bridges,
            caption: "VIADUCT",
        },
        Project {
            name: "Eastern Bypass Expressway",
            blurb: "32 km dual expressway with three grade-separated interchanges and full stormwater drainage.",
            category: Category::Roads,
            caption: "EXPRESSWAY",
        },
        Project {
            name: "Airport Access Road",
            blurb: "Rehabilitation and widening of the airport corridor, asphalt overlay and solar street lighting.",
            category: Category::Roads,
            caption: "ROADWORK",
        },
        Project {
            name: "Harbour Logistics Terminal",
            blurb: "Steel-framed cargo terminal with 14,000 m² of warehousing and heavy-duty aprons.",
            category: Category::Buildings,
            caption: "TERMINAL",
        },
        Project {
            name: "Unity Towers",
            blurb: "Twin 16-storey office towers with a shared podium, raft foundation on improved ground.",
            category: Category::Buildings,
            caption: "TOWERS",
        },
    ]
});

/// Returns the static project catalog.
pub fn project_catalog() -> &'static [Project] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parse_falls_back_to_all() {
        assert_eq!(CategoryFilter::parse("bridges"), CategoryFilter::Only(Category::Bridges));
        assert_eq!(CategoryFilter::parse("ROADS"), CategoryFilter::Only(Category::Roads));
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("marinas"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
    }

    #[test]
    fn all_filter_matches_everything() {
        let catalog = project_catalog();
        assert!(catalog.iter().all(|p| CategoryFilter::All.matches(p)));
    }

    #[test]
    fn category_filter_partitions_catalog() {
        let catalog = project_catalog();
        let total: usize = Category::ALL
            .iter()
            .map(|&cat| {
                catalog
                    .iter()
                    .filter(|p| CategoryFilter::Only(cat).matches(p))
                    .count()
            })
            .sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn every_category_has_projects() {
        let catalog = project_catalog();
        for cat in Category::ALL {
            assert!(catalog.iter().any(|p| p.category == cat), "{:?} empty", cat);
        }
    }
}
