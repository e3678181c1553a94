//! Per-category inclusion catalogs.
//!
//! Each category maps to an ordered list of named groups, and each group to
//! an ordered list of item names. Order is display order, and the flattened
//! item order is what selection indices count against.

use hashbrown::HashMap;
use once_cell::sync::Lazy;

use crate::types::Category;

static STANDARD: Lazy<InclusionCatalog> = Lazy::new(build_standard);

/// One named group of selectable items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionGroup {
    /// Heading shown above the items, e.g. `VENUE`.
    pub name: String,
    /// Items in display order.
    pub items: Vec<String>,
}

/// Read-only mapping from category to its grouped inclusion items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InclusionCatalog {
    groups: HashMap<Category, Vec<InclusionGroup>>,
}

impl InclusionCatalog {
    /// Process-wide catalog shipped with the console. Built on first use.
    pub fn standard() -> &'static InclusionCatalog {
        &STANDARD
    }

    /// Starts an empty catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Groups configured for `category`; empty when none are.
    pub fn groups_for(&self, category: Category) -> &[InclusionGroup] {
        self.groups.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every item for `category`, groups concatenated in catalog order.
    pub fn items_for(&self, category: Category) -> Vec<&str> {
        self.groups_for(category)
            .iter()
            .flat_map(|g| g.items.iter().map(String::as_str))
            .collect()
    }

    /// True when `item` belongs to any group of `category`.
    pub fn contains(&self, category: Category, item: &str) -> bool {
        self.groups_for(category)
            .iter()
            .any(|g| g.items.iter().any(|i| i == item))
    }
}

/// Incremental constructor for [`InclusionCatalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    groups: HashMap<Category, Vec<InclusionGroup>>,
}

impl CatalogBuilder {
    /// Appends a group to `category`, after any groups already added.
    pub fn group<I, S>(mut self, category: Category, name: &str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.entry(category).or_default().push(InclusionGroup {
            name: name.to_string(),
            items: items.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Finishes the catalog.
    pub fn build(self) -> InclusionCatalog {
        InclusionCatalog {
            groups: self.groups,
        }
    }
}

fn build_standard() -> InclusionCatalog {
    InclusionCatalog::builder()
        .group(Category::Birthday, "VENUE", ["FUNCTION HALL", "GARDEN", "RESTAURANT", "RESORT"])
        .group(
            Category::Birthday,
            "FOOD AND BEVERAGE",
            ["BUFFET", "PLATED DINNER", "SNACK BAR", "DESSERT BAR", "DRINKS PACKAGE"],
        )
        .group(
            Category::Birthday,
            "DECORATIONS AND THEME",
            ["BALLOON ARCH", "THEMED BACKDROP", "TABLE CENTERPIECES"],
        )
        .group(Category::Birthday, "ENTERTAINMENT", ["HOST", "DJ", "MAGICIAN", "MASCOT"])
        .group(Category::Birthday, "PHOTOGRAPHY", ["PHOTOGRAPHER", "VIDEOGRAPHER", "PHOTO BOOTH"])
        .group(Category::Birthday, "ADD-ONS", ["CUSTOM CAKE", "GIVEAWAYS", "LIGHTS AND SOUNDS"])
        .group(Category::Anniversary, "VENUE", ["BALLROOM", "GARDEN", "BEACHFRONT", "RESTAURANT"])
        .group(
            Category::Anniversary,
            "FOOD AND BEVERAGE",
            ["BUFFET", "PLATED DINNER", "COCKTAIL HOUR", "WINE PAIRING"],
        )
        .group(
            Category::Anniversary,
            "DECORATIONS AND THEME",
            ["FLORAL CENTERPIECES", "CANDLELIGHT SETUP", "THEMED BACKDROP"],
        )
        .group(Category::Anniversary, "ENTERTAINMENT", ["LIVE BAND", "STRING QUARTET", "DJ", "HOST"])
        .group(
            Category::Anniversary,
            "PHOTOGRAPHY",
            ["PHOTOGRAPHER", "VIDEOGRAPHER", "SAME-DAY EDIT"],
        )
        .group(Category::Anniversary, "ADD-ONS", ["ANNIVERSARY CAKE", "RENEWAL OF VOWS", "SOUVENIRS"])
        .group(Category::Burial, "VENUE", ["HOME", "CEMETERY"])
        .group(Category::Burial, "CASKET", ["KIDS", "SMALL", "MEDIUM", "LARGE"])
        .group(Category::Burial, "TRANSPORTATION", ["HEARSE", "FAMILY SHUTTLE", "FLOWER CAR"])
        .group(
            Category::Burial,
            "FLORAL ARRANGEMENTS",
            ["CASKET SPRAY", "STANDING WREATH", "SYMPATHY BASKET"],
        )
        .build()
}
