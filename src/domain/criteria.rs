// src/domain/criteria.rs

use std::fmt;
use std::str::FromStr;

/// Category filter: everything, or one exact `type` value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Type(String),
}

impl Category {
    pub fn matches(&self, property_type: &str) -> bool {
        match self {
            Category::All => true,
            Category::Type(t) => t == property_type,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::All => "all",
            Category::Type(t) => t,
        }
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        match raw.trim() {
            "" | "all" => Category::All,
            t => Category::Type(t.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    AreaDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::None,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::AreaDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::PriceAsc => "price_asc",
            SortMode::PriceDesc => "price_desc",
            SortMode::AreaDesc => "area_desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::None => "Default order",
            SortMode::PriceAsc => "Price: low to high",
            SortMode::PriceDesc => "Price: high to low",
            SortMode::AreaDesc => "Largest area",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(SortMode::None),
            "price_asc" => Ok(SortMode::PriceAsc),
            "price_desc" => Ok(SortMode::PriceDesc),
            "area_desc" => Ok(SortMode::AreaDesc),
            other => Err(format!("unknown sort mode {other:?}")),
        }
    }
}

/// The filter/sort state the UI controls currently express.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub category: Category,
    /// Inclusive upper bound.
    pub max_price: f64,
    /// 0 = no constraint.
    pub min_beds: u32,
    /// 0 = no constraint.
    pub min_area: f64,
    /// Case-insensitive substring over name and description.
    pub query: String,
    pub sort: SortMode,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: Category::All,
            max_price: f64::INFINITY,
            min_beds: 0,
            min_area: 0.0,
            query: String::new(),
            sort: SortMode::None,
        }
    }
}

impl FilterCriteria {
    /// Defaults, with the price bound set to the control's ceiling.
    pub fn with_ceiling(max_price: f64) -> Self {
        Self {
            max_price,
            ..Self::default()
        }
    }

    /// Puts every filter back to "no constraint". Sort mode is a separate
    /// control and survives a reset.
    pub fn reset(&mut self, price_ceiling: f64) {
        *self = Self {
            sort: self.sort,
            ..Self::with_ceiling(price_ceiling)
        };
    }

    pub fn apply(&mut self, change: CriteriaChange) {
        match change {
            CriteriaChange::Category(category) => self.category = category,
            CriteriaChange::MaxPrice(price) => self.max_price = price,
            CriteriaChange::MinBeds(beds) => self.min_beds = beds,
            CriteriaChange::MinArea(area) => self.min_area = area,
            CriteriaChange::Query(query) => self.query = query,
            CriteriaChange::Sort(sort) => self.sort = sort,
        }
    }
}

/// One edit to one control.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaChange {
    Category(Category),
    MaxPrice(f64),
    MinBeds(u32),
    MinArea(f64),
    Query(String),
    Sort(SortMode),
}
