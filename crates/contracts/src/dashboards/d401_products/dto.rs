use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRequest {
    /// Product category, one of the dropdown values
    pub category: String,
}

/// Row of the subcategory x gender pivot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryGenderRow {
    pub subcategory: String,
    /// Sum for gender "F" (0 when no such sales)
    pub female: f64,
    /// Sum for gender "M" (0 when no such sales)
    pub male: f64,
    /// female + male, sort key of the pivot
    #[serde(rename = "_sum")]
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: f64,
}
