use serde::{Deserialize, Serialize};

/// Request for the global sales charts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRangeRequest {
    /// Start date in format "YYYY-MM-DD" (inclusive)
    pub start_date: String,
    /// End date in format "YYYY-MM-DD" (inclusive)
    pub end_date: String,
}

/// One bucket of revenue per calendar month and sales channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyChannelRevenue {
    /// Last day of the month, "YYYY-MM-DD"
    pub month: String,
    pub channel: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRevenue {
    pub country: String,
    pub revenue: f64,
}
