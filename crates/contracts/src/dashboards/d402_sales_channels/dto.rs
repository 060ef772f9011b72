use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelRequest {
    /// Store type, e.g. "e-Shop"
    pub channel: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdaySales {
    /// 0 = Monday .. 6 = Sunday
    pub day_of_week: u8,
    pub label: String,
    pub amount: f64,
}

/// Generic (label, amount) slice of a pie chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesShare {
    pub label: String,
    pub amount: f64,
}
