use serde::{Deserialize, Serialize};

use super::chart::Figure;

/// Current value of an input control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControlValue {
    /// Date range picker: inclusive bounds, "YYYY-MM-DD" (a time suffix is tolerated)
    DateRange {
        start_date: String,
        end_date: String,
    },
    /// Dropdown selection
    Selection { value: String },
}

/// Request sent by the page whenever a control changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackRequest {
    pub control_id: String,
    #[serde(flatten)]
    pub value: ControlValue,
}

/// Replacement figure for one chart slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputUpdate {
    pub output_id: String,
    pub figure: Figure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackResponse {
    pub updates: Vec<OutputUpdate>,
}
