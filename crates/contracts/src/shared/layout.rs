use serde::{Deserialize, Serialize};

use super::chart::Figure;

/// Short tab descriptor for the tab strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    /// Tab identifier (e.g., "tab-1")
    pub id: String,
    /// Display label (e.g., "Produkty")
    pub label: String,
}

/// Static structure of one tab: a heading, its input controls and chart slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabLayout {
    pub id: String,
    pub title: String,
    pub controls: Vec<Control>,
    /// Rows of graphs; graphs of one row are laid out side by side
    pub rows: Vec<Vec<GraphSlot>>,
}

impl TabLayout {
    /// All graph slots in row order
    pub fn graphs(&self) -> impl Iterator<Item = &GraphSlot> {
        self.rows.iter().flatten()
    }
}

/// Input control rendered above the charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    DateRange(DateRangeControl),
    Dropdown(DropdownControl),
}

impl Control {
    pub fn id(&self) -> &str {
        match self {
            Control::DateRange(c) => &c.id,
            Control::Dropdown(c) => &c.id,
        }
    }
}

/// Date picker range; all dates in "YYYY-MM-DD"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRangeControl {
    pub id: String,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownControl {
    pub id: String,
    pub options: Vec<DropdownOption>,
    /// Initially selected value, None when there are no options
    pub value: Option<String>,
}

/// Placeholder for a chart. `figure` is set for charts that do not depend on
/// any control; the rest are filled in by callbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSlot {
    pub id: String,
    /// Relative width in percent of the row
    pub width: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figure: Option<Figure>,
}

impl GraphSlot {
    pub fn new(id: &str, width: u8) -> Self {
        Self {
            id: id.to_string(),
            width,
            figure: None,
        }
    }

    pub fn with_figure(id: &str, width: u8, figure: Figure) -> Self {
        Self {
            id: id.to_string(),
            width,
            figure: Some(figure),
        }
    }
}
