use serde::{Deserialize, Serialize};

/// One point coordinate: numeric values for amounts, text for categories and dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Number(f64),
    Text(String),
}

impl From<f64> for AxisValue {
    fn from(v: f64) -> Self {
        AxisValue::Number(v)
    }
}

impl From<String> for AxisValue {
    fn from(v: String) -> Self {
        AxisValue::Text(v)
    }
}

impl From<&str> for AxisValue {
    fn from(v: &str) -> Self {
        AxisValue::Text(v.to_string())
    }
}

impl AxisValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AxisValue::Number(v) => Some(*v),
            AxisValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AxisValue::Text(s) => Some(s),
            AxisValue::Number(_) => None,
        }
    }
}

/// Series of a figure, tagged with the plotly trace type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Choropleth(ChoroplethTrace),
    Pie(PieTrace),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "v")]
    Vertical,
    #[serde(rename = "h")]
    Horizontal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    pub x: Vec<AxisValue>,
    pub y: Vec<AxisValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    /// Plotly hoverinfo flag, e.g. "text"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<String>,
    /// Per-point hover labels, same length as `x`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hovertext: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBar {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethTrace {
    /// Location keys, interpreted according to `locationmode`
    pub locations: Vec<String>,
    pub z: Vec<f64>,
    pub locationmode: String,
    pub colorscale: String,
    #[serde(default)]
    pub reversescale: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PieMarker {
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Fraction of the radius cut out (donut chart when > 0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<PieMarker>,
}

impl Trace {
    /// Number of data points (bars, regions or slices) in the series
    pub fn len(&self) -> usize {
        match self {
            Trace::Bar(t) => t.x.len(),
            Trace::Choropleth(t) => t.locations.len(),
            Trace::Pie(t) => t.labels.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
