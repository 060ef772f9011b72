use contracts::shared::chart::{AxisValue, BarTrace, Figure, Layout, PieMarker, PieTrace, Trace};

use super::repository;
use crate::shared::data::SalesDataset;

/// Slice colors of the gender donut, looked up by value
const GENDER_COLORS: [(&str, &str); 2] = [("F", "yellow"), ("M", "red")];
/// Color of any gender value missing from `GENDER_COLORS`
const FALLBACK_COLOR: &str = "lightgray";

pub fn gender_color(gender: &str) -> &'static str {
    GENDER_COLORS
        .iter()
        .find(|(value, _)| *value == gender)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Bars of sales per weekday for one channel
pub fn weekday_figure(dataset: &SalesDataset, channel: &str) -> Figure {
    let rows = repository::sales_by_weekday(dataset, channel);

    let trace = BarTrace {
        x: rows.iter().map(|r| AxisValue::Text(r.label.clone())).collect(),
        y: rows.iter().map(|r| AxisValue::Number(r.amount)).collect(),
        ..Default::default()
    };

    Figure::new(vec![Trace::Bar(trace)], Layout::titled("Sales by day of week"))
}

/// Pie of sales per country for one channel
pub fn countries_figure(dataset: &SalesDataset, channel: &str) -> Figure {
    let (labels, values): (Vec<String>, Vec<f64>) = repository::sales_by_country(dataset, channel)
        .into_iter()
        .map(|r| (r.label, r.amount))
        .unzip();

    Figure::new(
        vec![Trace::Pie(PieTrace {
            labels,
            values,
            ..Default::default()
        })],
        Layout::titled("Sales by country"),
    )
}

/// Donut of sales per gender for one channel
pub fn gender_figure(dataset: &SalesDataset, channel: &str) -> Figure {
    let (labels, values): (Vec<String>, Vec<f64>) = repository::sales_by_gender(dataset, channel)
        .into_iter()
        .map(|r| (r.label, r.amount))
        .unzip();
    let colors = labels.iter().map(|g| gender_color(g).to_string()).collect();

    Figure::new(
        vec![Trace::Pie(PieTrace {
            labels,
            values,
            hole: Some(0.3),
            marker: Some(PieMarker { colors }),
        })],
        Layout::titled("Sales by gender"),
    )
}
