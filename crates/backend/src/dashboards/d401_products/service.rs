use contracts::shared::chart::{
    AxisValue, BarMode, BarTrace, Figure, Layout, Margin, Orientation, PieTrace, Trace,
};

use super::repository;
use crate::shared::data::SalesDataset;

/// Stacked horizontal bars of F/M sales per subcategory of `category`
pub fn subcategories_by_gender_figure(dataset: &SalesDataset, category: &str) -> Figure {
    let rows = repository::subcategory_gender_pivot(dataset, category);

    let labels: Vec<AxisValue> = rows
        .iter()
        .map(|r| AxisValue::Text(r.subcategory.clone()))
        .collect();

    let series = |name: &str, values: Vec<f64>| {
        Trace::Bar(BarTrace {
            x: values.into_iter().map(AxisValue::Number).collect(),
            y: labels.clone(),
            name: Some(name.to_string()),
            orientation: Some(Orientation::Horizontal),
            ..Default::default()
        })
    };

    let data = vec![
        series("F", rows.iter().map(|r| r.female).collect()),
        series("M", rows.iter().map(|r| r.male).collect()),
    ];

    let layout = Layout {
        barmode: Some(BarMode::Stack),
        margin: Some(Margin { t: 20 }),
        ..Default::default()
    };

    Figure::new(data, layout)
}

/// Share of every product category in total sales
pub fn category_share_figure(dataset: &SalesDataset) -> Figure {
    let (labels, values): (Vec<String>, Vec<f64>) = repository::revenue_by_category(dataset)
        .into_iter()
        .map(|r| (r.category, r.revenue))
        .unzip();

    Figure::new(
        vec![Trace::Pie(PieTrace {
            labels,
            values,
            ..Default::default()
        })],
        Layout::titled("Sales by product category"),
    )
}
