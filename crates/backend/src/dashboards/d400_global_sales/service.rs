use contracts::shared::chart::{
    AxisValue, BarMode, BarTrace, ChoroplethTrace, ColorBar, Figure, Geo, Layout, Legend,
    Projection, Trace,
};
use std::collections::BTreeMap;

use super::repository;
use crate::shared::data::SalesDataset;
use crate::shared::dates::DateRange;
use crate::shared::format::format_thousands;

/// Stacked monthly revenue bars, one series per sales channel
pub fn revenue_by_month_figure(dataset: &SalesDataset, range: &DateRange) -> Figure {
    let data = repository::revenue_by_month_and_channel(dataset, range);

    // BTreeMap keeps the channel series in name order; points stay in month order
    let mut series: BTreeMap<String, BarTrace> = BTreeMap::new();
    for row in data {
        let trace = series.entry(row.channel.clone()).or_insert_with(|| BarTrace {
            name: Some(row.channel.clone()),
            hoverinfo: Some("text".to_string()),
            hovertext: Some(Vec::new()),
            ..Default::default()
        });
        trace.x.push(AxisValue::Text(row.month));
        trace.y.push(AxisValue::Number(row.revenue));
        if let Some(hover) = trace.hovertext.as_mut() {
            hover.push(format_thousands(row.revenue));
        }
    }

    let layout = Layout {
        barmode: Some(BarMode::Stack),
        legend: Some(Legend { x: 0.0, y: -0.5 }),
        ..Layout::titled("Przychody")
    };

    Figure::new(series.into_values().map(Trace::Bar).collect(), layout)
}

/// World map colored by revenue per country
pub fn revenue_by_country_figure(dataset: &SalesDataset, range: &DateRange) -> Figure {
    let data = repository::revenue_by_country(dataset, range);

    let (locations, z): (Vec<String>, Vec<f64>) =
        data.into_iter().map(|r| (r.country, r.revenue)).unzip();

    let trace = ChoroplethTrace {
        locations,
        z,
        locationmode: "country names".to_string(),
        colorscale: "Viridis".to_string(),
        reversescale: true,
        colorbar: Some(ColorBar {
            title: "Sales".to_string(),
        }),
    };

    let layout = Layout {
        geo: Some(Geo {
            showframe: false,
            projection: Projection {
                kind: "natural earth".to_string(),
            },
        }),
        ..Layout::titled("Mapa")
    };

    Figure::new(vec![Trace::Choropleth(trace)], layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::dataset::test_support::{sample_dataset, tx};

    #[test]
    fn test_one_series_per_channel_without_zero_fill() {
        let ds = sample_dataset();
        let range = DateRange::parse("2011-01-01", "2011-03-31").unwrap();
        let fig = revenue_by_month_figure(&ds, &range);

        let names: Vec<_> = fig
            .data
            .iter()
            .map(|t| match t {
                Trace::Bar(b) => b.name.clone().unwrap(),
                other => panic!("unexpected trace {:?}", other),
            })
            .collect();
        assert_eq!(names, vec!["Flagship store", "MBR", "e-Shop"]);

        // Flagship store only sold in February
        match &fig.data[0] {
            Trace::Bar(b) => {
                assert_eq!(b.x, vec![AxisValue::from("2011-02-28")]);
                assert_eq!(b.y, vec![AxisValue::from(55.5)]);
                assert_eq!(b.hovertext.as_ref().map(Vec::len), Some(1));
                assert_eq!(b.hoverinfo.as_deref(), Some("text"));
            }
            other => panic!("unexpected trace {:?}", other),
        }

        assert_eq!(fig.layout.barmode, Some(BarMode::Stack));
        assert_eq!(fig.layout.legend, Some(Legend { x: 0.0, y: -0.5 }));
        assert_eq!(fig.layout.title.as_ref().unwrap().text, "Przychody");
    }

    #[test]
    fn test_two_row_scenario_yields_single_january_bucket() {
        let ds = SalesDataset::new(vec![
            tx("2011-01-05", "e-Shop", "Poland", "F", "Books", "Fiction", 100.0),
            tx("2011-02-10", "e-Shop", "Poland", "F", "Books", "Fiction", -50.0),
        ]);
        let range = DateRange::parse("2011-01-01", "2011-02-28").unwrap();
        let fig = revenue_by_month_figure(&ds, &range);

        assert_eq!(fig.data.len(), 1);
        assert_eq!(fig.point_count(), 1);
        match &fig.data[0] {
            Trace::Bar(b) => {
                assert_eq!(b.x[0].as_str(), Some("2011-01-31"));
                assert_eq!(b.y[0].as_f64(), Some(100.0));
                assert_eq!(b.hovertext.as_ref().unwrap()[0], "0.10k");
            }
            other => panic!("unexpected trace {:?}", other),
        }
    }

    #[test]
    fn test_choropleth_is_keyed_by_country_name() {
        let ds = sample_dataset();
        let range = DateRange::parse("2011-01-01", "2011-01-31").unwrap();
        let fig = revenue_by_country_figure(&ds, &range);

        match &fig.data[0] {
            Trace::Choropleth(c) => {
                assert_eq!(c.locations, vec!["Germany", "Poland"]);
                assert_eq!(c.z, vec![80.0, 320.0]);
                assert_eq!(c.locationmode, "country names");
                assert_eq!(c.colorscale, "Viridis");
                assert!(c.reversescale);
                assert_eq!(c.colorbar.as_ref().map(|cb| cb.title.as_str()), Some("Sales"));
            }
            other => panic!("unexpected trace {:?}", other),
        }
        let geo = fig.layout.geo.unwrap();
        assert!(!geo.showframe);
        assert_eq!(geo.projection.kind, "natural earth");
    }

    #[test]
    fn test_empty_window_gives_empty_figures() {
        let ds = sample_dataset();
        let range = DateRange::parse("2020-01-01", "2020-12-31").unwrap();
        assert!(revenue_by_month_figure(&ds, &range).data.is_empty());
        assert_eq!(revenue_by_country_figure(&ds, &range).point_count(), 0);
    }
}
