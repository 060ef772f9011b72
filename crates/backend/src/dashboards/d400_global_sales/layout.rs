use contracts::shared::layout::{Control, DateRangeControl, GraphSlot, TabLayout};

use crate::shared::data::SalesDataset;
use crate::shared::dates::format_date;

pub const TAB_ID: &str = "tab-1";
pub const TAB_LABEL: &str = "Sprzedaż globalna";

pub const SALES_RANGE: &str = "sales-range";
pub const BAR_SALES: &str = "bar-sales";
pub const CHOROPLETH_SALES: &str = "choropleth-sales";

/// Date range picker spanning the whole dataset, monthly bars and the map
pub fn render_tab(dataset: &SalesDataset) -> TabLayout {
    let bounds = dataset
        .date_bounds()
        .map(|(min, max)| (format_date(min), format_date(max)));
    let (min_date, max_date) = match bounds {
        Some((min, max)) => (Some(min), Some(max)),
        None => (None, None),
    };

    TabLayout {
        id: TAB_ID.to_string(),
        title: TAB_LABEL.to_string(),
        controls: vec![Control::DateRange(DateRangeControl {
            id: SALES_RANGE.to_string(),
            start_date: min_date.clone(),
            end_date: max_date.clone(),
            min_date,
            max_date,
        })],
        rows: vec![vec![
            GraphSlot::new(BAR_SALES, 50),
            GraphSlot::new(CHOROPLETH_SALES, 50),
        ]],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::dataset::test_support::sample_dataset;

    #[test]
    fn test_range_defaults_to_full_dataset() {
        let tab = render_tab(&sample_dataset());
        match &tab.controls[0] {
            Control::DateRange(c) => {
                assert_eq!(c.id, SALES_RANGE);
                assert_eq!(c.min_date.as_deref(), Some("2011-01-03"));
                assert_eq!(c.max_date.as_deref(), Some("2011-03-08"));
                assert_eq!(c.start_date, c.min_date);
                assert_eq!(c.end_date, c.max_date);
            }
            other => panic!("unexpected control {:?}", other),
        }
        let ids: Vec<_> = tab.graphs().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec![BAR_SALES, CHOROPLETH_SALES]);
    }

    #[test]
    fn test_empty_dataset_has_open_range() {
        let tab = render_tab(&SalesDataset::default());
        match &tab.controls[0] {
            Control::DateRange(c) => assert!(c.min_date.is_none() && c.start_date.is_none()),
            other => panic!("unexpected control {:?}", other),
        }
    }
}
