use contracts::shared::layout::{Control, DropdownControl, DropdownOption, GraphSlot, TabLayout};

use super::service;
use crate::shared::data::SalesDataset;

pub const TAB_ID: &str = "tab-2";
pub const TAB_LABEL: &str = "Produkty";

pub const PROD_DROPDOWN: &str = "prod-dropdown";
pub const PIE_PROD_CAT: &str = "pie-prod-cat";
pub const BARH_PROD_SUBCAT: &str = "barh-prod-subcat";

/// Category share pie next to the category dropdown and its subcategory bars
pub fn render_tab(dataset: &SalesDataset) -> TabLayout {
    let categories = dataset.categories();
    let value = categories.first().cloned();
    let options = categories
        .into_iter()
        .map(|c| DropdownOption {
            label: c.clone(),
            value: c,
        })
        .collect();

    TabLayout {
        id: TAB_ID.to_string(),
        title: TAB_LABEL.to_string(),
        controls: vec![Control::Dropdown(DropdownControl {
            id: PROD_DROPDOWN.to_string(),
            options,
            value,
        })],
        rows: vec![vec![
            GraphSlot::with_figure(PIE_PROD_CAT, 50, service::category_share_figure(dataset)),
            GraphSlot::new(BARH_PROD_SUBCAT, 50),
        ]],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::dataset::test_support::sample_dataset;

    #[test]
    fn test_dropdown_lists_categories_and_pie_is_static() {
        let tab = render_tab(&sample_dataset());
        match &tab.controls[0] {
            Control::Dropdown(c) => {
                let values: Vec<_> = c.options.iter().map(|o| o.value.as_str()).collect();
                assert_eq!(values, vec!["Books", "Clothing"]);
                assert_eq!(c.value.as_deref(), Some("Books"));
            }
            other => panic!("unexpected control {:?}", other),
        }

        let graphs: Vec<_> = tab.graphs().collect();
        assert_eq!(graphs[0].id, PIE_PROD_CAT);
        assert!(graphs[0].figure.is_some());
        assert_eq!(graphs[1].id, BARH_PROD_SUBCAT);
        assert!(graphs[1].figure.is_none());
    }
}
