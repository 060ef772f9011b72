pub mod callbacks;
pub mod d400_global_sales;
pub mod d401_products;
pub mod d402_sales_channels;

use contracts::shared::layout::{TabInfo, TabLayout};

use crate::shared::data::SalesDataset;
use crate::shared::error::DashboardError;

type TabRenderer = fn(&SalesDataset) -> TabLayout;

/// Tabs in display order
const TABS: [(&str, &str, TabRenderer); 3] = [
    (
        d400_global_sales::layout::TAB_ID,
        d400_global_sales::layout::TAB_LABEL,
        d400_global_sales::layout::render_tab,
    ),
    (
        d401_products::layout::TAB_ID,
        d401_products::layout::TAB_LABEL,
        d401_products::layout::render_tab,
    ),
    (
        d402_sales_channels::layout::TAB_ID,
        d402_sales_channels::layout::TAB_LABEL,
        d402_sales_channels::layout::render_tab,
    ),
];

pub fn tabs() -> Vec<TabInfo> {
    TABS.iter()
        .map(|(id, label, _)| TabInfo {
            id: id.to_string(),
            label: label.to_string(),
        })
        .collect()
}

pub fn render_tab(tab_id: &str, dataset: &SalesDataset) -> Result<TabLayout, DashboardError> {
    TABS.iter()
        .find(|(id, _, _)| *id == tab_id)
        .map(|(_, _, render)| render(dataset))
        .ok_or_else(|| DashboardError::UnknownTab(tab_id.to_string()))
}
