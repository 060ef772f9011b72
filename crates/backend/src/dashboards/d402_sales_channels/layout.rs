use contracts::shared::layout::{Control, DropdownControl, DropdownOption, GraphSlot, TabLayout};

use crate::shared::data::SalesDataset;

pub const TAB_ID: &str = "tab-3";
pub const TAB_LABEL: &str = "Kanały sprzedaży";

pub const CHANNEL_DROPDOWN: &str = "channel-dropdown";
pub const WEEKDAY_SALES: &str = "weekday-sales";
pub const COUNTRY_SALES: &str = "country-sales";
pub const GENDER_SALES: &str = "gender-sales";

/// Channel dropdown, weekday bars on the first row, country and gender pies below
pub fn render_tab(dataset: &SalesDataset) -> TabLayout {
    let channels = dataset.channels();
    let value = channels.first().cloned();
    let options = channels
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
            id: CHANNEL_DROPDOWN.to_string(),
            options,
            value,
        })],
        rows: vec![
            vec![GraphSlot::new(WEEKDAY_SALES, 100)],
            vec![
                GraphSlot::new(COUNTRY_SALES, 50),
                GraphSlot::new(GENDER_SALES, 50),
            ],
        ],
    }
}
