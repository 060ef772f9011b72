use contracts::dashboards::d400_global_sales::{CountryRevenue, MonthlyChannelRevenue};
use std::collections::BTreeMap;

use crate::domain::Transaction;
use crate::shared::data::SalesDataset;
use crate::shared::dates::{format_date, month_end, DateRange};
use crate::shared::format::round2;

/// Sales (positive amounts) inside the inclusive date window
fn sales_in_range<'a>(
    dataset: &'a SalesDataset,
    range: &'a DateRange,
) -> impl Iterator<Item = &'a Transaction> {
    dataset
        .rows()
        .iter()
        .filter(move |r| range.contains(r.tran_date) && r.is_sale())
}

/// Revenue aggregated by calendar month and sales channel.
///
/// Sorted by month, then channel. Only combinations with at least one sale
/// are returned.
pub fn revenue_by_month_and_channel(
    dataset: &SalesDataset,
    range: &DateRange,
) -> Vec<MonthlyChannelRevenue> {
    let mut groups: BTreeMap<(chrono::NaiveDate, &str), f64> = BTreeMap::new();
    for row in sales_in_range(dataset, range) {
        *groups
            .entry((month_end(row.tran_date), row.store_type.as_str()))
            .or_insert(0.0) += row.total_amt;
    }

    groups
        .into_iter()
        .map(|((month, channel), revenue)| MonthlyChannelRevenue {
            month: format_date(month),
            channel: channel.to_string(),
            revenue: round2(revenue),
        })
        .collect()
}

/// Revenue aggregated by customer country, sorted by country name
pub fn revenue_by_country(dataset: &SalesDataset, range: &DateRange) -> Vec<CountryRevenue> {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for row in sales_in_range(dataset, range) {
        if let Some(country) = row.country.as_deref() {
            *groups.entry(country).or_insert(0.0) += row.total_amt;
        }
    }

    groups
        .into_iter()
        .map(|(country, revenue)| CountryRevenue {
            country: country.to_string(),
            revenue: round2(revenue),
        })
        .collect()
}
