use contracts::dashboards::d402_sales_channels::{SalesShare, WeekdaySales};
use std::collections::BTreeMap;

use crate::domain::Transaction;
use crate::shared::data::SalesDataset;
use crate::shared::format::round2;

pub const WEEKDAY_LABELS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn weekday_label(day_of_week: u8) -> Option<&'static str> {
    WEEKDAY_LABELS.get(day_of_week as usize).copied()
}

/// Amount per weekday for one channel, Monday first. Weekdays without
/// transactions are left out.
pub fn sales_by_weekday(dataset: &SalesDataset, channel: &str) -> Vec<WeekdaySales> {
    let mut groups: BTreeMap<u8, f64> = BTreeMap::new();
    for row in dataset.by_channel(channel) {
        *groups.entry(row.day_of_week).or_insert(0.0) += row.total_amt;
    }

    groups
        .into_iter()
        .filter_map(|(day, amount)| {
            let label = weekday_label(day)?;
            Some(WeekdaySales {
                day_of_week: day,
                label: label.to_string(),
                amount: round2(amount),
            })
        })
        .collect()
}

/// Amount per customer country for one channel
pub fn sales_by_country(dataset: &SalesDataset, channel: &str) -> Vec<SalesShare> {
    group_channel(dataset, channel, |r| r.country.as_deref())
}

/// Amount per customer gender for one channel
pub fn sales_by_gender(dataset: &SalesDataset, channel: &str) -> Vec<SalesShare> {
    group_channel(dataset, channel, |r| r.gender.as_deref())
}

fn group_channel<'a>(
    dataset: &'a SalesDataset,
    channel: &'a str,
    key: impl Fn(&'a Transaction) -> Option<&'a str>,
) -> Vec<SalesShare> {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for row in dataset.by_channel(channel) {
        if let Some(k) = key(row) {
            *groups.entry(k).or_insert(0.0) += row.total_amt;
        }
    }

    groups
        .into_iter()
        .map(|(label, amount)| SalesShare {
            label: label.to_string(),
            amount: round2(amount),
        })
        .collect()
}
