use contracts::dashboards::d401_products::{CategoryRevenue, SubcategoryGenderRow};
use std::collections::BTreeMap;

use crate::shared::data::SalesDataset;
use crate::shared::format::round2;

/// Subcategory x gender pivot of sales inside one product category.
///
/// Only the "F" and "M" columns are kept; a subcategory without sales for one
/// of them gets 0 there. Rows are sorted ascending by `F + M` (ties in
/// subcategory name order) and rounded after sorting.
pub fn subcategory_gender_pivot(dataset: &SalesDataset, category: &str) -> Vec<SubcategoryGenderRow> {
    // subcategory -> (F, M)
    let mut pivot: BTreeMap<&str, (f64, f64)> = BTreeMap::new();

    for row in dataset.rows() {
        if !row.is_sale() || row.prod_cat.as_deref() != Some(category) {
            continue;
        }
        let Some(subcategory) = row.prod_subcat.as_deref() else {
            continue;
        };
        let is_female = match row.gender.as_deref() {
            Some("F") => true,
            Some("M") => false,
            _ => continue,
        };
        let (female, male) = pivot.entry(subcategory).or_insert((0.0, 0.0));
        if is_female {
            *female += row.total_amt;
        } else {
            *male += row.total_amt;
        }
    }

    let mut rows: Vec<(&str, f64, f64, f64)> = pivot
        .into_iter()
        .map(|(sub, (f, m))| (sub, f, m, f + m))
        .collect();
    // stable sort keeps name order for equal totals
    rows.sort_by(|a, b| a.3.total_cmp(&b.3));

    rows.into_iter()
        .map(|(sub, f, m, total)| SubcategoryGenderRow {
            subcategory: sub.to_string(),
            female: round2(f),
            male: round2(m),
            total: round2(total),
        })
        .collect()
}

/// Sales per product category, in category name order
pub fn revenue_by_category(dataset: &SalesDataset) -> Vec<CategoryRevenue> {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for row in dataset.rows().iter().filter(|r| r.is_sale()) {
        if let Some(category) = row.prod_cat.as_deref() {
            *groups.entry(category).or_insert(0.0) += row.total_amt;
        }
    }

    groups
        .into_iter()
        .map(|(category, revenue)| CategoryRevenue {
            category: category.to_string(),
            revenue: round2(revenue),
        })
        .collect()
}
