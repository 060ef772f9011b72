use chrono::{Datelike, NaiveDate};

/// One row of the merged transactions table.
///
/// Fields filled from lookup tables (`country`, `gender`, `prod_cat`,
/// `prod_subcat`) are `None` when the join found no match; such rows are left
/// out of the groupings keyed by that field.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub tran_date: NaiveDate,
    /// Sales channel, e.g. "e-Shop", "MBR", "Flagship store"
    pub store_type: String,
    pub country: Option<String>,
    /// "F" or "M" in well-formed data
    pub gender: Option<String>,
    pub prod_cat: Option<String>,
    pub prod_subcat: Option<String>,
    /// Signed amount, negative for returns
    pub total_amt: f64,
    /// 0 = Monday .. 6 = Sunday
    pub day_of_week: u8,
}

impl Transaction {
    /// Weekday index of a date, Monday = 0
    pub fn weekday_index(date: NaiveDate) -> u8 {
        date.weekday().num_days_from_monday() as u8
    }

    pub fn is_sale(&self) -> bool {
        self.total_amt > 0.0
    }
}
