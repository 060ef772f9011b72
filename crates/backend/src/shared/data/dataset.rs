use chrono::NaiveDate;

use crate::domain::Transaction;

/// Merged transactions table, immutable after load.
///
/// Built once at startup and shared read-only between request handlers.
#[derive(Debug, Clone, Default)]
pub struct SalesDataset {
    rows: Vec<Transaction>,
}

impl SalesDataset {
    pub fn new(rows: Vec<Transaction>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Earliest and latest transaction date
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.rows.iter().map(|r| r.tran_date).min()?;
        let max = self.rows.iter().map(|r| r.tran_date).max()?;
        Some((min, max))
    }

    /// Distinct store types in order of first appearance, blank ones skipped
    pub fn channels(&self) -> Vec<String> {
        distinct(self.rows.iter().map(|r| {
            let channel = r.store_type.trim();
            (!channel.is_empty()).then_some(channel)
        }))
    }

    /// Distinct product categories in order of first appearance
    pub fn categories(&self) -> Vec<String> {
        distinct(self.rows.iter().map(|r| r.prod_cat.as_deref()))
    }

    /// Rows of one sales channel
    pub fn by_channel<'a>(&'a self, channel: &'a str) -> impl Iterator<Item = &'a Transaction> {
        self.rows.iter().filter(move |r| r.store_type == channel)
    }
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values.flatten() {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_distinct_values_keep_first_appearance_order() {
        let ds = sample_dataset();
        assert_eq!(ds.channels(), vec!["e-Shop", "MBR", "Flagship store"]);
        assert_eq!(ds.categories(), vec!["Books", "Clothing"]);
    }

    #[test]
    fn test_date_bounds() {
        let ds = sample_dataset();
        let (min, max) = ds.date_bounds().unwrap();
        assert_eq!(min, NaiveDate::from_ymd_opt(2011, 1, 3).unwrap());
        assert_eq!(max, NaiveDate::from_ymd_opt(2011, 3, 8).unwrap());
        assert!(SalesDataset::default().date_bounds().is_none());
    }

    #[test]
    fn test_missing_category_is_not_a_distinct_value() {
        let mut row = tx("2011-01-03", "e-Shop", "Poland", "F", "Books", "Fiction", 1.0);
        row.prod_cat = None;
        let ds = SalesDataset::new(vec![row]);
        assert!(ds.categories().is_empty());
        assert_eq!(ds.by_channel("e-Shop").count(), 1);
        assert_eq!(ds.by_channel("MBR").count(), 0);
    }

    #[test]
    fn test_blank_channel_is_not_a_dropdown_option() {
        let ds = SalesDataset::new(vec![
            tx("2011-01-03", "", "Poland", "F", "Books", "Fiction", 1.0),
            tx("2011-01-04", "  ", "Poland", "M", "Books", "Fiction", 2.0),
            tx("2011-01-05", "MBR", "Poland", "M", "Books", "Fiction", 3.0),
        ]);
        assert_eq!(ds.channels(), vec!["MBR"]);
        assert_eq!(ds.len(), 3);
    }
}
