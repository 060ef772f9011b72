use csv::StringRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::dataset::SalesDataset;
use super::error::DataError;
use crate::domain::Transaction;
use crate::shared::config::{Config, DataSource};
use crate::shared::dates::parse_source_date;

/// Source of the merged transactions table
pub trait DataProvider: Send + Sync {
    fn load(&self) -> Result<SalesDataset, DataError>;
}

/// Pick the provider configured in `[data]`
pub fn provider_from_config(config: &Config) -> Box<dyn DataProvider> {
    let dir = config.data_dir();
    match config.data.source {
        DataSource::Raw => Box::new(RawTablesProvider::new(dir)),
        DataSource::Merged => Box::new(MergedTableProvider::new(dir.join(&config.data.merged_file))),
    }
}

// ---------------------------------------------------------------------------
// CSV table helper
// ---------------------------------------------------------------------------

/// Fully read CSV file with header lookup by name
#[derive(Debug)]
pub struct CsvTable {
    name: String,
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl CsvTable {
    pub fn from_reader<R: Read>(name: &str, reader: R) -> Result<Self, DataError> {
        let csv_err = |source| DataError::Csv {
            table: name.to_string(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers().map_err(csv_err)?.clone();
        let records = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(csv_err)?;

        Ok(Self {
            name: name.to_string(),
            headers,
            records,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_reader(&name, file)
    }

    /// Index of a column; exact name first, then case-insensitive.
    /// The UTF-8 BOM some exporters put before the first header is ignored.
    pub fn column(&self, column: &str) -> Result<usize, DataError> {
        let clean = |h: &str| h.trim_start_matches('\u{FEFF}').trim().to_string();
        self.headers
            .iter()
            .position(|h| clean(h) == column)
            .or_else(|| {
                self.headers
                    .iter()
                    .position(|h| clean(h).eq_ignore_ascii_case(column))
            })
            .ok_or_else(|| DataError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    pub fn optional_column(&self, column: &str) -> Option<usize> {
        self.column(column).ok()
    }

    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Trimmed field, None when absent or empty
fn field(record: &StringRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("nan"))
        .map(str::to_string)
}

fn parse_amount(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Lookup table `key column -> value column`; first occurrence of a key wins
fn lookup(table: &CsvTable, key: &str, value: &str) -> Result<HashMap<String, String>, DataError> {
    let key_idx = table.column(key)?;
    let value_idx = table.column(value)?;
    let mut map = HashMap::new();
    for record in table.records() {
        if let (Some(k), Some(v)) = (field(record, key_idx), field(record, value_idx)) {
            map.entry(k).or_insert(v);
        }
    }
    Ok(map)
}

// ---------------------------------------------------------------------------
// Raw tables: transactions + customers + product categories + country codes
// ---------------------------------------------------------------------------

/// Merges the raw source tables found in one directory
pub struct RawTablesProvider {
    dir: PathBuf,
}

impl RawTablesProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `transactions/*.csv` in file-name order, or a single `transactions.csv`
    fn transaction_files(&self) -> Result<Vec<PathBuf>, DataError> {
        let tx_dir = self.dir.join("transactions");
        if tx_dir.is_dir() {
            let entries = std::fs::read_dir(&tx_dir).map_err(|source| DataError::Io {
                path: tx_dir.clone(),
                source,
            })?;
            let mut files: Vec<PathBuf> = entries
                .filter_map(|e| e.ok().map(|e| e.path()))
                .filter(|p| {
                    p.extension()
                        .map(|ext| ext.eq_ignore_ascii_case("csv"))
                        .unwrap_or(false)
                })
                .collect();
            files.sort();
            if files.is_empty() {
                return Err(DataError::NoTransactions(tx_dir));
            }
            return Ok(files);
        }

        let single = self.dir.join("transactions.csv");
        if single.is_file() {
            Ok(vec![single])
        } else {
            Err(DataError::NoTransactions(self.dir.clone()))
        }
    }
}

impl DataProvider for RawTablesProvider {
    fn load(&self) -> Result<SalesDataset, DataError> {
        tracing::info!("Loading raw sales tables from {}", self.dir.display());

        let transactions = self
            .transaction_files()?
            .iter()
            .map(|p| CsvTable::from_path(p))
            .collect::<Result<Vec<_>, _>>()?;
        let customers = CsvTable::from_path(&self.dir.join("customers.csv"))?;
        let categories = CsvTable::from_path(&self.dir.join("prod_cat_info.csv"))?;
        let countries = CsvTable::from_path(&self.dir.join("country_codes.csv"))?;

        let rows = merge_tables(&transactions, &customers, &categories, &countries)?;
        Ok(SalesDataset::new(rows))
    }
}

/// Customer attributes joined onto transactions
struct CustomerInfo {
    gender: Option<String>,
    country: Option<String>,
}

/// Left-join transactions with product categories, customers and countries
pub fn merge_tables(
    transactions: &[CsvTable],
    customers: &CsvTable,
    categories: &CsvTable,
    countries: &CsvTable,
) -> Result<Vec<Transaction>, DataError> {
    let country_names = lookup(countries, "country_code", "country")?;

    let cust_id = customers.column("customer_Id")?;
    let cust_gender = customers.column("Gender")?;
    let cust_country = customers.column("country_code")?;
    let mut customer_map: HashMap<String, CustomerInfo> = HashMap::new();
    for record in customers.records() {
        let Some(id) = field(record, cust_id) else {
            continue;
        };
        let country = field(record, cust_country).and_then(|code| country_names.get(&code).cloned());
        customer_map.entry(id).or_insert(CustomerInfo {
            gender: field(record, cust_gender),
            country,
        });
    }

    let category_names = lookup(categories, "prod_cat_code", "prod_cat")?;
    let cat_code = categories.column("prod_cat_code")?;
    let sub_code = categories.column("prod_sub_cat_code")?;
    let sub_name = categories.column("prod_subcat")?;
    // Subcategory codes repeat across categories, so the key is the pair
    let mut subcategory_names: HashMap<(String, String), String> = HashMap::new();
    for record in categories.records() {
        if let (Some(c), Some(s), Some(name)) = (
            field(record, cat_code),
            field(record, sub_code),
            field(record, sub_name),
        ) {
            subcategory_names.entry((c, s)).or_insert(name);
        }
    }

    let mut rows = Vec::new();
    for table in transactions {
        let date_idx = table.column("tran_date")?;
        let cust_idx = table.column("cust_id")?;
        let cat_idx = table.column("prod_cat_code")?;
        let sub_idx = table.column("prod_subcat_code")?;
        let amount_idx = table.column("total_amt")?;
        let store_idx = table.column("Store_type")?;

        let mut skipped = 0usize;
        for record in table.records() {
            let raw_date = record.get(date_idx).unwrap_or_default();
            let raw_amount = record.get(amount_idx).unwrap_or_default();
            let (Some(tran_date), Some(total_amt)) =
                (parse_source_date(raw_date), parse_amount(raw_amount))
            else {
                tracing::warn!(
                    "Skipping {} row: date '{}', amount '{}'",
                    table.name(),
                    raw_date,
                    raw_amount
                );
                skipped += 1;
                continue;
            };

            let customer = field(record, cust_idx).and_then(|id| customer_map.get(&id));
            let category_code = field(record, cat_idx);
            let prod_cat = category_code
                .as_ref()
                .and_then(|c| category_names.get(c).cloned());
            let prod_subcat = match (category_code, field(record, sub_idx)) {
                (Some(c), Some(s)) => subcategory_names.get(&(c, s)).cloned(),
                _ => None,
            };

            rows.push(Transaction {
                tran_date,
                store_type: field(record, store_idx).unwrap_or_default(),
                country: customer.and_then(|c| c.country.clone()),
                gender: customer.and_then(|c| c.gender.clone()),
                prod_cat,
                prod_subcat,
                total_amt,
                day_of_week: Transaction::weekday_index(tran_date),
            });
        }

        tracing::info!(
            "Loaded {} rows from {} ({} skipped)",
            table.records().len() - skipped,
            table.name(),
            skipped
        );
    }

    Ok(rows)
}

// ---------------------------------------------------------------------------
// Pre-merged table
// ---------------------------------------------------------------------------

/// Reads one CSV that already holds the merged columns
pub struct MergedTableProvider {
    path: PathBuf,
}

impl MergedTableProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataProvider for MergedTableProvider {
    fn load(&self) -> Result<SalesDataset, DataError> {
        tracing::info!("Loading merged sales table {}", self.path.display());
        let table = CsvTable::from_path(&self.path)?;
        Ok(SalesDataset::new(parse_merged(&table)?))
    }
}

pub fn parse_merged(table: &CsvTable) -> Result<Vec<Transaction>, DataError> {
    let date_idx = table.column("tran_date")?;
    let store_idx = table.column("Store_type")?;
    let country_idx = table.column("country")?;
    let gender_idx = table.column("Gender")?;
    let cat_idx = table.column("prod_cat")?;
    let sub_idx = table.column("prod_subcat")?;
    let amount_idx = table.column("total_amt")?;
    let weekday_idx = table.optional_column("day_of_week");

    let mut rows = Vec::with_capacity(table.records().len());
    for record in table.records() {
        let raw_date = record.get(date_idx).unwrap_or_default();
        let raw_amount = record.get(amount_idx).unwrap_or_default();
        let (Some(tran_date), Some(total_amt)) =
            (parse_source_date(raw_date), parse_amount(raw_amount))
        else {
            tracing::warn!(
                "Skipping {} row: date '{}', amount '{}'",
                table.name(),
                raw_date,
                raw_amount
            );
            continue;
        };

        let day_of_week = weekday_idx
            .and_then(|idx| field(record, idx))
            .and_then(|v| v.parse::<u8>().ok())
            .filter(|d| *d <= 6)
            .unwrap_or_else(|| Transaction::weekday_index(tran_date));

        rows.push(Transaction {
            tran_date,
            store_type: field(record, store_idx).unwrap_or_default(),
            country: field(record, country_idx),
            gender: field(record, gender_idx),
            prod_cat: field(record, cat_idx),
            prod_subcat: field(record, sub_idx),
            total_amt,
            day_of_week,
        });
    }

    Ok(rows)
}
