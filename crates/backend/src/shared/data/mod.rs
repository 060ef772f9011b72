pub mod dataset;
pub mod error;
pub mod provider;

pub use dataset::SalesDataset;
pub use error::DataError;
pub use provider::{provider_from_config, DataProvider, MergedTableProvider, RawTablesProvider};
