use std::path::PathBuf;
use thiserror::Error;

/// Ошибки загрузки исходных таблиц. Любая из них останавливает запуск сервера.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {table}: {source}")]
    Csv {
        table: String,
        #[source]
        source: csv::Error,
    },

    #[error("table {table} has no column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("no transaction files found in {0}")]
    NoTransactions(PathBuf),
}
