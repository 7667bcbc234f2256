use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::import::{load_rate_parameters, BenchmarkImportError};
use super::{BenchmarkSnapshot, RateParameter};

/// Supplier of benchmark snapshots. Implementations must hand out a fresh view on
/// every call so edits made out-of-band are picked up by the next calculation.
pub trait BenchmarkSource: Send + Sync {
    fn snapshot(&self) -> Result<BenchmarkSnapshot, BenchmarkSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BenchmarkSourceError {
    #[error(transparent)]
    Import(#[from] BenchmarkImportError),
    #[error("benchmark store unavailable: {0}")]
    Unavailable(String),
}

/// Rows held in memory; an admin collaborator may replace them at any time.
#[derive(Debug, Default)]
pub struct InMemoryBenchmarkStore {
    rows: RwLock<Vec<RateParameter>>,
}

impl InMemoryBenchmarkStore {
    pub fn new(rows: Vec<RateParameter>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    pub fn replace(&self, rows: Vec<RateParameter>) -> Result<(), BenchmarkSourceError> {
        let mut guard = self
            .rows
            .write()
            .map_err(|_| BenchmarkSourceError::Unavailable("rate table lock poisoned".into()))?;
        *guard = rows;
        Ok(())
    }

    pub fn rows(&self) -> Result<Vec<RateParameter>, BenchmarkSourceError> {
        let guard = self
            .rows
            .read()
            .map_err(|_| BenchmarkSourceError::Unavailable("rate table lock poisoned".into()))?;
        Ok(guard.clone())
    }
}

impl BenchmarkSource for InMemoryBenchmarkStore {
    fn snapshot(&self) -> Result<BenchmarkSnapshot, BenchmarkSourceError> {
        Ok(BenchmarkSnapshot::from_rows(self.rows()?))
    }
}

/// CSV file re-read on every snapshot.
#[derive(Debug, Clone)]
pub struct CsvBenchmarkFile {
    path: PathBuf,
}

impl CsvBenchmarkFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BenchmarkSource for CsvBenchmarkFile {
    fn snapshot(&self) -> Result<BenchmarkSnapshot, BenchmarkSourceError> {
        let rows = load_rate_parameters(&self.path)?;
        Ok(BenchmarkSnapshot::from_rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::domain::{AustralianState, PropertyType};
    use crate::calculator::rates::{BenchmarkMetric, RateResolver};

    fn council_row(value: f64) -> RateParameter {
        RateParameter {
            metric: BenchmarkMetric::CouncilRatePercent,
            state: AustralianState::Sa,
            property_type: PropertyType::NewDwelling,
            classification: None,
            bedrooms: None,
            value,
            active: true,
        }
    }

    fn council_rate(snapshot: &BenchmarkSnapshot) -> f64 {
        RateResolver::new(snapshot).resolve(
            BenchmarkMetric::CouncilRatePercent,
            AustralianState::Sa,
            PropertyType::NewDwelling,
            None,
            None,
        )
    }

    #[test]
    fn in_memory_store_serves_replaced_rows_on_next_snapshot() {
        let store = InMemoryBenchmarkStore::new(vec![council_row(0.4)]);
        let before = store.snapshot().expect("snapshot");

        store.replace(vec![council_row(0.5)]).expect("replace");
        let after = store.snapshot().expect("snapshot");

        assert_eq!(council_rate(&before), 0.4);
        assert_eq!(council_rate(&after), 0.5);
    }

    #[test]
    fn missing_csv_file_is_a_source_error() {
        let source = CsvBenchmarkFile::new("/nonexistent/firb/benchmarks.csv");
        assert!(matches!(
            source.snapshot(),
            Err(BenchmarkSourceError::Import(BenchmarkImportError::Io(_)))
        ));
    }
}
