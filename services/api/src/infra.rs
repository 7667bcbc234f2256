use firb_calculator::calculator::{
    BenchmarkSnapshot, BenchmarkSource, BenchmarkSourceError, CsvBenchmarkFile,
    InMemoryBenchmarkStore,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Benchmark source chosen at startup: a CSV file when one is configured,
/// otherwise an empty in-memory table so every metric uses its default.
#[derive(Debug)]
pub(crate) enum ConfiguredBenchmarks {
    File(CsvBenchmarkFile),
    Memory(InMemoryBenchmarkStore),
}

impl ConfiguredBenchmarks {
    pub(crate) fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(CsvBenchmarkFile::new(path)),
            None => Self::Memory(InMemoryBenchmarkStore::default()),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::File(file) => file.path().display().to_string(),
            Self::Memory(_) => "built-in defaults".to_string(),
        }
    }
}

impl BenchmarkSource for ConfiguredBenchmarks {
    fn snapshot(&self) -> Result<BenchmarkSnapshot, BenchmarkSourceError> {
        match self {
            Self::File(file) => file.snapshot(),
            Self::Memory(store) => store.snapshot(),
        }
    }
}
