use crate::chart::ChartConfig;
use crate::datasets::{prepare, Datasets};
use crate::models::SalesRecord;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub chart: Arc<ChartConfig>,
    datasets: Arc<RwLock<Arc<Datasets>>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, chart: ChartConfig, records: &[SalesRecord]) -> Self {
        Self {
            data_path,
            chart: Arc::new(chart),
            datasets: Arc::new(RwLock::new(Arc::new(prepare(records)))),
        }
    }

    /// The prepared datasets at this moment; a reload does not affect a
    /// snapshot already taken.
    pub async fn snapshot(&self) -> Arc<Datasets> {
        Arc::clone(&*self.datasets.read().await)
    }

    pub async fn replace(&self, records: &[SalesRecord]) -> usize {
        let prepared = Arc::new(prepare(records));
        let count = prepared.record_count;
        *self.datasets.write().await = prepared;
        count
    }
}
