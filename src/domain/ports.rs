use crate::domain::model::{RunSummary, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn rejects_path(&self) -> Option<&str>;
    fn summary_path(&self) -> Option<&str>;
}

/// Extract raw lines, classify and tally them, then write the report.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, lines: Vec<String>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<RunSummary>;
}
