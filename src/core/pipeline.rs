use crate::core::{ConfigProvider, Pipeline, RunSummary, Storage, TransformResult};
use crate::domain::model::RejectedLine;
use crate::domain::parser::parse_line;
use crate::domain::report::{render_report, to_text};
use crate::utils::error::{Result, ZooError};
use serde::Serialize;

pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// Parses every line and folds the accepted records into a fresh tally.
pub fn classify_lines<I, L>(lines: I) -> TransformResult
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut result = TransformResult::default();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        result.lines_read += 1;

        match parse_line(line) {
            Ok(record) => result.tally.record(record),
            Err(reason) => {
                tracing::warn!("Skipping invalid entry on line {}: {}", index + 1, reason);
                result.rejected.push(RejectedLine {
                    line_number: index + 1,
                    raw: line.to_string(),
                    reason,
                });
            }
        }
    }

    result
}

/// Splits on `\n`, `\r\n` or a lone `\r`; a final terminator adds no empty line.
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(end) => {
                lines.push(rest[..end].to_string());
                let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + skip..];
            }
            None => {
                lines.push(rest.to_string());
                rest = "";
            }
        }
    }

    lines
}

#[derive(Serialize)]
struct RejectRow<'a> {
    line: usize,
    reason: &'static str,
    detail: String,
    raw: &'a str,
}

fn rejects_to_csv(rejected: &[RejectedLine]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for line in rejected {
        writer.serialize(RejectRow {
            line: line.line_number,
            reason: line.reason.kind(),
            detail: line.reason.to_string(),
            raw: &line.raw,
        })?;
    }
    // serialize() only emits the header alongside the first row
    if rejected.is_empty() {
        writer.write_record(["line", "reason", "detail", "raw"])?;
    }
    writer
        .into_inner()
        .map_err(|e| ZooError::IoError(e.into_error()))
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        let path = self.config.input_path();

        if !self.storage.exists(path).await {
            return Err(ZooError::InputNotFound {
                path: path.to_string(),
            });
        }

        tracing::debug!("Reading input from: {}", path);
        let data = self.storage.read_file(path).await?;
        let content = String::from_utf8_lossy(&data);
        if let std::borrow::Cow::Owned(_) = content {
            tracing::warn!("Input {} is not valid UTF-8; invalid bytes were replaced", path);
        }

        Ok(split_lines(&content))
    }

    async fn transform(&self, lines: Vec<String>) -> Result<TransformResult> {
        Ok(classify_lines(lines))
    }

    async fn load(&self, result: TransformResult) -> Result<RunSummary> {
        let output = self.config.output_path();
        let report = to_text(&render_report(&result.tally));

        tracing::debug!("Writing report ({} bytes) to {}", report.len(), output);
        self.storage.write_file(output, report.as_bytes()).await?;

        if let Some(path) = self.config.rejects_path() {
            tracing::debug!("Writing {} rejected lines to {}", result.rejected.len(), path);
            let data = rejects_to_csv(&result.rejected)?;
            self.storage.write_file(path, &data).await?;
        }

        let summary = RunSummary {
            input: self.config.input_path().to_string(),
            output: output.to_string(),
            lines_read: result.lines_read,
            accepted: result.tally.total(),
            rejected: result.rejected.len(),
            species: result.tally.counts(),
            generated_at: chrono::Utc::now(),
        };

        if let Some(path) = self.config.summary_path() {
            tracing::debug!("Writing run summary to {}", path);
            let json = serde_json::to_vec_pretty(&summary)?;
            self.storage.write_file(path, &json).await?;
        }

        Ok(summary)
    }
}
