pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, RunConfig};

pub use crate::core::{engine::ReportEngine, pipeline::ReportPipeline};
pub use domain::model::{AnimalRecord, RunSummary, Species};
pub use domain::parser::{parse_line, RejectionReason};
pub use domain::report::render_report;
pub use domain::tally::SpeciesTally;
pub use utils::error::{Result, ZooError};
