pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};

#[cfg(feature = "cli")]
use crate::utils::validation::validate_required_field;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "zoo-report")]
#[command(about = "Tally an animal roster by species and write a grouped report")]
pub struct CliConfig {
    /// Roster file, one `species,name,age` record per line
    pub input: Option<String>,

    /// Where the grouped report is written
    pub output: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Write rejected lines to this CSV file")]
    pub rejects: Option<String>,

    #[arg(long, help = "Write a JSON run summary to this file")]
    pub summary: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the optional TOML file under the command-line values.
    pub fn into_run_config(self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        RunConfig::merge(self, file)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: String,
    pub output_path: String,
    pub rejects_path: Option<String>,
    pub summary_path: Option<String>,
    pub verbose: bool,
}

impl RunConfig {
    #[cfg(feature = "cli")]
    pub fn merge(cli: CliConfig, file: TomlConfig) -> Result<Self> {
        file.validate()?;

        let input = cli.input.or(file.input.path);
        let output = cli.output.or(file.output.report_path);

        Ok(Self {
            input_path: validate_required_field("input", &input)?.clone(),
            output_path: validate_required_field("output", &output)?.clone(),
            rejects_path: cli.rejects.or(file.output.rejects_path),
            summary_path: cli.summary.or(file.output.summary_path),
            verbose: cli.verbose || file.logging.verbose,
        })
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        validate_path("output", &self.output_path)?;
        validate_distinct_paths("output", &self.input_path, &self.output_path)?;

        for (field, path) in [("rejects", &self.rejects_path), ("summary", &self.summary_path)] {
            if let Some(path) = path {
                validate_path(field, path)?;
                validate_distinct_paths(field, &self.input_path, path)?;
                validate_distinct_paths(field, &self.output_path, path)?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn rejects_path(&self) -> Option<&str> {
        self.rejects_path.as_deref()
    }

    fn summary_path(&self) -> Option<&str> {
        self.summary_path.as_deref()
    }
}
