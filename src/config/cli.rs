use crate::domain::model::UnknownMajorPolicy;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "registrar-etl")]
#[command(about = "Joins university record files and reports remaining coursework")]
pub struct CliConfig {
    /// Directory containing students.txt, instructors.txt, grades.txt and majors.txt
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    /// Treat the first line of every file as a header and discard it
    #[arg(long)]
    pub header: bool,

    /// Warn and skip students whose major is not on file instead of aborting
    #[arg(long)]
    pub skip_unknown_major: bool,

    /// Directory to also write the three summary tables as TSV files
    #[arg(long)]
    pub output_path: Option<String>,

    /// TOML configuration file; when given, its values drive the run
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn has_header(&self) -> bool {
        self.header
    }

    fn unknown_major_policy(&self) -> UnknownMajorPolicy {
        if self.skip_unknown_major {
            UnknownMajorPolicy::Skip
        } else {
            UnknownMajorPolicy::Abort
        }
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data_dir", &self.data_dir)?;
        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        Ok(())
    }
}
