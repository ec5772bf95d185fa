pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use config::{toml_config::TomlConfig, InlineConfig};
pub use core::{
    calculator::{add, multiply, Calculator},
    message::{format_message, MESSAGE_LABEL},
    runner::JobRunner,
    sequence::{average, print_sequence, process_sequence, render_sequence},
};
pub use domain::model::{Job, JobOutput, OverflowPolicy, RunReport, RunSummary};
pub use utils::error::{CalcError, Result};
