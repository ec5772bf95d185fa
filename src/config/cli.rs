use crate::domain::model::{Job, OverflowPolicy};
use crate::utils::logger::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-calc")]
#[command(about = "Add, multiply, format messages and print number sequences")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Integer overflow policy for `add` (overrides the job file setting)
    #[arg(long, global = true, value_enum)]
    pub overflow: Option<OverflowPolicy>,

    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add two integers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Multiply two real numbers
    Multiply {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Prefix a message with "Message: "
    Format { message: String },
    /// Print integers separated by spaces
    Print {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i32>,
    },
    /// Print the average of the given integers
    Average {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i32>,
    },
    /// Run the jobs listed in a TOML file
    Run {
        /// Path to TOML job file
        #[arg(short, long, default_value = "jobs.toml")]
        config: PathBuf,

        /// Write a JSON run report to this path. It is written even when a
        /// failing job stops the run (`stopped_early` is then true); NaN and
        /// infinite results appear as the strings "NaN", "inf" and "-inf"
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

impl Command {
    /// 單一運算子命令轉成工作；`run` 回傳 None
    pub fn as_job(&self) -> Option<Job> {
        match self {
            Command::Add { a, b } => Some(Job::Add { a: *a, b: *b }),
            Command::Multiply { x, y } => Some(Job::Multiply { x: *x, y: *y }),
            Command::Format { message } => Some(Job::Format {
                message: message.clone(),
            }),
            Command::Print { numbers } => Some(Job::Print {
                numbers: numbers.clone(),
            }),
            Command::Average { numbers } => Some(Job::Average {
                numbers: numbers.clone(),
            }),
            Command::Run { .. } => None,
        }
    }
}
