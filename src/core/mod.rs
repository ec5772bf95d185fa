pub mod calculator;
pub mod message;
pub mod runner;
pub mod sequence;

pub use crate::domain::model::{Job, JobOutput, OverflowPolicy, RunSummary};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
