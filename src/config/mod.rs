#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{Job, OverflowPolicy};

/// In-memory job list, used for single-operation CLI calls and in tests.
#[derive(Debug, Clone, Default)]
pub struct InlineConfig {
    pub jobs: Vec<Job>,
    pub overflow: OverflowPolicy,
    pub continue_on_error: bool,
}

impl InlineConfig {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs,
            ..Default::default()
        }
    }

    pub fn single(job: Job) -> Self {
        Self::new(vec![job])
    }

    pub fn with_overflow(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }

    pub fn with_continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }
}

impl ConfigProvider for InlineConfig {
    fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }

    fn continue_on_error(&self) -> bool {
        self.continue_on_error
    }

    fn jobs(&self) -> &[Job] {
        &self.jobs
    }
}
