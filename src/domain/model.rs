use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// How `add` treats a sum that does not fit in `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OverflowPolicy {
    /// Two's-complement wraparound, e.g. `i32::MAX + 1 == i32::MIN`.
    #[default]
    Wrapping,
    Checked,
    Saturating,
}

/// One operation to run, as written in a job file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Job {
    Add { a: i32, b: i32 },
    Multiply { x: f64, y: f64 },
    Format { message: String },
    Print { numbers: Vec<i32> },
    Average { numbers: Vec<i32> },
}

impl Job {
    pub fn name(&self) -> &'static str {
        match self {
            Job::Add { .. } => "add",
            Job::Multiply { .. } => "multiply",
            Job::Format { .. } => "format",
            Job::Print { .. } => "print",
            Job::Average { .. } => "average",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum JobOutput {
    Integer(i32),
    /// NaN and infinities are reported as the strings `"NaN"`, `"inf"`, `"-inf"`.
    Real(#[serde(serialize_with = "serialize_real")] f64),
    Text(String),
    /// The sequence line was already written to the sink.
    Printed,
}

fn serialize_real<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&value.to_string())
    }
}

impl fmt::Display for JobOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobOutput::Integer(v) => write!(f, "{}", v),
            JobOutput::Real(v) => write!(f, "{}", v),
            JobOutput::Text(v) => f.write_str(v),
            JobOutput::Printed => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// 單一工作的執行紀錄，用於 JSON 報告
#[derive(Debug, Clone, Serialize)]
pub struct JobRecord {
    pub index: usize,
    pub op: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<JobOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub summary: RunSummary,
    pub jobs: Vec<JobRecord>,
    /// Set when a failing job stopped the run; later jobs have no record.
    pub stopped_early: bool,
}
