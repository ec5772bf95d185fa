use crate::core::calculator::Calculator;
use crate::core::message::format_message;
use crate::core::sequence::{average, process_sequence};
use crate::core::ConfigProvider;
use crate::domain::model::{Job, JobOutput, JobRecord, RunReport, RunSummary};
use crate::utils::error::Result;
use std::io::Write;

pub struct JobRunner<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> JobRunner<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Runs one job. `print` writes its line through [`process_sequence`];
    /// every other job writes `{output}\n` in one `write_all`.
    pub fn run_job<W: Write>(&self, job: &Job, out: &mut W) -> Result<JobOutput> {
        let output = match job {
            Job::Add { a, b } => {
                JobOutput::Integer(Calculator::add_with(*a, *b, self.config.overflow_policy())?)
            }
            Job::Multiply { x, y } => JobOutput::Real(Calculator::multiply(*x, *y)),
            Job::Format { message } => JobOutput::Text(format_message(message)),
            Job::Average { numbers } => JobOutput::Real(average(numbers)),
            Job::Print { numbers } => {
                process_sequence(numbers, out)?;
                return Ok(JobOutput::Printed);
            }
        };

        out.write_all(format!("{}\n", output).as_bytes())?;
        out.flush()?;
        Ok(output)
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let (report, result) = self.run_with_report(out);
        result.map(|_| report.summary)
    }

    /// 依序執行所有工作；`continue_on_error` 為 false 時遇錯即停
    ///
    /// The report is returned even when the run stops, holding every job
    /// attempted so far (the failing one included).
    pub fn run_with_report<W: Write>(&self, out: &mut W) -> (RunReport, Result<()>) {
        let jobs = self.config.jobs();
        tracing::info!(
            "Running {} job(s) with {:?} overflow",
            jobs.len(),
            self.config.overflow_policy()
        );

        let mut report = RunReport {
            jobs: Vec::with_capacity(jobs.len()),
            ..Default::default()
        };

        for (index, job) in jobs.iter().enumerate() {
            tracing::debug!("Job #{}: {:?}", index, job);

            match self.run_job(job, out) {
                Ok(output) => {
                    report.summary.succeeded += 1;
                    report.jobs.push(JobRecord {
                        index,
                        op: job.name(),
                        output: Some(output),
                        error: None,
                    });
                }
                Err(e) => {
                    report.summary.failed += 1;
                    report.jobs.push(JobRecord {
                        index,
                        op: job.name(),
                        output: None,
                        error: Some(e.to_string()),
                    });

                    if !self.config.continue_on_error() {
                        tracing::error!("Job #{} ({}) failed, stopping: {}", index, job.name(), e);
                        report.stopped_early = true;
                        return (report, Err(e));
                    }
                    tracing::warn!("Job #{} ({}) failed: {}", index, job.name(), e);
                }
            }
        }

        tracing::info!(
            "Finished: {} succeeded, {} failed",
            report.summary.succeeded,
            report.summary.failed
        );

        (report, Ok(()))
    }
}
