use std::fmt::Display;
use std::path::PathBuf;

use time::OffsetDateTime;

use crate::biz::{fetch_trending, save_artifact};
use crate::config::JobConfig;
use crate::error::{JobError, JobFailure};
use crate::model::RepoRecord;

#[derive(Debug, Clone)]
pub struct JobReport {
    pub output_path: PathBuf,
    pub count: usize,
    pub top: Option<RepoRecord>,
}

pub async fn run(config: &JobConfig) -> Result<JobReport, JobFailure> {
    run_with_host(None, config).await
}

pub(crate) async fn run_with_host(
    host: Option<&str>,
    config: &JobConfig,
) -> Result<JobReport, JobFailure> {
    let mut stage = JobStage::Start;
    log::info!("ephemeral job starting, run_id={}", config.run_id);

    match execute(host, config, &mut stage).await {
        Ok(report) => {
            log::info!("job completed successfully, {} repositories", report.count);
            match &report.top {
                Some(top) => log::info!(
                    "top repo: {} ({} stars)",
                    top.name,
                    format_thousands(top.stars)
                ),
                None => log::info!("no repositories returned"),
            }
            Ok(report)
        }
        Err(error) => {
            log::error!("job failed while {stage}: {error}");
            Err(JobFailure { stage, error })
        }
    }
}

async fn execute(
    host: Option<&str>,
    config: &JobConfig,
    stage: &mut JobStage,
) -> Result<JobReport, JobError> {
    advance(stage, JobStage::Fetching);
    let records = fetch_trending::fetch_top(host, config.per_page).await?;

    advance(stage, JobStage::Writing);
    let artifact =
        save_artifact::build_artifact(records, &config.run_id, OffsetDateTime::now_utc());
    let output_path = save_artifact::persist(&artifact, &config.output_path).await?;

    advance(stage, JobStage::Done);
    Ok(JobReport {
        output_path,
        count: artifact.items.len(),
        top: summarize(&artifact.items).cloned(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStage {
    Start,
    Fetching,
    Writing,
    Done,
}

impl Display for JobStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JobStage::Start => "start",
            JobStage::Fetching => "fetching",
            JobStage::Writing => "writing",
            JobStage::Done => "done",
        };
        f.write_str(name)
    }
}

fn advance(stage: &mut JobStage, next: JobStage) {
    log::debug!("job stage {stage} -> {next}");
    *stage = next;
}

/// Highest starred record, which is the first one since upstream sorts.
pub fn summarize(records: &[RepoRecord]) -> Option<&RepoRecord> {
    records.first()
}

pub fn exit_code(result: &Result<JobReport, JobFailure>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

// 1234567 -> 1,234,567
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
