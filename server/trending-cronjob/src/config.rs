use std::path::PathBuf;

pub const RUN_ID_ENV: &str = "GITHUB_RUN_NUMBER";
pub const DEFAULT_RUN_ID: &str = "local";
pub const ARTIFACT_FILE_NAME: &str = "trending.json";
pub const DEFAULT_PER_PAGE: u32 = 10;

#[derive(Debug, Clone)]
pub struct JobConfig {
    pub run_id: String,
    pub output_path: PathBuf,
    pub per_page: u32,
}

impl JobConfig {
    pub fn new(run_id: impl Into<String>) -> Self {
        JobConfig {
            run_id: run_id.into(),
            output_path: default_output_path(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// The only place the job looks at the environment.
    pub fn from_env() -> Self {
        Self::new(resolve_run_id(std::env::var(RUN_ID_ENV).ok()))
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}

// unset and empty both fall back
fn resolve_run_id(value: Option<String>) -> String {
    value
        .filter(|run_id| !run_id.is_empty())
        .unwrap_or_else(|| DEFAULT_RUN_ID.to_string())
}

pub fn default_output_path() -> PathBuf {
    std::env::temp_dir().join(ARTIFACT_FILE_NAME)
}
