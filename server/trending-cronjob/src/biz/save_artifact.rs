use std::path::{Path, PathBuf};

use time::OffsetDateTime;

use crate::error::Result;
use crate::model::{Artifact, RepoRecord};

pub fn build_artifact(
    records: Vec<RepoRecord>,
    run_id: &str,
    generated_at: OffsetDateTime,
) -> Artifact {
    Artifact {
        generated_at,
        run_id: run_id.to_string(),
        items: records,
    }
}

/// Pretty json, two space indent.
pub fn encode(artifact: &Artifact) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(artifact)?)
}

/// Replaces the file at `path` with one full write. There is no
/// temp file + rename, a kill during the write can leave it truncated.
pub async fn persist(artifact: &Artifact, path: &Path) -> Result<PathBuf> {
    let data = encode(artifact)?;
    tokio::fs::write(path, data).await?;
    log::info!("artifact saved: {}", path.display());
    Ok(path.to_path_buf())
}
