use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::dto::search_dto::{SearchQuery, SearchResponse};
use crate::error::{Error, Result};

/// Runs an external job-search script: `<python> <script> <input.json>`.
///
/// The script reads the query from the input file and prints a
/// `SearchResponse` document on stdout.
#[derive(Debug, Clone)]
pub struct ScriptJobSource {
    python_bin: String,
    script_path: PathBuf,
    work_dir: PathBuf,
}

impl ScriptJobSource {
    pub fn new(python_bin: impl Into<String>, script_path: impl Into<PathBuf>) -> Self {
        Self {
            python_bin: python_bin.into(),
            script_path: script_path.into(),
            work_dir: std::env::temp_dir(),
        }
    }

    /// Directory the per-request input files are written to.
    pub fn with_work_dir(mut self, work_dir: impl Into<PathBuf>) -> Self {
        self.work_dir = work_dir.into();
        self
    }

    pub fn script_path(&self) -> &Path {
        &self.script_path
    }

    pub fn is_available(&self) -> bool {
        self.script_path.is_file()
    }

    fn input_file_path(&self) -> PathBuf {
        self.work_dir
            .join(format!("job_search_input_{}.json", Uuid::new_v4()))
    }

    #[instrument(skip(self, query), fields(search_term = %query.search_term))]
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        if !self.is_available() {
            return Err(Error::Config(format!(
                "Search script not found at {}",
                self.script_path.display()
            )));
        }

        let input_file = self.input_file_path();
        tokio::fs::write(&input_file, serde_json::to_vec(query)?).await?;

        info!(script = %self.script_path.display(), "Launching job search script");

        let mut command = Command::new(&self.python_bin);
        command.arg(&self.script_path).arg(&input_file);
        if let Some(parent) = self.script_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            command.current_dir(parent);
        }

        let output = command.output().await;

        if let Err(err) = tokio::fs::remove_file(&input_file).await {
            warn!(error = %err, file = %input_file.display(), "Failed to remove script input file");
        }

        let output = output.map_err(|err| {
            error!(error = ?err, "Failed to spawn job search script");
            Error::Script(format!("Failed to spawn job search script: {err}"))
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            warn!(?stderr, "Job search script failed");
            return Err(Error::Script(format!(
                "Job search script exited with status {:?}",
                output.status.code()
            )));
        }

        let response: SearchResponse = serde_json::from_str(stdout.trim()).map_err(|err| {
            warn!(error = %err, stdout = %stdout, "Job search script printed invalid JSON");
            Error::Script(format!("Failed to parse script output: {err}"))
        })?;

        debug!(jobs = response.jobs.len(), "Job search script completed");
        Ok(response)
    }
}
