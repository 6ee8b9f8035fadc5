use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::dto::search_dto::{SearchQuery, SearchResponse};
use crate::error::Result;
use crate::services::mock_service::mock_jobs;
use crate::services::script_service::ScriptJobSource;
use crate::utils::time::now;

/// Answers search requests from the configured script, or mock listings
/// when there is no script or it fails.
#[derive(Clone, Default)]
pub struct JobSearchService {
    script: Option<ScriptJobSource>,
}

impl JobSearchService {
    pub fn new(script: Option<ScriptJobSource>) -> Self {
        Self { script }
    }

    pub fn from_config(config: &Config) -> Self {
        let script = config
            .search_script_path
            .as_ref()
            .map(|path| ScriptJobSource::new(config.python_bin.clone(), path.clone()));

        match &script {
            Some(source) => info!(
                script = %source.script_path().display(),
                "Job search script configured"
            ),
            None => info!("No job search script configured, serving mock listings"),
        }

        Self::new(script)
    }

    #[instrument(skip(self, query), fields(search_term = %query.search_term, location = %query.location))]
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        if let Some(script) = self.script.as_ref().filter(|s| s.is_available()) {
            match script.search(query).await {
                Ok(response) => {
                    info!(jobs = response.jobs.len(), "Served results from search script");
                    return Ok(response);
                }
                Err(err) => warn!(error = %err, "Search script failed, using mock data"),
            }
        }

        let response = mock_jobs(query, now());
        info!(jobs = response.jobs.len(), "Served mock results");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn without_script_serves_mock_listings() {
        let service = JobSearchService::default();
        let response = tokio_test::assert_ok!(service.search(&SearchQuery::new("Rust")).await);
        assert_eq!(response.total, 3);
        assert_eq!(response.jobs[0].title, "Rust Developer");
    }

    #[tokio::test]
    async fn missing_script_falls_back_to_mock() {
        let config = Config {
            search_script_path: Some("/nonexistent/search_jobs.py".into()),
            ..Config::default()
        };
        let service = JobSearchService::from_config(&config);

        let response = service.search(&SearchQuery::new("Go")).await.unwrap();
        assert_eq!(response.jobs.len(), 3);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_script_falls_back_to_mock() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("broken.sh");
        std::fs::write(&script, "exit 1\n").unwrap();
        let service = JobSearchService::new(Some(
            ScriptJobSource::new("sh", &script).with_work_dir(dir.path()),
        ));

        let response = service.search(&SearchQuery::new("Go")).await.unwrap();
        assert_eq!(response.jobs[2].title, "Go Specialist");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn working_script_wins_over_mock() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("search.sh");
        std::fs::write(
            &script,
            r#"echo '{"jobs":[],"total":0,"message":"No jobs found"}'"#,
        )
        .unwrap();
        let service = JobSearchService::new(Some(
            ScriptJobSource::new("sh", &script).with_work_dir(dir.path()),
        ));

        let response = service.search(&SearchQuery::new("Go")).await.unwrap();
        assert!(response.jobs.is_empty());
        assert_eq!(response.message.as_deref(), Some("No jobs found"));
    }
}
