use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::job::Job;
use crate::utils::flexible::{deserialize_bool_flexible, serialize_bool_as_string};

pub const DEFAULT_RESULTS_WANTED: u32 = 50;
pub const DEFAULT_HOURS_OLD: u32 = 72;

fn default_results_wanted() -> u32 {
    DEFAULT_RESULTS_WANTED
}

fn default_hours_old() -> u32 {
    DEFAULT_HOURS_OLD
}

/// Body of `POST /api/search_jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct SearchQuery {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(
        default,
        serialize_with = "serialize_bool_as_string",
        deserialize_with = "deserialize_bool_flexible"
    )]
    #[schema(value_type = String, example = "false")]
    pub is_remote: bool,
    #[serde(default = "default_results_wanted")]
    pub results_wanted: u32,
    #[serde(default = "default_hours_old")]
    pub hours_old: u32,
}

impl SearchQuery {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            location: String::new(),
            job_type: String::new(),
            is_remote: false,
            results_wanted: DEFAULT_RESULTS_WANTED,
            hours_old: DEFAULT_HOURS_OLD,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Trims the free-text fields the way the search form does before submitting.
    pub fn normalized(mut self) -> Self {
        self.search_term = self.search_term.trim().to_string();
        self.location = self.location.trim().to_string();
        self.job_type = self.job_type.trim().to_string();
        self
    }

    pub fn location_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.location.is_empty() {
            fallback
        } else {
            &self.location
        }
    }

    pub fn job_type_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.job_type.is_empty() {
            fallback
        } else {
            &self.job_type
        }
    }
}

/// Successful answer of the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error body; `message` is only present on server errors.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn form_payload_deserializes_with_defaults() {
        let query: SearchQuery = serde_json::from_value(json!({
            "search_term": "Engineer",
            "is_remote": "true"
        }))
        .unwrap();

        assert_eq!(query.search_term, "Engineer");
        assert!(query.is_remote);
        assert_eq!(query.results_wanted, DEFAULT_RESULTS_WANTED);
        assert_eq!(query.hours_old, DEFAULT_HOURS_OLD);
    }

    #[test]
    fn is_remote_goes_out_as_a_string() {
        let mut query = SearchQuery::new("Rust");
        query.is_remote = true;
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["is_remote"], "true");
        assert_eq!(value["results_wanted"], 50);
    }

    #[test]
    fn empty_term_fails_validation() {
        assert!(SearchQuery::new("").validate().is_err());
        assert!(SearchQuery::new("   ").normalized().validate().is_err());
        assert!(SearchQuery::new(" Rust ").normalized().validate().is_ok());
    }

    #[test]
    fn fallbacks_apply_only_to_empty_fields() {
        let query = SearchQuery::new("Rust").with_location("Berlin");
        assert_eq!(query.location_or("Remote"), "Berlin");
        assert_eq!(query.job_type_or("Full-time"), "Full-time");
    }

    #[test]
    fn response_without_jobs_is_empty() {
        let response: SearchResponse =
            serde_json::from_value(json!({ "total": 0, "message": "No jobs found" })).unwrap();
        assert!(response.jobs.is_empty());
        assert_eq!(response.message.as_deref(), Some("No jobs found"));
    }

    #[test]
    fn rows_with_null_fields_are_kept() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"jobs":[{"id":"a","title":"Rust Dev","company":null,"location":null,"salary":null}],"total":1}"#,
        )
        .unwrap();
        assert_eq!(response.jobs.len(), 1);
        assert_eq!(response.jobs[0].title, "Rust Dev");
        assert_eq!(response.jobs[0].company, "");
    }
}
