use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::flexible::{
    deserialize_bool_flexible, deserialize_string_flexible, deserialize_string_or_empty,
};

/// One posting as returned by the search endpoint.
///
/// Everything except `id` and `is_remote` is display text and is passed
/// through untouched; providers that omit a field or send `null` get an
/// empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Job {
    #[serde(deserialize_with = "deserialize_string_flexible")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    pub company: String,
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    pub location: String,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub date_posted: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    pub salary: String,
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    pub job_url: String,
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    pub site: String,
    #[serde(default, deserialize_with = "deserialize_bool_flexible")]
    pub is_remote: bool,
}

impl Job {
    /// The job type when the provider actually supplied one.
    pub fn known_job_type(&self) -> Option<&str> {
        self.job_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty() && *t != "N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_provider_rows_deserialize() {
        let job: Job = serde_json::from_value(json!({
            "id": 7,
            "title": "Data Engineer",
            "job_type": "N/A",
            "is_remote": "true"
        }))
        .unwrap();

        assert_eq!(job.id, "7");
        assert_eq!(job.company, "");
        assert!(job.is_remote);
        assert_eq!(job.date_posted, None);
        assert_eq!(job.known_job_type(), None);
    }

    #[test]
    fn known_job_type_skips_blank_values() {
        let mut job: Job = serde_json::from_value(json!({ "id": "a" })).unwrap();
        assert_eq!(job.known_job_type(), None);

        job.job_type = Some("  ".into());
        assert_eq!(job.known_job_type(), None);

        job.job_type = Some("Full-time".into());
        assert_eq!(job.known_job_type(), Some("Full-time"));
    }

    #[test]
    fn null_display_fields_become_empty() {
        let job: Job = serde_json::from_value(json!({
            "id": "a",
            "title": "Rust Dev",
            "company": null,
            "location": null,
            "job_type": null,
            "date_posted": null,
            "salary": null,
            "job_url": null,
            "description": null,
            "site": null,
            "is_remote": null
        }))
        .unwrap();

        assert_eq!(job.title, "Rust Dev");
        assert_eq!(job.company, "");
        assert_eq!(job.location, "");
        assert_eq!(job.salary, "");
        assert_eq!(job.site, "");
        assert_eq!(job.job_type, None);
        assert!(!job.is_remote);
    }
}
