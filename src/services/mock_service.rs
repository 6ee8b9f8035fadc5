use chrono::{DateTime, Utc};

use crate::dto::search_dto::{SearchQuery, SearchResponse};
use crate::models::job::Job;
use crate::utils::time::to_rfc3339;

struct MockListing {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    default_location: &'static str,
    salary: &'static str,
    description: &'static str,
}

const LISTINGS: [MockListing; 3] = [
    MockListing {
        id: "1",
        title: "{term} Developer",
        company: "Tech Corp",
        default_location: "Remote",
        salary: "Not specified",
        description: "Great opportunity for a {term} developer...",
    },
    MockListing {
        id: "2",
        title: "Senior {term} Engineer",
        company: "Startup Inc",
        default_location: "San Francisco, CA",
        salary: "$120,000 - $150,000",
        description: "Looking for an experienced {term} engineer...",
    },
    MockListing {
        id: "3",
        title: "{term} Specialist",
        company: "Innovation Labs",
        default_location: "New York, NY",
        salary: "$100,000 - $130,000",
        description: "Join our team as a {term} specialist...",
    },
];

/// Static listings served when no real provider is available.
pub fn mock_jobs(query: &SearchQuery, now: DateTime<Utc>) -> SearchResponse {
    let posted = to_rfc3339(now);
    let term = query.search_term.as_str();

    let jobs: Vec<Job> = LISTINGS
        .iter()
        .map(|listing| Job {
            id: listing.id.to_string(),
            title: listing.title.replace("{term}", term),
            company: listing.company.to_string(),
            location: query.location_or(listing.default_location).to_string(),
            job_type: Some(query.job_type_or("Full-time").to_string()),
            date_posted: Some(posted.clone()),
            salary: listing.salary.to_string(),
            job_url: format!("https://example.com/job/{}", listing.id),
            description: listing.description.replace("{term}", term),
            site: "Indeed".to_string(),
            is_remote: query.is_remote,
        })
        .collect();

    SearchResponse {
        total: jobs.len(),
        jobs,
        search_term: query.search_term.clone(),
        location: query.location.clone(),
        timestamp: posted,
        message: None,
    }
}
