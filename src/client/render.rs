use std::fmt;

use chrono::{DateTime, Utc};

use crate::client::pagination::Page;
use crate::models::job::Job;
use crate::utils::time::parse_timestamp;

pub const TABLE_COLUMNS: usize = 7;
pub const EMPTY_TABLE_MESSAGE: &str = "No jobs found. Try adjusting your search criteria.";
pub const NOT_SPECIFIED: &str = "Not specified";

/// Replaces the characters that could open markup or break out of an attribute.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Text that has been through [`escape_html`] and can be spliced into markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Escaped(String);

impl Escaped {
    pub fn new(raw: &str) -> Self {
        Self(escape_html(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// "Today", "Yesterday", "3 days ago", "2 weeks ago", or the date itself
/// once it is a month or more away. Anything unparseable is "Recently".
pub fn format_relative_date(date_posted: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(posted) = date_posted.and_then(parse_timestamp) else {
        return "Recently".to_string();
    };

    match now.signed_duration_since(posted).num_days().abs() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        days @ 2..=6 => format!("{} days ago", days),
        days @ 7..=29 => format!("{} weeks ago", days / 7),
        _ => posted.format("%-m/%-d/%Y").to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobTypeBadge {
    Known { label: Escaped, css_class: Escaped },
    NotSpecified,
}

impl JobTypeBadge {
    pub fn for_job(job: &Job) -> Self {
        match job.known_job_type() {
            Some(job_type) => JobTypeBadge::Known {
                label: Escaped::new(job_type),
                css_class: Escaped::new(&job_type.to_lowercase().replacen('-', "", 1)),
            },
            None => JobTypeBadge::NotSpecified,
        }
    }
}

/// One table row, ready for a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRow {
    /// Raw id, handed back to the controller by the "Applied" action.
    pub id: String,
    pub title: Escaped,
    pub job_url: Escaped,
    pub company: Escaped,
    pub location: Escaped,
    pub is_remote: bool,
    pub job_type: JobTypeBadge,
    pub posted: String,
    pub site: Escaped,
}

impl JobRow {
    pub fn new(job: &Job, now: DateTime<Utc>) -> Self {
        Self {
            id: job.id.clone(),
            title: Escaped::new(&job.title),
            job_url: Escaped::new(&job.job_url),
            company: Escaped::new(&job.company),
            location: Escaped::new(&job.location),
            is_remote: job.is_remote,
            job_type: JobTypeBadge::for_job(job),
            posted: format_relative_date(job.date_posted.as_deref(), now),
            site: Escaped::new(&job.site),
        }
    }
}

/// Everything the results panel displays for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<JobRow>,
    pub page_number: usize,
    pub total_pages: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub total_items: usize,
    pub applied_count: usize,
}

impl TableView {
    pub fn build(page: &Page<'_>, applied_count: usize, now: DateTime<Utc>) -> Self {
        Self {
            rows: page.items.iter().map(|job| JobRow::new(job, now)).collect(),
            page_number: page.number,
            total_pages: page.total_pages,
            previous_enabled: page.has_previous(),
            next_enabled: page.has_next(),
            total_items: page.total_items,
            applied_count,
        }
    }

    /// Whether the table shows the single "no jobs" placeholder row.
    pub fn is_placeholder(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page_number, self.total_pages)
    }

    pub fn results_count(&self) -> String {
        let plural = if self.total_items == 1 { "" } else { "s" };
        let mut text = format!("{} job{} found", self.total_items, plural);
        if self.applied_count > 0 {
            text.push_str(&format!(" ({} hidden as applied)", self.applied_count));
        }
        text
    }

    pub fn row_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.id.as_str()).collect()
    }
}

/// Markup for the results `<tbody>`.
pub fn render_table_body(view: &TableView) -> String {
    if view.is_placeholder() {
        return format!(
            "<tr>\n    <td colspan=\"{}\" class=\"empty-row\">{}</td>\n</tr>\n",
            TABLE_COLUMNS, EMPTY_TABLE_MESSAGE
        );
    }

    let mut html = String::new();
    for row in &view.rows {
        render_row(&mut html, row);
    }
    html
}

fn render_row(html: &mut String, row: &JobRow) {
    let remote = if row.is_remote {
        "<span class=\"remote-badge\">REMOTE</span>"
    } else {
        ""
    };
    let job_type = match &row.job_type {
        JobTypeBadge::Known { label, css_class } => {
            format!("<span class=\"job-type {}\">{}</span>", css_class, label)
        }
        JobTypeBadge::NotSpecified => {
            format!("<span class=\"job-type-missing\">{}</span>", NOT_SPECIFIED)
        }
    };

    html.push_str(&format!(
        concat!(
            "<tr>\n",
            "    <td><a href=\"{url}\" target=\"_blank\" rel=\"noopener\" class=\"job-title\">{title}</a></td>\n",
            "    <td class=\"job-company\">{company}</td>\n",
            "    <td class=\"job-location\">{location}{remote}</td>\n",
            "    <td>{job_type}</td>\n",
            "    <td class=\"job-posted\">{posted}</td>\n",
            "    <td><span class=\"job-site\">{site}</span></td>\n",
            "    <td>\n",
            "        <div class=\"actions-cell\">\n",
            "            <a href=\"{url}\" target=\"_blank\" rel=\"noopener\" class=\"btn-view\">View Job</a>\n",
            "            <button class=\"btn-applied\" data-job-id=\"{id}\">Applied</button>\n",
            "        </div>\n",
            "    </td>\n",
            "</tr>\n",
        ),
        url = row.job_url,
        title = row.title,
        company = row.company,
        location = row.location,
        remote = remote,
        job_type = job_type,
        posted = escape_html(&row.posted),
        site = row.site,
        id = escape_html(&row.id),
    ));
}
