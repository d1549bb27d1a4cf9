//! Declarative frontmatter schemas for the two collections.
//!
//! Each schema is a plain `serde` struct whose `#[serde(default)]` fields
//! encode the collection defaults. Converting a schema into its entry type is
//! the single place where values are validated; the result never needs to be
//! checked again downstream.

use crate::domain::{EntryId, ProjectUrl, RequiredText, ValidationError};
use crate::error::{ContentError, ContentResult};
use crate::models::entry::{BlogEntry, ProjectEntry, ProjectStatus};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use std::fmt;

/// Datetime layouts accepted besides RFC 3339.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Date-only layouts accepted; these resolve to midnight UTC.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%b %d %Y", "%B %d %Y", "%b %d, %Y", "%B %d, %Y"];

/// A frontmatter date: either text in one of the accepted layouts or a bare
/// integer of milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    EpochMillis(i64),
    Text(String),
}

impl DateValue {
    /// Resolve to a UTC timestamp, `None` if the value is not a valid date.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::EpochMillis(millis) => Utc.timestamp_millis_opt(*millis).single(),
            Self::Text(raw) => parse_date(raw),
        }
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EpochMillis(millis) => write!(f, "{}", millis),
            Self::Text(raw) => f.write_str(raw),
        }
    }
}

/// Frontmatter of a blog post.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogFrontmatter {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "pubDate")]
    pub date: Option<DateValue>,
    pub updated_date: Option<DateValue>,
    pub hero_image: Option<String>,
    pub tags: Vec<String>,
    pub draft: bool,
    pub featured: bool,
}

/// Frontmatter of a project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectFrontmatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub repo: Option<String>,
    pub year: Option<i32>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub hero_image: Option<String>,
    pub status: Option<String>,
}

impl BlogFrontmatter {
    /// Validate and convert into a [`BlogEntry`].
    pub fn into_entry(self, id: EntryId, body: String) -> ContentResult<BlogEntry> {
        let title = required(&id, "title", self.title)?;
        let description = required(&id, "description", self.description)?;
        let date = optional_date(&id, "date", self.date)?;
        let updated_date = optional_date(&id, "updatedDate", self.updated_date)?;

        Ok(BlogEntry {
            id,
            title,
            description,
            body,
            tags: dedup_tags(self.tags),
            draft: self.draft,
            featured: self.featured,
            date,
            updated_date,
            hero_image: self.hero_image,
        })
    }
}

impl ProjectFrontmatter {
    /// Validate and convert into a [`ProjectEntry`].
    pub fn into_entry(self, id: EntryId, body: String) -> ContentResult<ProjectEntry> {
        let title = required(&id, "title", self.title)?;
        let description = required(&id, "description", self.description)?;
        let link = optional_url(&id, "link", self.link)?;
        let repo = optional_url(&id, "repo", self.repo)?;
        let status = match self.status {
            Some(raw) => raw
                .parse::<ProjectStatus>()
                .map_err(|e| field_error(&id, "status", e))?,
            None => ProjectStatus::default(),
        };

        Ok(ProjectEntry {
            id,
            title,
            description,
            body,
            tags: dedup_tags(self.tags),
            featured: self.featured,
            status,
            year: self.year,
            link,
            repo,
            hero_image: self.hero_image,
        })
    }
}

/// Parse a frontmatter date into a UTC timestamp.
///
/// Accepts RFC 3339, naive datetimes (taken as UTC) and date-only values.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive));
        }
    }

    None
}

fn field_error(id: &EntryId, field: &str, err: ValidationError) -> ContentError {
    ContentError::validation(id.as_str(), field, err.to_string())
}

fn required(id: &EntryId, field: &str, value: Option<String>) -> ContentResult<RequiredText> {
    let value = value
        .ok_or_else(|| ContentError::validation(id.as_str(), field, "missing required field"))?;
    RequiredText::new(value).map_err(|e| field_error(id, field, e))
}

fn optional_url(
    id: &EntryId,
    field: &str,
    value: Option<String>,
) -> ContentResult<Option<ProjectUrl>> {
    value
        .map(|raw| ProjectUrl::parse(&raw).map_err(|e| field_error(id, field, e)))
        .transpose()
}

fn optional_date(
    id: &EntryId,
    field: &str,
    value: Option<DateValue>,
) -> ContentResult<Option<DateTime<Utc>>> {
    match value {
        Some(raw) => raw.to_utc().map(Some).ok_or_else(|| {
            ContentError::validation(id.as_str(), field, format!("unrecognized date '{}'", raw))
        }),
        None => Ok(None),
    }
}

// Tags are a set; keep the first occurrence of each.
fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.into_iter().filter(|tag| seen.insert(tag.clone())).collect()
}
