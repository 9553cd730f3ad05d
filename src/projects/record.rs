// SPDX-License-Identifier: MPL-2.0
//! Project records as published in the static `projects.json` collection.
//!
//! Records are decoded once and never mutated afterwards. Optional sections
//! (`links`, `challenges`, `achievements`...) stay `None`/empty when absent so
//! every view can degrade to "omitted" instead of failing.

use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Stable identity of a record within a collection.
///
/// The published data uses plain numbers, but string ids are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Number(n) => write!(f, "{n}"),
            ProjectId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ProjectId {
    fn from(value: u64) -> Self {
        ProjectId::Number(value)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        ProjectId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ProjectImage {
    /// Text describing the image, falling back to the project name.
    #[must_use]
    pub fn label<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt.as_deref().unwrap_or(fallback)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
    #[serde(default)]
    pub technology: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ProjectLinks>,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solutions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<Achievement>>,
}

impl ProjectRecord {
    /// Whether the record has enough images to rotate through.
    #[must_use]
    pub fn has_carousel(&self) -> bool {
        self.images.len() > 1
    }

    #[must_use]
    pub fn image(&self, index: usize) -> Option<&ProjectImage> {
        self.images.get(index)
    }

    #[must_use]
    pub fn live_url(&self) -> Option<&str> {
        self.links.as_ref().and_then(|l| l.project.as_deref())
    }

    #[must_use]
    pub fn repo_url(&self) -> Option<&str> {
        self.links.as_ref().and_then(|l| l.repo.as_deref())
    }
}

/// Rejects collections in which two records share an id.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] naming the first duplicated id.
pub fn validate_unique_ids(records: &[ProjectRecord]) -> Result<(), FetchError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(&record.id) {
            return Err(FetchError::Decode(format!(
                "duplicate project id {}",
                record.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn sample(id: u64, image_count: usize) -> ProjectRecord {
    ProjectRecord {
        id: ProjectId::Number(id),
        name: format!("Project {id}"),
        description: "A sample project".to_string(),
        images: (0..image_count)
            .map(|i| ProjectImage {
                url: format!("https://img.test/{id}/{i}.png"),
                alt: None,
            })
            .collect(),
        technology: vec!["Rust".to_string()],
        links: None,
        key_features: vec!["Fast".to_string()],
        challenges: None,
        solutions: None,
        timeline: None,
        team_size: None,
        achievements: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_fields() {
        let json = r#"{
            "id": 7,
            "name": "Site",
            "description": "desc",
            "images": [{"url": "a", "alt": "first"}, {"url": "b"}],
            "technology": ["React"],
            "links": {"repo": "https://code.test"},
            "keyFeatures": ["one", "two"],
            "teamSize": "3",
            "timeline": "2 weeks"
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).expect("valid record");

        assert_eq!(record.id, ProjectId::Number(7));
        assert_eq!(record.key_features, vec!["one", "two"]);
        assert_eq!(record.team_size.as_deref(), Some("3"));
        assert_eq!(record.images[0].alt.as_deref(), Some("first"));
        assert_eq!(record.images[1].alt, None);
        assert_eq!(record.repo_url(), Some("https://code.test"));
        assert_eq!(record.live_url(), None);
        assert!(record.achievements.is_none());
        assert!(record.challenges.is_none());
    }

    #[test]
    fn accepts_string_ids() {
        let json = r#"{"id": "alpha", "name": "n", "description": "d"}"#;
        let record: ProjectRecord = serde_json::from_str(json).expect("valid record");
        assert_eq!(record.id, ProjectId::from("alpha"));
        assert!(record.images.is_empty());
        assert!(record.key_features.is_empty());
    }

    #[test]
    fn missing_name_is_rejected() {
        let json = r#"{"id": 1, "description": "d"}"#;
        assert!(serde_json::from_str::<ProjectRecord>(json).is_err());
    }

    #[test]
    fn duplicate_ids_are_a_decode_error() {
        let records = vec![sample(1, 0), sample(2, 0), sample(1, 3)];
        match validate_unique_ids(&records) {
            Err(FetchError::Decode(message)) => assert!(message.contains("duplicate")),
            other => panic!("expected decode error, got {other:?}"),
        }
        assert!(validate_unique_ids(&records[..2]).is_ok());
    }

    #[test]
    fn carousel_requires_two_images() {
        assert!(!sample(1, 0).has_carousel());
        assert!(!sample(1, 1).has_carousel());
        assert!(sample(1, 2).has_carousel());
    }

    #[test]
    fn image_label_falls_back_to_given_text() {
        let image = ProjectImage {
            url: "u".into(),
            alt: None,
        };
        assert_eq!(image.label("Project"), "Project");
    }
}
