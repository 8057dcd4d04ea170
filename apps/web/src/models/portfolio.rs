use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Aggregate read model for one public portfolio, as served by `GET /portfolio/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioRecord {
    pub user: PortfolioUser,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,
    /// Opaque media references. Only checked for presence.
    #[serde(default, deserialize_with = "null_as_default")]
    pub media: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioUser {
    pub github_username: String,
    #[serde(default)]
    pub portfolio_username: String,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub resume_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    /// Language name → byte count (or weight). Key order carries no meaning.
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: HashMap<String, f64>,
}

impl Project {
    /// Up to `limit` language names, heaviest first, ties broken by name.
    pub fn top_languages(&self, limit: usize) -> Vec<&str> {
        let mut langs: Vec<(&str, f64)> = self
            .languages
            .iter()
            .map(|(name, weight)| (name.as_str(), *weight))
            .collect();
        langs.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        langs.into_iter().take(limit).map(|(name, _)| name).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    #[serde(deserialize_with = "wire_date")]
    pub start_date: NaiveDate,
    /// `None` means the position is ongoing.
    #[serde(default, deserialize_with = "optional_wire_date")]
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: i64,
    pub school: String,
    pub field_of_study: Option<String>,
    pub graduation_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `YYYY-MM-DD` or any ISO-8601 datetime that starts with one.
fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn wire_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_wire_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'")))
}

fn optional_wire_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_wire_date(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_upstream_record() {
        let record: PortfolioRecord = serde_json::from_value(json!({
            "user": {
                "github_username": "octocat",
                "portfolio_username": "octo",
                "bio": "Builds things",
                "profile_image_url": null,
                "resume_text": null
            },
            "projects": [{
                "id": 1,
                "name": "hello-world",
                "description": null,
                "url": "https://github.com/octocat/hello-world",
                "languages": {"Rust": 1200, "Shell": 40}
            }],
            "experience": [{
                "id": 7,
                "title": "Engineer",
                "company": "GitHub",
                "location": null,
                "start_date": "2022-01-15T00:00:00",
                "end_date": null,
                "description": null
            }],
            "education": [],
            "skills": [{"id": 3, "name": "Rust"}],
            "media": []
        }))
        .unwrap();

        assert_eq!(record.user.github_username, "octocat");
        assert_eq!(
            record.experience[0].start_date,
            NaiveDate::from_ymd_opt(2022, 1, 15).unwrap()
        );
        assert!(record.experience[0].end_date.is_none());
        assert_eq!(record.projects[0].languages.len(), 2);
    }

    #[test]
    fn test_null_collections_decode_as_empty() {
        let record: PortfolioRecord = serde_json::from_value(json!({
            "user": {"github_username": "octocat"},
            "projects": null,
            "skills": null
        }))
        .unwrap();
        assert!(record.projects.is_empty());
        assert!(record.skills.is_empty());
        assert!(record.experience.is_empty());
        assert!(record.media.is_empty());
    }

    #[test]
    fn test_rejects_garbage_date() {
        let result: Result<Experience, _> = serde_json::from_value(json!({
            "id": 1,
            "title": "Engineer",
            "company": "Acme",
            "start_date": "last spring"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_top_languages_orders_by_weight_then_name() {
        let project = Project {
            id: 1,
            name: "p".to_string(),
            description: None,
            url: String::new(),
            languages: HashMap::from([
                ("Shell".to_string(), 10.0),
                ("Rust".to_string(), 900.0),
                ("Go".to_string(), 10.0),
                ("C".to_string(), 5.0),
            ]),
        };
        assert_eq!(project.top_languages(3), vec!["Rust", "Go", "Shell"]);
    }
}
