//! Wire types exchanged with the course API.
//!
//! Field names follow the API's camelCase JSON. Optional fields default so
//! partially populated rows from older endpoints still deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

/// Accept a string, number, or null where a string is expected.
pub(crate) fn de_loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match JsonValue::deserialize(deserializer)? {
        JsonValue::String(s) if !s.is_empty() => Some(s),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// One catalog course.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "courseId")]
    pub id: i64,
    #[serde(rename = "courseName")]
    pub name: String,
    #[serde(default)]
    pub difficulty_level: Option<String>,
    #[serde(default, deserialize_with = "de_loose_string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "de_loose_string")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub course_credits: f64,
    #[serde(default)]
    pub hours_per_week: u32,
    #[serde(default)]
    pub related_certification: Option<String>,
    #[serde(default)]
    pub course_description: Option<String>,
}

impl Course {
    /// Path of this course's detail page.
    pub fn href(&self) -> String {
        format!("/course/{}", self.id)
    }

    /// First sentence-ish slice of the description for cards.
    pub fn summary(&self, max_chars: usize) -> String {
        let text = self.course_description.as_deref().unwrap_or_default().trim();
        if text.chars().count() <= max_chars {
            return text.to_owned();
        }
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}\u{2026}", cut.trim_end())
    }
}

/// A saved course as returned by `GET /favorites`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Favorite {
    pub course: Course,
}

/// Body of `POST /authenticate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_factor_token: Option<String>,
}

/// Successful `POST /authenticate` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthenticationResponse {
    pub jwt: String,
}
