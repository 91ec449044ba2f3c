//! REST DTOs for the course API.
//!
//! DESIGN
//! ======
//! Field names mirror the API's camelCase/Mongo-style JSON so responses
//! deserialize without a mapping layer. Optional fields the API omits for
//! some courses (`price`, `createdBy`) stay `Option` and are given display
//! fallbacks by the helpers below.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Author reference embedded in a course.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseAuthor {
    #[serde(default)]
    pub name: Option<String>,
}

/// A course as returned by `GET /api/courses`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_paid: bool,
    /// Present when `is_paid` is true.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub created_by: Option<CourseAuthor>,
}

impl Course {
    /// Author display name, or `"Unknown"`.
    #[must_use]
    pub fn author_label(&self) -> &str {
        self.created_by
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or("Unknown")
    }

    /// `"$<price>"` for paid courses with a price, `"Paid"` without one, else `"Free"`.
    #[must_use]
    pub fn price_label(&self) -> String {
        match (self.is_paid, self.price) {
            (true, Some(price)) => format!("${price}"),
            (true, None) => "Paid".to_owned(),
            (false, _) => "Free".to_owned(),
        }
    }
}

/// The list endpoint returns either a bare array or a `{ "courses": [...] }` envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CourseListResponse {
    Bare(Vec<Course>),
    Envelope { courses: Vec<Course> },
}

impl CourseListResponse {
    #[must_use]
    pub fn into_courses(self) -> Vec<Course> {
        match self {
            Self::Bare(courses) | Self::Envelope { courses } => courses,
        }
    }
}

/// Parse a course-list response body in either shape.
///
/// # Errors
///
/// Returns the serde error when the body matches neither shape.
pub fn parse_course_list(body: &str) -> Result<Vec<Course>, serde_json::Error> {
    serde_json::from_str::<CourseListResponse>(body).map(CourseListResponse::into_courses)
}
