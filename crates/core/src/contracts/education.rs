//! Education history entries.

use serde::{Deserialize, Serialize};

use crate::types::{EducationId, IsoDate};

/// An education entry as returned by the backend.
///
/// When `current` is set the entry is ongoing and `end_date` carries no
/// meaning, even if the backend still sends one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(alias = "_id")]
    pub id: EducationId,
    pub degree: String,
    pub school: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub start_date: IsoDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<IsoDate>,
    #[serde(default)]
    pub current: bool,
}

impl Education {
    /// End date that should be shown, ignoring it for ongoing entries.
    #[must_use]
    pub const fn effective_end(&self) -> Option<IsoDate> {
        if self.current { None } else { self.end_date }
    }

    /// Human-readable period, e.g. `Sep 2019 – Jun 2022` or `Sep 2022 – Present`.
    #[must_use]
    pub fn period(&self) -> String {
        let start = self.start_date.month_year();
        match self.effective_end() {
            Some(end) => format!("{start} – {}", end.month_year()),
            None if self.current => format!("{start} – Present"),
            None => start,
        }
    }
}

/// Payload for creating an education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationInput {
    pub degree: String,
    pub school: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub start_date: IsoDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<IsoDate>,
    #[serde(default)]
    pub current: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(current: bool, end: Option<&str>) -> Education {
        serde_json::from_value(json!({
            "_id": "e1",
            "degree": "BSc Computer Science",
            "school": "Lebanese University",
            "startDate": "2019-09-01T00:00:00.000Z",
            "endDate": end,
            "current": current
        }))
        .unwrap()
    }

    #[test]
    fn test_completed_period() {
        let edu = entry(false, Some("2022-06-30"));
        assert_eq!(edu.period(), "Sep 2019 – Jun 2022");
    }

    #[test]
    fn test_current_entry_ignores_end_date() {
        let edu = entry(true, Some("2022-06-30"));
        assert!(edu.effective_end().is_none());
        assert_eq!(edu.period(), "Sep 2019 – Present");
    }

    #[test]
    fn test_open_ended_without_current_flag() {
        let edu = entry(false, None);
        assert_eq!(edu.period(), "Sep 2019");
    }

    #[test]
    fn test_input_serializes_plain_dates() {
        let input = EducationInput {
            degree: "MSc".to_string(),
            school: "EPFL".to_string(),
            field_of_study: Some("Distributed Systems".to_string()),
            location: None,
            description: None,
            grade: None,
            start_date: IsoDate::parse("2023-09-15").unwrap(),
            end_date: None,
            current: true,
        };
        let body = serde_json::to_value(input).unwrap();
        assert_eq!(body["startDate"], "2023-09-15");
        assert_eq!(body["fieldOfStudy"], "Distributed Systems");
        assert!(body.get("endDate").is_none());
    }
}
