//! Dashboard summary payload
//!
//! The aggregate statistics returned by the summary endpoint, and the
//! display formatting the dashboard tab applies to them.

use serde::{Deserialize, Deserializer, Serialize};

/// Labelled series, e.g. letter grade -> count. `labels` and `data` always
/// have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct Series {
    labels: Vec<String>,
    data: Vec<f64>,
}

#[derive(Deserialize)]
struct RawSeries {
    labels: Vec<String>,
    data: Vec<f64>,
}

#[derive(Debug, thiserror::Error)]
#[error("series has {labels} labels but {data} data points")]
pub struct SeriesLengthMismatch {
    labels: usize,
    data: usize,
}

impl TryFrom<RawSeries> for Series {
    type Error = SeriesLengthMismatch;

    fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
        Series::new(raw.labels, raw.data)
    }
}

impl Series {
    pub fn new(labels: Vec<String>, data: Vec<f64>) -> Result<Self, SeriesLengthMismatch> {
        if labels.len() != data.len() {
            return Err(SeriesLengthMismatch {
                labels: labels.len(),
                data: data.len(),
            });
        }
        Ok(Self { labels, data })
    }

    /// Pretty-printed JSON, two-space indented, as shown in the panels.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

/// Statistics shown on the dashboard tab. Replaced wholesale on every
/// successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_students: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_courses: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_grade: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub at_risk_count: u64,
    #[serde(default)]
    pub grade_distribution: Option<Series>,
    #[serde(default)]
    pub department_performance: Option<Series>,
}

/// An explicit `null` decodes like a missing field. The backend sends one
/// for `average_grade` when there are no grades yet.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl DashboardSummary {
    /// Decodes a response body. Anything that is not a JSON object of the
    /// expected shape is an error.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// The four stat card values, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatValues {
    pub total_students: String,
    pub total_courses: String,
    pub average_grade: String,
    pub at_risk_count: String,
}

impl StatValues {
    /// Integers as-is, the average rounded to one decimal; zeros while no
    /// summary has been received.
    pub fn from_summary(summary: Option<&DashboardSummary>) -> Self {
        match summary {
            Some(s) => Self {
                total_students: s.total_students.to_string(),
                total_courses: s.total_courses.to_string(),
                average_grade: format!("{:.1}", s.average_grade),
                at_risk_count: s.at_risk_count.to_string(),
            },
            None => Self {
                total_students: "0".to_string(),
                total_courses: "0".to_string(),
                average_grade: "0.0".to_string(),
                at_risk_count: "0".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BODY: &str = r#"{
        "total_students": 412,
        "total_courses": 37,
        "average_grade": 78.46,
        "at_risk_count": 23,
        "grade_distribution": {"labels": ["A", "B", "C", "D", "F"], "data": [61, 140, 120, 68, 23]},
        "department_performance": {"labels": ["Math", "Physics"], "data": [81.2, 74.9]}
    }"#;

    #[test]
    fn decodes_complete_payload() {
        let summary = DashboardSummary::from_json(FULL_BODY.as_bytes()).unwrap();
        assert_eq!(summary.total_students, 412);
        assert_eq!(summary.total_courses, 37);
        assert_eq!(summary.at_risk_count, 23);
        let grades = summary.grade_distribution.unwrap();
        assert_eq!(grades.labels[0], "A");
        assert_eq!(grades.data[1], 140.0);
        assert_eq!(summary.department_performance.unwrap().labels.len(), 2);
    }

    #[test]
    fn missing_fields_default_to_zero_and_absent() {
        let summary = DashboardSummary::from_json(br#"{"total_students": 5}"#).unwrap();
        assert_eq!(summary.total_students, 5);
        assert_eq!(summary.total_courses, 0);
        assert_eq!(summary.average_grade, 0.0);
        assert!(summary.grade_distribution.is_none());
        assert!(summary.department_performance.is_none());
    }

    #[test]
    fn null_stats_decode_as_zero() {
        let body = br#"{"total_students":3,"total_courses":2,"average_grade":null,"at_risk_count":null,"grade_distribution":null}"#;
        let summary = DashboardSummary::from_json(body).unwrap();
        assert_eq!(summary.total_students, 3);
        assert_eq!(summary.total_courses, 2);
        assert_eq!(summary.average_grade, 0.0);
        assert_eq!(summary.at_risk_count, 0);
        assert!(summary.grade_distribution.is_none());

        let values = StatValues::from_summary(Some(&summary));
        assert_eq!(values.average_grade, "0.0");
        assert_eq!(values.total_students, "3");

        // Negative counts are still rejected.
        assert!(DashboardSummary::from_json(br#"{"total_students":-1}"#).is_err());
    }

    #[test]
    fn rejects_non_json_and_malformed_bodies() {
        assert!(DashboardSummary::from_json(b"<html>Login</html>").is_err());
        assert!(DashboardSummary::from_json(br#"{"total_students": -3}"#).is_err());
        assert!(DashboardSummary::from_json(br#""summary""#).is_err());
        assert!(DashboardSummary::from_json(b"").is_err());
    }

    #[test]
    fn rejects_series_with_unequal_lengths() {
        let body = r#"{"grade_distribution": {"labels": ["A", "B"], "data": [1]}}"#;
        let err = DashboardSummary::from_json(body.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("2 labels but 1 data points"));
    }

    #[test]
    fn stat_values_default_when_absent() {
        let values = StatValues::from_summary(None);
        assert_eq!(values.total_students, "0");
        assert_eq!(values.total_courses, "0");
        assert_eq!(values.average_grade, "0.0");
        assert_eq!(values.at_risk_count, "0");
    }

    #[test]
    fn stat_values_round_average_to_one_decimal() {
        let summary = DashboardSummary {
            total_students: 412,
            total_courses: 37,
            average_grade: 78.46,
            at_risk_count: 23,
            ..Default::default()
        };
        let values = StatValues::from_summary(Some(&summary));
        assert_eq!(values.total_students, "412");
        assert_eq!(values.total_courses, "37");
        assert_eq!(values.average_grade, "78.5");
        assert_eq!(values.at_risk_count, "23");
    }

    #[test]
    fn pretty_json_keeps_labels_and_data() {
        let series = Series::new(vec!["A".into(), "B".into()], vec![3.0, 4.5]).unwrap();
        let text = series.to_pretty_json();
        assert!(text.starts_with("{\n  \"labels\": ["));
        assert!(text.contains("\"A\""));
        assert!(text.contains("4.5"));
    }
}
