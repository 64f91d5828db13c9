//! Content records managed from the CMS screens. Upload fields (`photo`,
//! `image`) carry the stored path or URL of an already uploaded file.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    pub id: String,
    #[serde(default)]
    pub photo: Option<String>,
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_active: bool,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub category: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsPayload {
    pub title: String,
    pub desc: String,
    pub author: String,
    pub category_id: String,
    pub is_active: bool,
    pub published_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub desc: String,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_active: bool,
    #[serde(default)]
    pub upload_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub desc: String,
    pub is_active: bool,
    /// Calendar date, `YYYY-MM-DD`.
    pub upload_at: String,
}

impl ActivityPayload {
    /// Builds a payload, reducing a timestamp `upload_at` to its date part.
    pub fn new(desc: impl Into<String>, is_active: bool, upload_at: &str) -> Self {
        Self {
            image: None,
            desc: desc.into(),
            is_active,
            upload_at: date_only(upload_at),
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub id: String,
    #[serde(default)]
    pub photo: Option<String>,
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub title: String,
    pub desc: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqPayload {
    pub question: String,
    pub answer: String,
}

/// Date part of an RFC 3339 timestamp; plain dates pass through.
#[must_use]
pub fn date_only(value: &str) -> String {
    let value = value.trim();
    value
        .split_once('T')
        .map_or(value, |(date, _)| date)
        .to_string()
}

/// Accepts `true`/`false`, `0`/`1` and `"0"`/`"1"`, as the backend mixes them.
pub(crate) fn flexible_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(value)) => Ok(value),
        Some(Value::Number(number)) => Ok(number.as_i64().is_some_and(|n| n != 0)),
        Some(Value::String(text)) => Ok(matches!(text.trim(), "1" | "true")),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a boolean, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn date_only_strips_time_component() {
        assert_eq!(date_only("2025-03-14T09:30:00.000Z"), "2025-03-14");
        assert_eq!(date_only("2025-03-14"), "2025-03-14");
        assert_eq!(ActivityPayload::new("Rapat", true, "2025-03-14T00:00:00Z").upload_at, "2025-03-14");
    }

    #[test]
    fn is_active_accepts_numeric_and_string_flags() {
        for (raw, expected) in [
            (json!(true), true),
            (json!(0), false),
            (json!(1), true),
            (json!("1"), true),
            (json!("0"), false),
            (json!(null), false),
        ] {
            let activity: Activity = serde_json::from_value(json!({
                "id": "a-1",
                "desc": "Makrab",
                "is_active": raw
            }))
            .unwrap();
            assert_eq!(activity.is_active, expected);
        }
    }

    #[test]
    fn payload_omits_missing_upload() {
        let payload = BenefitPayload {
            photo: None,
            title: "Beasiswa".to_string(),
            desc: "Info beasiswa".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("photo").is_none());
    }
}
