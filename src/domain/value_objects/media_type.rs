//! Media types and response statuses used by scenario suites.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Request and response body formats exercised by the API suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Json,
    Xml,
    Form,
}

impl MediaType {
    /// The MIME type sent in `Content-Type` / `Accept` headers.
    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Json => "application/json",
            MediaType::Xml => "application/xml",
            MediaType::Form => "application/x-www-form-urlencoded",
        }
    }

    /// Short label used in suite titles (`JSON`, `XML`, `FORM`).
    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Json => "JSON",
            MediaType::Xml => "XML",
            MediaType::Form => "FORM",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A documented response status: a concrete code or the OpenAPI `default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseStatus {
    Code(u16),
    Default,
}

impl ResponseStatus {
    /// Whether a received HTTP status satisfies this documented status.
    ///
    /// `default` covers any status outside `documented`.
    pub fn matches(&self, status: u16, documented: &[ResponseStatus]) -> bool {
        match self {
            ResponseStatus::Code(code) => *code == status,
            ResponseStatus::Default => !documented.contains(&ResponseStatus::Code(status)),
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseStatus::Code(code) => write!(f, "{}", code),
            ResponseStatus::Default => f.write_str("default"),
        }
    }
}

impl Serialize for ResponseStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResponseStatus::Code(code) => serializer.serialize_u16(*code),
            ResponseStatus::Default => serializer.serialize_str("default"),
        }
    }
}

impl<'de> Deserialize<'de> for ResponseStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(u16),
            Label(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Code(code) => Ok(ResponseStatus::Code(code)),
            Raw::Label(label) if label == "default" => Ok(ResponseStatus::Default),
            Raw::Label(label) => label
                .parse()
                .map(ResponseStatus::Code)
                .map_err(|_| D::Error::custom(format!("invalid response status: {:?}", label))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_undocumented_codes() {
        let documented = [ResponseStatus::Code(200), ResponseStatus::Code(400)];
        assert!(ResponseStatus::Default.matches(500, &documented));
        assert!(!ResponseStatus::Default.matches(400, &documented));
        assert!(ResponseStatus::Code(200).matches(200, &documented));
    }

    #[test]
    fn test_status_serde() {
        let statuses = vec![ResponseStatus::Code(404), ResponseStatus::Default];
        let json = serde_json::to_string(&statuses).unwrap();
        assert_eq!(json, r#"[404,"default"]"#);
        let back: Vec<ResponseStatus> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, statuses);
    }

    #[test]
    fn test_media_labels() {
        assert_eq!(MediaType::Form.to_string(), "FORM");
        assert_eq!(MediaType::Xml.mime(), "application/xml");
    }
}
