//! Environment descriptor written for the external report viewer.

use std::fmt;

/// Ordered `KEY=VALUE` pairs describing the run environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentDescriptor {
    entries: Vec<(String, String)>,
}

/// Inputs of an [`EnvironmentDescriptor`].
#[derive(Debug, Clone)]
pub struct DescriptorFields<'a> {
    pub os: &'a str,
    pub runtime_version: &'a str,
    pub base_url: &'a str,
    pub browser: &'a str,
    pub project: &'a str,
    pub organization: &'a str,
}

impl EnvironmentDescriptor {
    /// File name expected by the report viewer.
    pub const FILE_NAME: &'static str = "environment.properties";

    pub fn new(fields: DescriptorFields<'_>) -> Self {
        let entries = [
            ("OS", fields.os),
            ("Node", fields.runtime_version),
            ("BaseURL", fields.base_url),
            ("Browser", fields.browser),
            ("Project", fields.project),
            ("Organization", fields.organization),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render as newline-joined `KEY=VALUE` lines, no trailing newline.
    pub fn to_properties(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for EnvironmentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_properties())
    }
}
