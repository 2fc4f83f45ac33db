//! Deployment profiles.
//!
//! Each suite family (PetStore, object CRUD) ships its own bootstrap variant.
//! A profile captures what differs between them.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AuthScheme;

/// Display label of the HTTP client reported in the environment descriptor.
pub const DEFAULT_BROWSER_LABEL: &str = "Playwright Default";

/// Organization label shared by the built-in profiles.
pub const DEFAULT_ORGANIZATION: &str = "Accion Labs";

/// A bootstrap variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentProfile {
    /// Profile key (e.g., "petstore")
    pub name: String,

    /// Project label reported to the report viewer
    pub project: String,

    /// Organization label reported to the report viewer
    pub organization: String,

    /// Base URL used when `BASE_URL` is not set
    pub default_base_url: String,

    /// Client label reported as `Browser`
    pub browser_label: String,

    /// Credential schemes this profile reads from the environment
    pub schemes: Vec<AuthScheme>,
}

impl DeploymentProfile {
    /// The Swagger PetStore suites. Recognizes every scheme.
    pub fn petstore() -> Self {
        Self {
            name: "petstore".into(),
            project: "PetStore".into(),
            organization: DEFAULT_ORGANIZATION.into(),
            default_base_url: "http://localhost:3000".into(),
            browser_label: DEFAULT_BROWSER_LABEL.into(),
            schemes: AuthScheme::ALL.to_vec(),
        }
    }

    /// The generic object-CRUD suites (`/objects`).
    pub fn objects() -> Self {
        Self {
            name: "objects".into(),
            project: "Objects".into(),
            organization: DEFAULT_ORGANIZATION.into(),
            default_base_url: "https://api.restful-api.dev".into(),
            browser_label: DEFAULT_BROWSER_LABEL.into(),
            schemes: vec![AuthScheme::ApiKey, AuthScheme::Basic],
        }
    }

    /// All built-in profiles.
    pub fn builtin() -> Vec<Self> {
        vec![Self::petstore(), Self::objects()]
    }

    /// Find a built-in profile by name (case-insensitive).
    pub fn find_builtin(name: &str) -> Option<Self> {
        Self::builtin()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn recognizes(&self, scheme: AuthScheme) -> bool {
        self.schemes.contains(&scheme)
    }

    /// Variables this profile expects, joined for error messages.
    ///
    /// e.g. `API_KEY_VALUE, OAUTH_ACCESS_TOKEN, or BASIC_AUTH_USERNAME/PASSWORD`
    pub fn expected_env_hint(&self) -> String {
        let mut hints: Vec<String> = self.schemes.iter().map(AuthScheme::env_hint).collect();
        match hints.len() {
            0 => String::new(),
            1 => hints.remove(0),
            2 => format!("{} or {}", hints[0], hints[1]),
            _ => {
                let last = hints.pop().unwrap_or_default();
                format!("{}, or {}", hints.join(", "), last)
            }
        }
    }
}
