//! Scenario Matrix
//!
//! Expands one endpoint description into the cross product the API suites
//! cover: request media type x response media type x documented status.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::value_objects::{MediaType, ResponseStatus};

/// HTTP method of an endpoint under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A documented response of an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentedResponse {
    pub status: ResponseStatus,
    pub description: String,
}

/// Declarative description of one endpoint and the variants its suites cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub path: String,
    pub method: HttpMethod,
    /// Request body formats; empty for body-less methods.
    #[serde(default)]
    pub request_types: Vec<MediaType>,
    /// Accepted response formats; empty when the response has no body.
    #[serde(default)]
    pub response_types: Vec<MediaType>,
    pub responses: Vec<DocumentedResponse>,
}

impl Endpoint {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            request_types: Vec::new(),
            response_types: Vec::new(),
            responses: Vec::new(),
        }
    }

    pub fn consumes(mut self, types: &[MediaType]) -> Self {
        self.request_types = types.to_vec();
        self
    }

    pub fn produces(mut self, types: &[MediaType]) -> Self {
        self.response_types = types.to_vec();
        self
    }

    pub fn response(self, status: u16, description: impl Into<String>) -> Self {
        self.documented(ResponseStatus::Code(status), description)
    }

    /// Shorthand for the OpenAPI `default` response.
    pub fn default_response(self, description: impl Into<String>) -> Self {
        self.documented(ResponseStatus::Default, description)
    }

    fn documented(mut self, status: ResponseStatus, description: impl Into<String>) -> Self {
        self.responses.push(DocumentedResponse {
            status,
            description: description.into(),
        });
        self
    }

    fn documented_statuses(&self) -> Vec<ResponseStatus> {
        self.responses.iter().map(|r| r.status).collect()
    }
}

/// One test case: a single status within one media-type combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub path: String,
    pub method: HttpMethod,
    pub request_type: Option<MediaType>,
    pub response_type: Option<MediaType>,
    pub status: ResponseStatus,
    pub description: String,
    /// Statuses documented for the endpoint; `default` matches anything else.
    #[serde(skip)]
    documented: Vec<ResponseStatus>,
}

impl Scenario {
    /// `"<status> - <description>"`
    pub fn title(&self) -> String {
        format!("{} - {}", self.status, self.description)
    }

    /// `Accept` / `Content-Type` headers the request should carry.
    pub fn request_headers(&self) -> Vec<(&'static str, &'static str)> {
        let mut headers = Vec::with_capacity(2);
        if let Some(accept) = self.response_type {
            headers.push(("Accept", accept.mime()));
        }
        if let Some(content_type) = self.request_type {
            headers.push(("Content-Type", content_type.mime()));
        }
        headers
    }

    /// Whether a received status satisfies this scenario.
    pub fn accepts_status(&self, status: u16) -> bool {
        self.status.matches(status, &self.documented)
    }
}

/// All cases sharing one media-type combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioSuite {
    pub title: String,
    pub cases: Vec<Scenario>,
}

/// Expand an endpoint into its suites.
///
/// Suites are ordered request type first, then response type, matching the
/// layout of the hand-written suites (`JSON → JSON`, `JSON → XML`, `XML → JSON`, ...).
pub fn expand(endpoint: &Endpoint) -> Vec<ScenarioSuite> {
    let request_types = optional_axis(&endpoint.request_types);
    let response_types = optional_axis(&endpoint.response_types);
    let documented = endpoint.documented_statuses();

    let mut suites = Vec::with_capacity(request_types.len() * response_types.len());
    for request_type in &request_types {
        for response_type in &response_types {
            let cases = endpoint
                .responses
                .iter()
                .map(|response| Scenario {
                    path: endpoint.path.clone(),
                    method: endpoint.method,
                    request_type: *request_type,
                    response_type: *response_type,
                    status: response.status,
                    description: response.description.clone(),
                    documented: documented.clone(),
                })
                .collect();

            suites.push(ScenarioSuite {
                title: suite_title(endpoint, *request_type, *response_type),
                cases,
            });
        }
    }

    suites
}

/// `"<path> - <METHOD> [<REQ>] [→ <RESP>]"`
pub fn suite_title(
    endpoint: &Endpoint,
    request_type: Option<MediaType>,
    response_type: Option<MediaType>,
) -> String {
    let mut title = format!("{} - {}", endpoint.path, endpoint.method);
    if let Some(request_type) = request_type {
        title.push(' ');
        title.push_str(request_type.label());
    }
    if let Some(response_type) = response_type {
        title.push_str(" → ");
        title.push_str(response_type.label());
    }
    title
}

fn optional_axis(types: &[MediaType]) -> Vec<Option<MediaType>> {
    if types.is_empty() {
        vec![None]
    } else {
        types.iter().copied().map(Some).collect()
    }
}
