//! Scenario Catalog
//!
//! The endpoints covered by each built-in profile, expressed as scenario
//! matrices.
//!
//! Titles are normalized: media types always use the short labels
//! (`→ JSON`, not `→ application/json`), case titles carry no per-format
//! suffix such as `(JSON)`, and every documented status is planned for every
//! media-type combination, `default` included.

use crate::domain::services::{expand, Endpoint, HttpMethod, ScenarioSuite};
use crate::domain::value_objects::MediaType::{Form, Json, Xml};

/// Endpoints exercised by the PetStore suites.
pub fn petstore_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(HttpMethod::Post, "/pet")
            .consumes(&[Json, Xml, Form])
            .produces(&[Json, Xml])
            .response(200, "Successful operation")
            .response(400, "Invalid input")
            .response(422, "Validation exception")
            .default_response("Unexpected error"),
        Endpoint::new(HttpMethod::Put, "/pet")
            .consumes(&[Json, Xml, Form])
            .produces(&[Json, Xml])
            .response(200, "Successful operation")
            .response(400, "Invalid ID supplied")
            .response(404, "Pet not found")
            .response(422, "Validation exception")
            .default_response("Unexpected error"),
        Endpoint::new(HttpMethod::Get, "/pet/{petId}")
            .produces(&[Json, Xml])
            .response(200, "Successful operation")
            .response(400, "Invalid ID supplied")
            .response(404, "Pet not found")
            .default_response("Unexpected error"),
        Endpoint::new(HttpMethod::Post, "/pet/{petId}")
            .consumes(&[Json, Xml, Form])
            .produces(&[Json, Xml])
            .response(200, "Successful operation")
            .response(400, "Invalid input")
            .response(422, "Validation exception")
            .default_response("Unexpected error"),
        Endpoint::new(HttpMethod::Post, "/user")
            .consumes(&[Json, Xml, Form])
            .produces(&[Json, Xml])
            .response(200, "successful operation")
            .response(400, "Invalid input")
            .response(422, "Validation exception")
            .default_response("Unexpected error"),
        Endpoint::new(HttpMethod::Post, "/user/createWithList")
            .consumes(&[Json])
            .produces(&[Json, Xml])
            .response(200, "Successful operation")
            .default_response("Unexpected error"),
        Endpoint::new(HttpMethod::Get, "/user/login")
            .produces(&[Json, Xml])
            .response(200, "Successful operation")
            .response(400, "Invalid username/password supplied")
            .default_response("Unexpected error"),
    ]
}

/// Endpoints exercised by the object-CRUD suites.
pub fn objects_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(HttpMethod::Get, "/objects")
            .produces(&[Json])
            .response(200, "A list of objects"),
        Endpoint::new(HttpMethod::Post, "/objects")
            .consumes(&[Json])
            .produces(&[Json])
            .response(200, "Object created successfully")
            .response(400, "Invalid input"),
        Endpoint::new(HttpMethod::Get, "/objects/{id}")
            .produces(&[Json])
            .response(200, "Object details")
            .response(404, "Object not found"),
        Endpoint::new(HttpMethod::Put, "/objects/{id}")
            .consumes(&[Json])
            .produces(&[Json])
            .response(200, "Object updated successfully")
            .response(404, "Object not found"),
        Endpoint::new(HttpMethod::Delete, "/objects/{id}")
            .response(200, "Object deleted successfully")
            .response(404, "Object not found"),
    ]
}

/// Endpoints for a built-in profile name; `None` for custom profiles.
pub fn endpoints_for(profile: &str) -> Option<Vec<Endpoint>> {
    match profile.to_ascii_lowercase().as_str() {
        "petstore" => Some(petstore_endpoints()),
        "objects" => Some(objects_endpoints()),
        _ => None,
    }
}

/// Expand every endpoint into its suites, in catalog order.
pub fn plan(endpoints: &[Endpoint]) -> Vec<ScenarioSuite> {
    endpoints.iter().flat_map(expand).collect()
}
