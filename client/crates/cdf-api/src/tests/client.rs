use crate::Client;

use cdf_session::{MemorySessionStore, SessionManager};

use reqwest::Method;

use std::sync::Arc;

fn session() -> SessionManager {
    SessionManager::new(Arc::new(MemorySessionStore::new()))
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/", session());
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000", session());
    assert_eq!(client.base_url, "http://localhost:8000");
}

fn built_url(client: &Client, path: &str, params: &[(&str, Option<String>)]) -> String {
    client
        .request_with_query(Method::GET, path, params)
        .build()
        .unwrap()
        .url()
        .to_string()
}

#[test]
fn test_query_string_only_includes_set_filters() {
    let client = Client::new("http://localhost:8000", session());
    let url = built_url(
        &client,
        "/api/projects",
        &[
            ("constituency_id", Some("4".to_string())),
            ("program_id", None),
            ("status", Some("ongoing".to_string())),
        ],
    );
    assert_eq!(url, "http://localhost:8000/api/projects?constituency_id=4&status=ongoing");
}

#[test]
fn test_query_string_omitted_without_filters() {
    let client = Client::new("http://localhost:8000", session());
    let url = built_url(&client, "/api/members", &[("constituency_id", None)]);
    assert_eq!(url, "http://localhost:8000/api/members");
}

#[test]
fn test_query_values_with_reserved_characters_are_encoded() {
    let client = Client::new("http://localhost:8000", session());
    let url = built_url(
        &client,
        "/api/projects",
        &[("status", Some("on hold&x=1#frag".to_string()))],
    );
    assert_eq!(
        url,
        "http://localhost:8000/api/projects?status=on+hold%26x%3D1%23frag"
    );
}
