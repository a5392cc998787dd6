use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// App state over the built-in catalog, with no search delay.
pub fn test_state() -> AppState {
    let catalog = Catalog::builtin().unwrap_or_else(|e| panic!("built-in catalog failed: {e}"));
    AppState::new(catalog, &AppConfig::default())
}

pub fn get(uri: &str) -> Request {
    request(Method::GET, uri)
}

pub fn request(method: Method, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Listing ids linked from the page, in page order, deduplicated.
pub fn linked_listing_ids(html: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for part in html.split("href=\"/properties/").skip(1) {
        if let Some(id) = part.split('"').next() {
            if !ids.iter().any(|seen| seen == id) {
                ids.push(id.to_string());
            }
        }
    }
    ids
}
