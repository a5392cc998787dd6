use crate::router::{handle, serve};
use crate::errors::ServerError;
use crate::tests::utils::{body_string, get, linked_listing_ids, request, test_state};
use http::Method;

#[test]
fn properties_page_lists_whole_catalog() {
    let state = test_state();
    let body = body_string(handle(get("/properties"), &state).unwrap());

    let expected: Vec<String> = (1..=12).map(|n| format!("prop-{n}")).collect();
    assert_eq!(linked_listing_ids(&body), expected);
    assert!(body.contains("<strong>12</strong> listings"));
}

#[test]
fn detail_page_shows_listing_and_agent() {
    let state = test_state();
    let resp = handle(get("/properties/prop-3"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Oceanfront Villa"));
    assert!(body.contains("$2,450,000"));
    assert!(body.contains("4,600 sq ft"));
    assert!(body.contains("Outdoor Shower"));
    assert!(body.contains("Emily Rodriguez"));
}

#[test]
fn listing_without_photos_uses_placeholder() {
    let state = test_state();
    let body = body_string(handle(get("/properties/prop-7"), &state).unwrap());
    // attribute values come out html-escaped
    let placeholder = maud::html! { (crate::constants::PROPERTY_PLACEHOLDER_IMAGE) }.into_string();
    assert!(body.contains(&placeholder));
}

#[test]
fn unknown_listing_is_not_found() {
    let state = test_state();
    let err = handle(get("/properties/prop-404"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = serve(get("/properties/prop-404"), &state);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Page Not Found"));
}

#[test]
fn unknown_path_and_method() {
    let state = test_state();

    assert_eq!(serve(get("/agents/1"), &state).status(), 404);

    let resp = serve(request(Method::POST, "/search"), &state);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("POST is not supported"));
}

#[test]
fn health_and_stylesheet() {
    let state = test_state();

    let resp = handle(get("/health"), &state).unwrap();
    assert_eq!(body_string(resp), "ok");

    let resp = handle(get("/static/main.css"), &state).unwrap();
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
}
