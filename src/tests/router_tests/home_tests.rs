use crate::router::handle;
use crate::tests::utils::{body_string, get, linked_listing_ids, test_state};

#[test]
fn home_page_renders_every_section() {
    let state = test_state();

    let resp = handle(get("/"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(resp);
    for heading in [
        "Discover Your Perfect Property",
        "Recent Properties",
        "Featured Properties",
        "Why Choose Us",
        "Popular Places",
        "Apartment for rent",
        "Meet Our Agents",
        "Read the latest news from our blog",
    ] {
        assert!(body.contains(heading), "missing section {heading:?}");
    }
    assert!(!body.contains("Search Results"));
}

#[test]
fn home_page_shows_nine_recent_plus_featured() {
    let state = test_state();
    let body = body_string(handle(get("/"), &state).unwrap());

    let ids = linked_listing_ids(&body);
    let expected: Vec<String> = (1..=9)
        .chain([11])
        .map(|n| format!("prop-{n}"))
        .collect();
    assert_eq!(ids, expected);
}

#[test]
fn home_page_limits_static_sections() {
    let state = test_state();
    let body = body_string(handle(get("/"), &state).unwrap());

    // featured locations only
    assert!(body.contains("312 Properties"));
    assert!(body.contains("$1,250,000"));
    assert!(!body.contains("87 Properties"));

    // six agents, the last one without a photo
    assert!(body.contains("Sarah Johnson"));
    assert!(body.contains("James Wilson"));
    let placeholder = maud::html! { (crate::constants::AVATAR_PLACEHOLDER_IMAGE) }.into_string();
    assert!(body.contains(&placeholder));

    // first three posts, in file order
    assert!(body.contains("Ten Questions to Ask Before Buying Your First Home"));
    assert!(body.contains("Mar 5, 2024"));
    assert!(body.contains("6 min read"));
    assert!(!body.contains("Neighborhood Guide: Coral Gables"));
}

#[test]
fn home_form_starts_collapsed_on_for_sale() {
    let state = test_state();
    let body = body_string(handle(get("/"), &state).unwrap());

    assert!(body.contains(r#"<form method="get" action="/search""#));
    assert!(body.contains(r#"<option value="for-sale" selected>For Sale</option>"#));
    assert!(body.contains(r#"<details class="advanced-search">"#));
}
