use crate::domain::{filter_listings, SearchCriteria};
use crate::router::handle;
use crate::tests::utils::{body_string, get, linked_listing_ids, test_state};

fn search_ids(uri: &str) -> (Vec<String>, String) {
    let state = test_state();
    let resp = handle(get(uri), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    (linked_listing_ids(&body), body)
}

fn ids(ns: &[u32]) -> Vec<String> {
    ns.iter().map(|n| format!("prop-{n}")).collect()
}

#[test]
fn search_by_type_and_status() {
    let (found, body) = search_ids("/search?type=house&status=for-sale");
    assert_eq!(found, ids(&[1, 5, 6, 11]));
    assert!(body.contains("Search Results"));
    assert!(body.contains("<strong>4</strong> properties found"));
}

#[test]
fn search_by_price_range_is_inclusive() {
    let (found, _) = search_ids("/search?status=for-sale&min_price=975000&max_price=1680000");
    assert_eq!(found, ids(&[4, 5, 11]));
}

#[test]
fn fractional_price_reads_as_whole_dollars() {
    let (found, _) = search_ids("/search?min_price=1500000.5");
    assert_eq!(found, ids(&[3, 5]));
}

#[test]
fn search_decodes_city() {
    let (found, body) = search_ids("/search?city=Los+Angeles");
    assert_eq!(found, ids(&[1, 9]));
    assert!(body.contains(r#"<option value="Los Angeles" selected>Los Angeles</option>"#));

    let (encoded, _) = search_ids("/search?city=Los%20Angeles");
    assert_eq!(encoded, found);
}

#[test]
fn search_by_rooms_and_area() {
    let (found, body) = search_ids("/search?bedrooms=5");
    assert_eq!(found, ids(&[3, 9]));
    assert!(body.contains(r#"<details class="advanced-search" open>"#));

    let (found, _) = search_ids("/search?bathrooms=3&min_area=3000");
    assert_eq!(found, ids(&[3, 9, 11]));
}

#[test]
fn search_without_matches_renders_empty_state() {
    let (found, body) = search_ids("/search?type=condo&city=Seattle");
    assert!(found.is_empty());
    assert!(body.contains("No properties found"));
    assert!(body.contains("Try adjusting your search criteria"));
    assert!(body.contains("<strong>0</strong> properties found"));
}

#[test]
fn blank_search_matches_everything() {
    let (_, body) = search_ids("/search?type=&city=&bedrooms=&min_price=0&max_price=");
    assert!(body.contains("<strong>12</strong> properties found"));
}

#[test]
fn amenities_are_echoed_but_do_not_narrow() {
    let (_, body) = search_ids("/search?amenities=Swimming+Pool&amenities=Gym");
    assert!(body.contains("<strong>12</strong> properties found"));
    assert!(body.contains(r#"value="Swimming Pool" checked"#));
    assert!(body.contains(r#"value="Gym" checked"#));
}

#[test]
fn advanced_flag_opens_the_form() {
    let (_, body) = search_ids("/search?advanced=1");
    assert!(body.contains(r#"<details class="advanced-search" open>"#));
}

#[test]
fn rendered_results_agree_with_the_filter() {
    let state = test_state();
    let params = vec![
        ("status".to_string(), "for-rent".to_string()),
        ("max_price".to_string(), "6000".to_string()),
    ];
    let criteria = SearchCriteria::from_params(&params);
    let expected: Vec<String> = filter_listings(state.catalog.listings(), &criteria)
        .into_iter()
        .map(|l| l.id)
        .collect();

    let (found, _) = search_ids("/search?status=for-rent&max_price=6000");
    assert_eq!(found, expected);
    assert_eq!(found, ids(&[2, 7, 8, 12]));
}
