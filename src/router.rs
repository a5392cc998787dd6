use crate::domain::{filter_listings, Listing, SearchCriteria};
use crate::errors::ServerError;
use crate::responses::{error_to_response, html_response, static_response, text_response, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{home_page, properties_page, property_detail_page, HomeVm};
use astra::{Request, Response};
use std::thread;
use std::time::Instant;
use url::form_urlencoded;

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Entry point for the server: routes the request, renders errors as HTML
/// pages and logs the outcome.
pub fn serve(req: Request, state: &AppState) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let resp = match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => {
            match &err {
                ServerError::InternalError => tracing::error!(%method, %path, "{err}"),
                _ => tracing::debug!(%method, %path, "{err}"),
            }
            error_to_response(err)
        }
    };

    tracing::info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => render_home(state, &SearchCriteria::default(), false, state.catalog.listings(), false),
        ("GET", "/search") => search(&req, state),
        ("GET", "/properties") => html_response(properties_page(state.catalog.listings())),
        ("GET", "/health") => text_response("ok"),
        ("GET", "/static/main.css") => static_response(MAIN_CSS, &mime::TEXT_CSS_UTF_8),
        ("GET", p) if p.starts_with("/properties/") => {
            property_detail(&p["/properties/".len()..], state)
        }
        ("GET", _) => Err(ServerError::NotFound),
        (other, _) => Err(ServerError::BadRequest(format!("{other} is not supported"))),
    }
}

fn search(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let criteria = SearchCriteria::from_params(&params);
    let show_advanced = params.iter().any(|(k, v)| k == "advanced" && v == "1")
        || criteria.uses_advanced_fields();

    if !state.search_delay.is_zero() {
        thread::sleep(state.search_delay);
    }

    let results = filter_listings(state.catalog.listings(), &criteria);
    tracing::debug!(
        ?criteria,
        matched = results.len(),
        total = state.catalog.listings().len(),
        unconstrained = criteria.is_empty(),
        "search"
    );
    if !criteria.amenities.is_empty() {
        tracing::debug!(amenities = ?criteria.amenities, "amenities are not used for matching");
    }

    render_home(state, &criteria, show_advanced, &results, true)
}

fn render_home(
    state: &AppState,
    criteria: &SearchCriteria,
    show_advanced: bool,
    properties: &[Listing],
    searched: bool,
) -> ResultResp {
    let catalog = &state.catalog;

    html_response(home_page(&HomeVm {
        criteria,
        show_advanced,
        properties,
        searched,
        locations: catalog.featured_locations().collect(),
        agents: catalog.agents(),
        posts: catalog.posts(),
    }))
}

fn property_detail(id: &str, state: &AppState) -> ResultResp {
    let listing = state.catalog.listing(id).ok_or(ServerError::NotFound)?;
    let agent = state.catalog.agent(&listing.agent_id);

    html_response(property_detail_page(listing, agent))
}

/// Decoded `key=value` pairs in query order. Repeated keys are kept.
fn parse_query(req: &Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
