use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use mime::Mime;

pub fn text_response(body: &str) -> ResultResp {
    static_response(body.to_string(), &mime::TEXT_PLAIN_UTF_8)
}

/// A 200 with a fixed body, e.g. the stylesheet bundled into the binary.
pub fn static_response(body: impl Into<String>, content_type: &Mime) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(body.into()))
        .map_err(|_| ServerError::InternalError)
}
