pub mod errors;
pub mod html;
pub mod text;

pub use errors::{error_to_response, ResultResp};

pub use html::html_response;
pub use text::{static_response, text_response};
