pub mod error;
pub mod home;
pub mod properties;
pub mod property_detail;

pub use error::error_page;
pub use home::{home_page, HomeVm};
pub use properties::properties_page;
pub use property_detail::property_detail_page;
