pub mod content;
pub mod criteria;
pub mod filter;
pub mod format;
pub mod listing;

pub use content::{Agent, BlogPost, PopularLocation};
pub use criteria::SearchCriteria;
pub use filter::filter_listings;
pub use listing::{Listing, ListingStatus, PropertyType};
