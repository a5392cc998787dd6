pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{badge, button_link, section_heading};
pub use layouts::desktop::desktop_layout;
