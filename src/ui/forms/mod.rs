//! Form rendering module
//!
//! - `field_renderer`: text inputs and option lists
//! - `waitlist_form`: the waitlist widget in its collapsed, open and completed states

mod field_renderer;
mod waitlist_form;

pub use waitlist_form::draw as draw_waitlist_form;
