//! Form rendering module
//!
//! - `field_renderer`: single field input boxes and help lines
//! - `form_view`: a whole form with its description and last result

mod field_renderer;
mod form_view;

pub use form_view::{draw_form, FormViewOptions};
