//! Form rendering module
//!
//! - `field_renderer`: maps one field to a visual control and draws it
//! - `dynamic_form`: the form pane for the selected form type

mod dynamic_form;
mod field_renderer;

pub use dynamic_form::draw as draw_form;
