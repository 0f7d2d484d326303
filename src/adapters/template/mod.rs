//! Template compilation and rendering backed by minijinja.

mod engine;
mod helpers;

pub use engine::{build_template_environment, render_to};
pub use helpers::Helpers;
