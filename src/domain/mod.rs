pub mod environ;
pub mod error;
pub mod file_spec;
pub mod run_config;
pub mod vars;

pub use environ::Environ;
pub use error::AppError;
pub use file_spec::{FileSpec, FileTargets, TEMPLATE_SEPARATOR, TEMPLATE_SUFFIX};
pub use run_config::{Invocation, RunConfig};
pub use vars::Vars;
