//! Command resolution and process replacement.

mod exec_launcher;
mod resolve;

pub use exec_launcher::ExecLauncher;
pub use resolve::resolve_executable;
