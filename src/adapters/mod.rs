pub mod process;
pub mod template;
