mod process_launcher;

pub use process_launcher::ProcessLauncher;
