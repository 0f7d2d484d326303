mod recording_launcher;

pub use recording_launcher::RecordingLauncher;
