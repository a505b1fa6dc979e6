pub mod prepare_env;
mod recording_mailer;

pub use recording_mailer::RecordingMailer;
