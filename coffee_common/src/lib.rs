mod helpers;
mod secret;

pub use helpers::{non_blank, parse_boolean_flag, parse_duration_secs};
pub use secret::Secret;
