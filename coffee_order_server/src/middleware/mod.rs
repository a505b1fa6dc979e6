mod cors;

pub use cors::{CorsMiddlewareFactory, CorsMiddlewareService};
