#![allow(non_snake_case)]

pub mod config;
pub mod error;
pub mod session;

// Browser transport; everything above compiles and tests on the host.
#[cfg(target_arch = "wasm32")]
mod client;
#[cfg(target_arch = "wasm32")]
pub mod auth;

pub use config::ApiConfig;
pub use error::ApiError;
pub use session::SessionCredentials;
