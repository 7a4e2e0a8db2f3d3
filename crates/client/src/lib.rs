pub mod api;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod content;
mod error;
pub use error::*;
pub mod guidance;
pub mod history;
pub mod session;
pub mod stats;
pub mod store;
pub mod submit;
pub mod workout;

#[cfg(test)]
mod test_utils;
