pub mod cli;
pub mod content;
pub mod guidance;
pub mod routes;

mod state;
pub use state::*;

pub use routes::app;
