mod save;
pub use save::*;

mod delete;
pub use delete::*;
