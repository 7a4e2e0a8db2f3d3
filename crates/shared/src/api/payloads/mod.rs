mod workout;
pub use workout::*;

mod guidance;
pub use guidance::*;
