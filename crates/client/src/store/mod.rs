mod draft;
pub use draft::*;

mod preference;
pub use preference::*;
