mod draft;
mod note;

pub use draft::*;
pub use note::*;
