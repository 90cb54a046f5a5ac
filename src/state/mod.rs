//! Application state module

mod field;
mod form_state;
mod upload;
mod view_state;

pub use field::*;
pub use form_state::*;
pub use upload::*;
pub use view_state::*;
