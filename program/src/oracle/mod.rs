//! Oracle feed module - draw result submission

mod submit_result;
mod submit_result_explicit;

pub use submit_result::*;
pub use submit_result_explicit::*;
