//! Value types shared by the payment request model.

mod amount;
mod error_code;
mod status;

pub use amount::*;
pub use error_code::*;
pub use status::*;
