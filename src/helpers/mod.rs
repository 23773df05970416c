//! Helper functions for dates and links used while rendering

mod date;
mod url;

pub use date::*;
pub use url::*;
