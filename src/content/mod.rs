//! Content module - event files and front-matter processing

mod error;
mod event;
mod frontmatter;
pub mod loader;

pub use error::{FrontMatterError, LoadError};
pub use event::{slug_from_filename, EventRecord};
pub use frontmatter::FrontMatter;
pub(crate) use frontmatter::optional_scalar;
pub use loader::{list_events, sort_events, EventLoader};
