mod config;
/// Translation of the requirement model into an IDS element tree.
pub mod document;
/// A minimal ordered XML element tree.
pub mod element;
mod writer;

pub use config::Config;
pub use document::{RenderError, translate_ids};
pub use element::Element;
pub use writer::{EXTENSION, IdsWriter, SaveError, XML_DECLARATION, save_ids};
