use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::instrument;

use super::{Config, RenderError, document::translate_ids};
use crate::domain::InformationDeliverySpecification;

/// The declaration line at the start of every written document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// The file extension of written documents.
pub const EXTENSION: &str = "ids";

/// Writes IDS documents to disk.
#[derive(Debug, Clone, Default)]
pub struct IdsWriter {
    config: Config,
}

impl IdsWriter {
    /// Creates a writer with the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// The writer's configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Renders a document to the bytes of a complete IDS file.
    ///
    /// # Errors
    ///
    /// Returns an error if a specification cannot be rendered.
    pub fn to_bytes(&self, ids: &InformationDeliverySpecification) -> Result<Vec<u8>, RenderError> {
        let root = translate_ids(ids)?;
        let body = root.render(self.config.indent);

        let mut bytes = Vec::with_capacity(XML_DECLARATION.len() + 1 + body.len());
        bytes.extend_from_slice(XML_DECLARATION.as_bytes());
        bytes.push(b'\n');
        bytes.extend_from_slice(body.as_bytes());
        Ok(bytes)
    }

    /// Writes a document to the given path.
    ///
    /// The extension of the path is replaced with `.ids`. The file is created
    /// or truncated, but only once the whole document has been rendered.
    /// Parent directories are not created.
    ///
    /// Returns the path that was written.
    ///
    /// # Errors
    ///
    /// Returns an error if a specification cannot be rendered, or if the file
    /// cannot be written.
    #[instrument(level = "debug", skip(self, ids))]
    pub fn save(
        &self,
        path: &Path,
        ids: &InformationDeliverySpecification,
    ) -> Result<PathBuf, SaveError> {
        let path = path.with_extension(EXTENSION);
        let bytes = self.to_bytes(ids)?;

        let mut file = File::create(&path)?;
        file.write_all(&bytes)?;

        tracing::info!("Wrote IDS document '{}' to {}", ids.title(), path.display());
        Ok(path)
    }
}

/// Writes a document to the given path using the default configuration.
///
/// See [`IdsWriter::save`].
///
/// # Errors
///
/// Returns an error if a specification cannot be rendered, or if the file
/// cannot be written.
pub fn save_ids(
    path: impl AsRef<Path>,
    ids: &InformationDeliverySpecification,
) -> Result<PathBuf, SaveError> {
    IdsWriter::default().save(path.as_ref(), ids)
}

/// Errors that can occur when saving an IDS document.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The document could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// The file could not be written.
    #[error("failed to write IDS document")]
    Io(#[from] io::Error),
}
