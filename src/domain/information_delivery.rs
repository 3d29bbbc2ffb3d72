use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};

use super::{Specification, scalar};

/// The top-level IDS document: descriptive metadata and an ordered list of
/// specifications.
///
/// `author` and `date` are carried by the model but are not written to IDS
/// documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InformationDeliverySpecification {
    #[serde(deserialize_with = "scalar::string")]
    title: String,
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    copyright: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    version: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    description: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    author: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    date: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    purpose: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    milestone: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    specifications: Vec<Specification>,
}

impl InformationDeliverySpecification {
    /// Creates an empty document with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            copyright: None,
            version: None,
            description: None,
            author: None,
            date: None,
            purpose: None,
            milestone: None,
            specifications: Vec::new(),
        }
    }

    /// Sets the copyright notice.
    #[must_use]
    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = Some(copyright.into());
        self
    }

    /// Sets the document version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Sets the purpose.
    #[must_use]
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Sets the project milestone.
    #[must_use]
    pub fn with_milestone(mut self, milestone: impl Into<String>) -> Self {
        self.milestone = Some(milestone.into());
        self
    }

    /// Appends a specification.
    #[must_use]
    pub fn with_specification(mut self, specification: Specification) -> Self {
        self.specifications.push(specification);
        self
    }

    /// Appends several specifications, in order.
    #[must_use]
    pub fn with_specifications(
        mut self,
        specifications: impl IntoIterator<Item = Specification>,
    ) -> Self {
        self.specifications.extend(specifications);
        self
    }

    /// The title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The copyright notice, if any.
    #[must_use]
    pub fn copyright(&self) -> Option<&str> {
        self.copyright.as_deref()
    }

    /// The document version, if any.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The author, if any.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// The date, if any.
    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// The purpose, if any.
    #[must_use]
    pub fn purpose(&self) -> Option<&str> {
        self.purpose.as_deref()
    }

    /// The project milestone, if any.
    #[must_use]
    pub fn milestone(&self) -> Option<&str> {
        self.milestone.as_deref()
    }

    /// The specifications, in order.
    #[must_use]
    pub fn specifications(&self) -> &[Specification] {
        &self.specifications
    }

    /// Parses a document from YAML authoring input.
    ///
    /// Every entity is validated as it is built, exactly as with the
    /// constructors.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or describes an invalid
    /// model.
    pub fn from_yaml(yaml: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Renders the document as YAML authoring input.
    ///
    /// # Panics
    ///
    /// Panics if YAML serialization fails, which cannot happen for this
    /// data structure.
    #[must_use]
    pub fn to_yaml(&self) -> String {
        serde_yaml::to_string(self).expect("this must never fail")
    }

    /// Loads a document from a YAML authoring file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or if its content is not
    /// a valid document.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|io_error| match io_error.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound,
            _ => LoadError::Io(io_error),
        })?;
        let ids = Self::from_yaml(&content)?;
        tracing::debug!(
            "Loaded '{}' with {} specifications from {}",
            ids.title,
            ids.specifications.len(),
            path.display()
        );
        Ok(ids)
    }
}

/// Errors that can occur when loading a document from YAML.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The authoring file was not found.
    #[error("authoring file not found")]
    NotFound,
    /// An I/O error occurred.
    #[error("failed to read authoring file")]
    Io(#[from] io::Error),
    /// The YAML was malformed, or described an invalid model.
    #[error("invalid authoring input: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
