use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{Applicability, Error, Requirement, scalar};

/// One testable rule: which elements it applies to, and what must hold for
/// them.
///
/// `min_occurs` and `max_occurs` follow the IDS cardinality convention, where
/// a `max_occurs` of `-1` means "unbounded". They are not checked here;
/// out-of-range values are rejected when the specification is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    #[serde(deserialize_with = "scalar::string")]
    name: String,
    ifc_version: IfcVersion,
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    identifier: Option<String>,
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
    instructions: Option<String>,
    #[serde(default = "default_min_occurs")]
    min_occurs: i64,
    #[serde(default = "default_max_occurs")]
    max_occurs: i64,
    applicability: Applicability,
    requirement: Requirement,
}

const fn default_min_occurs() -> i64 {
    0
}

const fn default_max_occurs() -> i64 {
    -1
}

impl Specification {
    /// Creates a specification targeting the given IFC schema version.
    ///
    /// The version is matched case-insensitively, so `ifc4` is stored as
    /// [`IfcVersion::Ifc4`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownIfcVersion`] if the version is not one of
    /// `IFC2X3`, `IFC4` or `IFC4X3`.
    pub fn new(
        name: impl Into<String>,
        ifc_version: &str,
        applicability: Applicability,
        requirement: Requirement,
    ) -> Result<Self, Error> {
        Ok(Self {
            name: name.into(),
            ifc_version: ifc_version.parse()?,
            identifier: None,
            description: None,
            instructions: None,
            min_occurs: default_min_occurs(),
            max_occurs: default_max_occurs(),
            applicability,
            requirement,
        })
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Sets the minimum number of applicable elements.
    #[must_use]
    pub const fn with_min_occurs(mut self, min_occurs: i64) -> Self {
        self.min_occurs = min_occurs;
        self
    }

    /// Sets the maximum number of applicable elements (`-1` for unbounded).
    #[must_use]
    pub const fn with_max_occurs(mut self, max_occurs: i64) -> Self {
        self.max_occurs = max_occurs;
        self
    }

    /// The name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The targeted IFC schema version.
    #[must_use]
    pub const fn ifc_version(&self) -> IfcVersion {
        self.ifc_version
    }

    /// The identifier, if any.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// The description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The instructions, if any.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    /// The minimum number of applicable elements.
    #[must_use]
    pub const fn min_occurs(&self) -> i64 {
        self.min_occurs
    }

    /// The maximum number of applicable elements, or `-1` if unbounded.
    #[must_use]
    pub const fn max_occurs(&self) -> i64 {
        self.max_occurs
    }

    /// The applicability clause.
    #[must_use]
    pub const fn applicability(&self) -> &Applicability {
        &self.applicability
    }

    /// The requirement clause.
    #[must_use]
    pub const fn requirement(&self) -> &Requirement {
        &self.requirement
    }
}

/// The IFC schema versions a specification can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IfcVersion {
    /// `IFC2X3`
    Ifc2x3,
    /// `IFC4`
    Ifc4,
    /// `IFC4X3`
    Ifc4x3,
}

impl IfcVersion {
    /// Every supported version.
    pub const ALL: [Self; 3] = [Self::Ifc2x3, Self::Ifc4, Self::Ifc4x3];

    /// The upper-case schema identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ifc2x3 => "IFC2X3",
            Self::Ifc4 => "IFC4",
            Self::Ifc4x3 => "IFC4X3",
        }
    }
}

impl fmt::Display for IfcVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IfcVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let version = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == version)
            .ok_or(Error::UnknownIfcVersion(version))
    }
}

impl TryFrom<String> for IfcVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IfcVersion> for String {
    fn from(version: IfcVersion) -> Self {
        version.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn specification(ifc_version: &str) -> Result<Specification, Error> {
        Specification::new(
            "Walls",
            ifc_version,
            Applicability::default(),
            Requirement::default(),
        )
    }

    #[test_case("ifc4", IfcVersion::Ifc4; "lower case")]
    #[test_case("IFC4", IfcVersion::Ifc4; "upper case")]
    #[test_case("Ifc2x3", IfcVersion::Ifc2x3; "mixed case 2x3")]
    #[test_case("ifc4X3", IfcVersion::Ifc4x3; "mixed case 4x3")]
    fn version_is_normalized(input: &str, expected: IfcVersion) {
        let specification = specification(input).unwrap();
        assert_eq!(specification.ifc_version(), expected);
        assert_eq!(specification.ifc_version().to_string(), input.to_uppercase());
    }

    #[test_case("IFC5"; "future version")]
    #[test_case("IFC4X3_ADD2"; "addendum")]
    #[test_case(""; "empty")]
    #[test_case(" IFC4"; "leading whitespace")]
    fn unknown_version_fails(input: &str) {
        assert_eq!(
            specification(input),
            Err(Error::UnknownIfcVersion(input.to_uppercase()))
        );
    }

    #[test]
    fn defaults() {
        let specification = specification("IFC4").unwrap();
        assert_eq!(specification.min_occurs(), 0);
        assert_eq!(specification.max_occurs(), -1);
        assert!(specification.identifier().is_none());
        assert!(specification.description().is_none());
        assert!(specification.instructions().is_none());
    }

    #[test]
    fn occurs_are_not_validated_at_construction() {
        let specification = specification("IFC4")
            .unwrap()
            .with_min_occurs(7)
            .with_max_occurs(-3);
        assert_eq!(specification.min_occurs(), 7);
        assert_eq!(specification.max_occurs(), -3);
    }

    #[test]
    fn numeric_identifier_is_read_as_text() {
        let yaml = "
name: 101
ifc_version: IFC4
identifier: 7
description: 1.5
applicability:
  facets: []
requirement:
  facets: []
";
        let specification: Specification = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(specification.name(), "101");
        assert_eq!(specification.identifier(), Some("7"));
        assert_eq!(specification.description(), Some("1.5"));
        assert!(specification.instructions().is_none());
    }
}
