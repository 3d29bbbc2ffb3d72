use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{Error, scalar};

/// A single testable clause of an applicability or requirement.
///
/// The set of facets is closed. Each variant wraps the facet type of the
/// same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "facet", rename_all = "snake_case")]
pub enum Facet {
    /// Matches elements by IFC class and predefined type.
    Entity(EntityFacet),
    /// Matches elements by a direct IFC attribute.
    Attribute(AttributeFacet),
    /// Matches elements by classification reference.
    Classification(ClassificationFacet),
    /// Matches elements by a property within a property set.
    Property(PropertyFacet),
    /// Matches elements by assigned material.
    Material(MaterialFacet),
    /// Matches elements by their relationship to another entity.
    Parts(PartsFacet),
}

impl Facet {
    /// The kind of this facet.
    #[must_use]
    pub const fn kind(&self) -> FacetKind {
        match self {
            Self::Entity(_) => FacetKind::Entity,
            Self::Attribute(_) => FacetKind::Attribute,
            Self::Classification(_) => FacetKind::Classification,
            Self::Property(_) => FacetKind::Property,
            Self::Material(_) => FacetKind::Material,
            Self::Parts(_) => FacetKind::Parts,
        }
    }

    /// Free-text guidance for the author of the model data, if any.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        match self {
            Self::Entity(facet) => facet.instructions(),
            Self::Attribute(facet) => facet.instructions(),
            Self::Classification(facet) => facet.instructions(),
            Self::Property(facet) => facet.instructions(),
            Self::Material(facet) => facet.instructions(),
            Self::Parts(facet) => facet.instructions(),
        }
    }
}

/// The kind of a [`Facet`], without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    /// See [`EntityFacet`].
    Entity,
    /// See [`AttributeFacet`].
    Attribute,
    /// See [`ClassificationFacet`].
    Classification,
    /// See [`PropertyFacet`].
    Property,
    /// See [`MaterialFacet`].
    Material,
    /// See [`PartsFacet`].
    Parts,
}

impl FacetKind {
    /// Whether a single clause may contain more than one facet of this kind.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        !matches!(self, Self::Entity | Self::Material)
    }
}

impl fmt::Display for FacetKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Entity => "entity",
            Self::Attribute => "attribute",
            Self::Classification => "classification",
            Self::Property => "property",
            Self::Material => "material",
            Self::Parts => "parts",
        };
        f.write_str(name)
    }
}

/// Selects elements by IFC class, optionally narrowed by predefined type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityFacet {
    ifc_class: String,
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    predefined_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instructions: Option<String>,
}

impl EntityFacet {
    /// Creates an entity facet for the given IFC class (e.g. `IfcWall`).
    #[must_use]
    pub fn new(ifc_class: impl Into<String>) -> Self {
        Self {
            ifc_class: ifc_class.into(),
            predefined_type: None,
            instructions: None,
        }
    }

    /// Sets the predefined type.
    #[must_use]
    pub fn with_predefined_type(mut self, predefined_type: impl fmt::Display) -> Self {
        self.predefined_type = Some(predefined_type.to_string());
        self
    }

    /// Sets the instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// The IFC class, as given.
    #[must_use]
    pub fn ifc_class(&self) -> &str {
        &self.ifc_class
    }

    /// The predefined type, if any.
    #[must_use]
    pub fn predefined_type(&self) -> Option<&str> {
        self.predefined_type.as_deref()
    }

    /// The instructions, if any.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }
}

/// Selects elements by the value of a direct IFC attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeFacet {
    name: String,
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instructions: Option<String>,
}

impl AttributeFacet {
    /// Creates an attribute facet for the named attribute.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            instructions: None,
        }
    }

    /// Sets the required value. Any displayable value is stored as text.
    #[must_use]
    pub fn with_value(mut self, value: impl fmt::Display) -> Self {
        self.value = Some(value.to_string());
        self
    }

    /// Sets the instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// The attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The required value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The instructions, if any.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }
}

/// Selects elements by classification system and/or reference value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationFacet {
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    system: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instructions: Option<String>,
}

impl ClassificationFacet {
    /// Creates a classification facet that matches any classification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the classification system (e.g. `Uniclass 2015`).
    #[must_use]
    pub fn with_system(mut self, system: impl fmt::Display) -> Self {
        self.system = Some(system.to_string());
        self
    }

    /// Sets the classification reference value.
    #[must_use]
    pub fn with_value(mut self, value: impl fmt::Display) -> Self {
        self.value = Some(value.to_string());
        self
    }

    /// Sets the instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// The classification system, if any.
    #[must_use]
    pub fn system(&self) -> Option<&str> {
        self.system.as_deref()
    }

    /// The classification reference value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The instructions, if any.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }
}

/// Selects elements by a property within a named property set.
///
/// The datatype (e.g. `IFCLABEL`) is passed through unchecked; matching it
/// to the value is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFacet {
    property_set: String,
    property_name: String,
    datatype: String,
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instructions: Option<String>,
}

impl PropertyFacet {
    /// Creates a property facet.
    #[must_use]
    pub fn new(
        property_set: impl Into<String>,
        property_name: impl Into<String>,
        datatype: impl Into<String>,
    ) -> Self {
        Self {
            property_set: property_set.into(),
            property_name: property_name.into(),
            datatype: datatype.into(),
            value: None,
            instructions: None,
        }
    }

    /// Sets the required value. Any displayable value is stored as text.
    #[must_use]
    pub fn with_value(mut self, value: impl fmt::Display) -> Self {
        self.value = Some(value.to_string());
        self
    }

    /// Sets the instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// The property set name (e.g. `Pset_WallCommon`).
    #[must_use]
    pub fn property_set(&self) -> &str {
        &self.property_set
    }

    /// The property name (e.g. `IsExternal`).
    #[must_use]
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// The IFC datatype of the property value.
    #[must_use]
    pub fn datatype(&self) -> &str {
        &self.datatype
    }

    /// The required value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The instructions, if any.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }
}

/// Selects elements by assigned material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialFacet {
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instructions: Option<String>,
}

impl MaterialFacet {
    /// Creates a material facet that matches any material.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the required material name or category.
    #[must_use]
    pub fn with_value(mut self, value: impl fmt::Display) -> Self {
        self.value = Some(value.to_string());
        self
    }

    /// Sets the instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// The required material, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The instructions, if any.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }
}

/// Selects elements that are part of another entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartsFacet {
    entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    relationship: Option<PartOfRelation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instructions: Option<String>,
}

impl PartsFacet {
    /// Creates a parts facet for the containing entity.
    ///
    /// The relationship is matched case-insensitively against the supported
    /// IFC relations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRelation`] if the relationship is not one of
    /// the supported relations.
    pub fn new(entity: impl Into<String>, relationship: Option<&str>) -> Result<Self, Error> {
        let relationship = relationship
            .map(str::parse::<PartOfRelation>)
            .transpose()?;
        Ok(Self {
            entity: entity.into(),
            relationship,
            instructions: None,
        })
    }

    /// Sets the instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// The containing entity.
    #[must_use]
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// The relationship to the containing entity, if constrained.
    #[must_use]
    pub const fn relationship(&self) -> Option<PartOfRelation> {
        self.relationship
    }

    /// The instructions, if any.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }
}

/// The IFC relationships a [`PartsFacet`] may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PartOfRelation {
    /// `IFCRELAGGREGATES`
    Aggregates,
    /// `IFCRELASSIGNSTOGROUP`
    AssignsToGroup,
    /// `IFCRELCONTAINEDINSPATIALSTRUCTURE`
    ContainedInSpatialStructure,
    /// `IFCRELNESTS`
    Nests,
    /// `IFCRELVOIDSELEMENT`
    VoidsElement,
    /// `IFCRELFILLSELEMENT`
    FillsElement,
}

impl PartOfRelation {
    /// Every supported relation.
    pub const ALL: [Self; 6] = [
        Self::Aggregates,
        Self::AssignsToGroup,
        Self::ContainedInSpatialStructure,
        Self::Nests,
        Self::VoidsElement,
        Self::FillsElement,
    ];

    /// The upper-case IFC entity name of the relation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aggregates => "IFCRELAGGREGATES",
            Self::AssignsToGroup => "IFCRELASSIGNSTOGROUP",
            Self::ContainedInSpatialStructure => "IFCRELCONTAINEDINSPATIALSTRUCTURE",
            Self::Nests => "IFCRELNESTS",
            Self::VoidsElement => "IFCRELVOIDSELEMENT",
            Self::FillsElement => "IFCRELFILLSELEMENT",
        }
    }
}

impl fmt::Display for PartOfRelation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfRelation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let relation = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == relation)
            .ok_or(Error::UnknownRelation(relation))
    }
}

impl TryFrom<String> for PartOfRelation {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PartOfRelation> for String {
    fn from(relation: PartOfRelation) -> Self {
        relation.as_str().to_string()
    }
}

macro_rules! impl_from_facet {
    ($($variant:ident($facet:ty)),* $(,)?) => {
        $(
            impl From<$facet> for Facet {
                fn from(facet: $facet) -> Self {
                    Self::$variant(facet)
                }
            }
        )*
    };
}

impl_from_facet!(
    Entity(EntityFacet),
    Attribute(AttributeFacet),
    Classification(ClassificationFacet),
    Property(PropertyFacet),
    Material(MaterialFacet),
    Parts(PartsFacet),
);

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("IFCRELAGGREGATES"; "upper case")]
    #[test_case("ifcRelAggregates"; "mixed case")]
    #[test_case("ifcrelnests"; "lower case")]
    #[test_case("IfcRelContainedInSpatialStructure"; "pascal case")]
    #[test_case("IFCRELASSIGNSTOGROUP"; "assigns to group")]
    #[test_case("IfcRelVoidsElement"; "voids element")]
    #[test_case("IfcRelFillsElement"; "fills element")]
    fn parts_relation_is_normalized(input: &str) {
        let facet = PartsFacet::new("IfcWall", Some(input)).unwrap();
        let relationship = facet.relationship().unwrap();
        assert_eq!(relationship.as_str(), input.to_uppercase());
    }

    #[test_case("IFCRELFOO"; "unknown relation")]
    #[test_case(""; "empty")]
    #[test_case("IFCRELAGGREGATES "; "trailing whitespace")]
    #[test_case("IfcRelDefinesByProperties"; "real but unsupported")]
    fn parts_unknown_relation_fails(input: &str) {
        let result = PartsFacet::new("IfcWall", Some(input));
        assert_eq!(
            result.unwrap_err(),
            Error::UnknownRelation(input.to_uppercase())
        );
    }

    #[test]
    fn parts_without_relation_is_valid() {
        let facet = PartsFacet::new("IfcBuildingStorey", None).unwrap();
        assert_eq!(facet.entity(), "IfcBuildingStorey");
        assert!(facet.relationship().is_none());
    }

    #[test]
    fn every_relation_parses_from_its_name() {
        for relation in PartOfRelation::ALL {
            assert_eq!(relation.as_str().parse::<PartOfRelation>(), Ok(relation));
        }
    }

    #[test]
    fn values_are_stringified() {
        let attribute = AttributeFacet::new("IsExternal").with_value(true);
        assert_eq!(attribute.value(), Some("true"));

        let property = PropertyFacet::new("Pset_WallCommon", "FireRating", "IFCREAL").with_value(2.5);
        assert_eq!(property.value(), Some("2.5"));

        let classification = ClassificationFacet::new().with_value(21);
        assert_eq!(classification.value(), Some("21"));
        assert!(classification.system().is_none());
    }

    #[test]
    fn facet_kind_and_instructions() {
        let facet = Facet::from(MaterialFacet::new().with_instructions("Use concrete"));
        assert_eq!(facet.kind(), FacetKind::Material);
        assert_eq!(facet.instructions(), Some("Use concrete"));

        let facet = Facet::from(EntityFacet::new("IfcSlab"));
        assert_eq!(facet.kind(), FacetKind::Entity);
        assert!(facet.instructions().is_none());
    }

    #[test]
    fn only_entity_and_material_are_unique() {
        assert!(!FacetKind::Entity.is_repeatable());
        assert!(!FacetKind::Material.is_repeatable());
        assert!(FacetKind::Attribute.is_repeatable());
        assert!(FacetKind::Classification.is_repeatable());
        assert!(FacetKind::Property.is_repeatable());
        assert!(FacetKind::Parts.is_repeatable());
    }
}
