use std::{collections::HashSet, ops::Deref};

use serde::{Deserialize, Serialize};

use super::{Error, Facet, FacetKind};

/// An ordered sequence of facets forming one clause of a specification.
///
/// A part contains at most one entity facet and at most one material facet.
/// Other facet kinds may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Facet>", into = "Vec<Facet>")]
pub struct SpecificationPart {
    facets: Vec<Facet>,
}

impl SpecificationPart {
    /// Creates a part from the given facets, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateFacet`] on the second entity or material
    /// facet.
    pub fn new(facets: Vec<Facet>) -> Result<Self, Error> {
        let mut seen = HashSet::new();
        for kind in facets
            .iter()
            .map(Facet::kind)
            .filter(|kind| !kind.is_repeatable())
        {
            if !seen.insert(kind) {
                return Err(Error::DuplicateFacet(kind));
            }
        }
        Ok(Self { facets })
    }

    /// The facets, in the order they were given.
    #[must_use]
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// The facets of one kind, in the order they were given.
    ///
    /// Facets of other kinds are skipped. Rendering an applicability calls
    /// this once per kind, which groups the facets by kind while keeping
    /// the relative order within each kind.
    ///
    /// ```
    /// use ids_builder::{AttributeFacet, EntityFacet, Facet, FacetKind, SpecificationPart};
    ///
    /// let part = SpecificationPart::new(vec![
    ///     Facet::from(AttributeFacet::new("Name")),
    ///     Facet::from(EntityFacet::new("IfcWall")),
    ///     Facet::from(AttributeFacet::new("Tag")),
    /// ])?;
    ///
    /// let names: Vec<_> = part
    ///     .facets_of_kind(FacetKind::Attribute)
    ///     .filter_map(|facet| match facet {
    ///         Facet::Attribute(attribute) => Some(attribute.name()),
    ///         _ => None,
    ///     })
    ///     .collect();
    /// assert_eq!(names, ["Name", "Tag"]);
    /// # Ok::<(), ids_builder::Error>(())
    /// ```
    pub fn facets_of_kind(&self, kind: FacetKind) -> impl Iterator<Item = &Facet> {
        self.facets.iter().filter(move |facet| facet.kind() == kind)
    }
}

impl TryFrom<Vec<Facet>> for SpecificationPart {
    type Error = Error;

    fn try_from(facets: Vec<Facet>) -> Result<Self, Self::Error> {
        Self::new(facets)
    }
}

impl From<SpecificationPart> for Vec<Facet> {
    fn from(part: SpecificationPart) -> Self {
        part.facets
    }
}

/// The clause selecting which elements a specification applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicability {
    facets: SpecificationPart,
}

impl Applicability {
    /// Creates an applicability clause.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateFacet`] if the facets break the cardinality
    /// rules of a [`SpecificationPart`].
    pub fn new(facets: Vec<Facet>) -> Result<Self, Error> {
        SpecificationPart::new(facets).map(Self::from)
    }
}

impl From<SpecificationPart> for Applicability {
    fn from(facets: SpecificationPart) -> Self {
        Self { facets }
    }
}

impl Deref for Applicability {
    type Target = SpecificationPart;

    fn deref(&self) -> &Self::Target {
        &self.facets
    }
}

/// The clause stating what must hold for the applicable elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    facets: SpecificationPart,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Requirement {
    /// Creates a requirement clause.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateFacet`] if the facets break the cardinality
    /// rules of a [`SpecificationPart`].
    pub fn new(facets: Vec<Facet>) -> Result<Self, Error> {
        SpecificationPart::new(facets).map(Self::from)
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl From<SpecificationPart> for Requirement {
    fn from(facets: SpecificationPart) -> Self {
        Self {
            facets,
            description: None,
        }
    }
}

impl Deref for Requirement {
    type Target = SpecificationPart;

    fn deref(&self) -> &Self::Target {
        &self.facets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AttributeFacet, ClassificationFacet, EntityFacet, MaterialFacet, PartsFacet, PropertyFacet,
    };

    fn entity() -> Facet {
        EntityFacet::new("IfcWall").into()
    }

    fn material() -> Facet {
        MaterialFacet::new().with_value("Concrete").into()
    }

    #[test]
    fn two_entity_facets_fail() {
        let result = SpecificationPart::new(vec![entity(), entity()]);
        assert_eq!(result, Err(Error::DuplicateFacet(FacetKind::Entity)));
    }

    #[test]
    fn two_material_facets_fail() {
        let result = Requirement::new(vec![material(), entity(), material()]);
        assert_eq!(result, Err(Error::DuplicateFacet(FacetKind::Material)));
    }

    #[test]
    fn one_of_each_unique_kind_with_repeats_succeeds() {
        let facets: Vec<Facet> = vec![
            AttributeFacet::new("Name").into(),
            entity(),
            PropertyFacet::new("Pset_WallCommon", "IsExternal", "IFCBOOLEAN").into(),
            AttributeFacet::new("Description").into(),
            material(),
            ClassificationFacet::new().into(),
            ClassificationFacet::new().with_system("Uniclass").into(),
            PartsFacet::new("IfcBuildingStorey", None).unwrap().into(),
            PartsFacet::new("IfcSpace", Some("IfcRelNests")).unwrap().into(),
        ];

        let part = SpecificationPart::new(facets.clone()).unwrap();
        assert_eq!(part.facets(), facets.as_slice());
    }

    #[test]
    fn empty_part_is_valid() {
        let applicability = Applicability::new(Vec::new()).unwrap();
        assert!(applicability.facets().is_empty());
    }

    #[test]
    fn facets_of_kind_preserves_relative_order() {
        let first = AttributeFacet::new("Name");
        let second = AttributeFacet::new("Tag");
        let part = SpecificationPart::new(vec![
            first.clone().into(),
            entity(),
            second.clone().into(),
        ])
        .unwrap();

        let attributes: Vec<_> = part.facets_of_kind(FacetKind::Attribute).collect();
        assert_eq!(attributes, vec![&Facet::from(first), &Facet::from(second)]);
    }

    #[test]
    fn facets_of_absent_kind_is_empty() {
        let part = SpecificationPart::new(vec![entity(), material()]).unwrap();
        assert_eq!(part.facets_of_kind(FacetKind::Property).count(), 0);
        assert_eq!(part.facets_of_kind(FacetKind::Material).count(), 1);
    }

    #[test]
    fn requirement_description() {
        let requirement = Requirement::new(vec![entity()])
            .unwrap()
            .with_description("Walls must be classified");
        assert_eq!(requirement.description(), Some("Walls must be classified"));
        assert_eq!(requirement.facets().len(), 1);
    }
}
