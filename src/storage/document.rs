//! The IDS document structure.
//!
//! Node names, attribute names and their order are fixed by the IDS schema.
//! Facets in an applicability are grouped by kind in schema order, whereas
//! facets in a requirement keep the order they were given in.

use tracing::instrument;

use super::Element;
use crate::domain::{
    Applicability, AttributeFacet, ClassificationFacet, EntityFacet, Facet, FacetKind,
    InformationDeliverySpecification, MaterialFacet, PartsFacet, PropertyFacet, Requirement,
    Specification,
};

/// Namespace and schema-location attributes carried by every root element.
pub const ROOT_ATTRIBUTES: [(&str, &str); 4] = [
    ("xmlns:ids", "http://standards.buildingsmart.org/IDS"),
    ("xmlns:xs", "http://www.w3.org/2001/XMLSchema"),
    ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    (
        "xsi:schemaLocation",
        "http://standards.buildingsmart.org/IDS http://standards.buildingsmart.org/IDS/0.9.6/ids.xsd",
    ),
];

/// The order in which facet kinds appear in an applicability.
pub const APPLICABILITY_ORDER: [FacetKind; 6] = [
    FacetKind::Entity,
    FacetKind::Parts,
    FacetKind::Classification,
    FacetKind::Attribute,
    FacetKind::Property,
    FacetKind::Material,
];

/// Errors raised while rendering a specification.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    /// `minOccurs` must be 0 or 1.
    #[error("Illegal minOccurs {value} for specification '{specification}'")]
    MinOccurs {
        /// Name of the offending specification.
        specification: String,
        /// The out-of-range value.
        value: i64,
    },

    /// `maxOccurs` must be 0, 1 or -1 (unbounded).
    #[error("Illegal maxOccurs {value} for specification '{specification}'")]
    MaxOccurs {
        /// Name of the offending specification.
        specification: String,
        /// The out-of-range value.
        value: i64,
    },
}

fn node(name: &str) -> Element {
    Element::new(format!("ids:{name}"))
}

/// A node wrapping a single `ids:simpleValue`.
fn value_node(name: &str, value: &str) -> Element {
    node(name).with_child(node("simpleValue").with_text(value))
}

/// Builds the complete `ids:ids` element tree for a document.
///
/// # Errors
///
/// Returns an error if any specification has an out-of-range `minOccurs` or
/// `maxOccurs`.
#[instrument(level = "debug", skip_all, fields(title = ids.title()))]
pub fn translate_ids(ids: &InformationDeliverySpecification) -> Result<Element, RenderError> {
    let mut root = node("ids");
    for (name, value) in ROOT_ATTRIBUTES {
        root.set_attribute(name, value);
    }

    root.push(translate_info(ids));

    let mut specifications = node("specifications");
    for specification in ids.specifications() {
        specifications.push(translate_specification(specification)?);
    }
    root.push(specifications);

    tracing::debug!(
        "Translated {} specifications",
        ids.specifications().len()
    );
    Ok(root)
}

fn translate_info(ids: &InformationDeliverySpecification) -> Element {
    let mut info = node("info").with_child(node("title").with_text(ids.title()));

    // author and date are not part of the info block
    let optional = [
        ("copyright", ids.copyright()),
        ("version", ids.version()),
        ("description", ids.description()),
        ("purpose", ids.purpose()),
        ("milestone", ids.milestone()),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            info.push(node(name).with_text(value));
        }
    }
    info
}

/// Builds the `ids:specification` element for one specification.
///
/// # Errors
///
/// Returns an error if `minOccurs` is not 0 or 1, or if `maxOccurs` is not 0,
/// 1 or -1.
pub fn translate_specification(specification: &Specification) -> Result<Element, RenderError> {
    tracing::trace!("Translating specification '{}'", specification.name());

    let min_occurs = match specification.min_occurs() {
        0 => "0",
        1 => "1",
        value => {
            return Err(RenderError::MinOccurs {
                specification: specification.name().to_string(),
                value,
            });
        }
    };
    let max_occurs = match specification.max_occurs() {
        0 => "0",
        1 => "1",
        -1 => "unbounded",
        value => {
            return Err(RenderError::MaxOccurs {
                specification: specification.name().to_string(),
                value,
            });
        }
    };

    let mut element = node("specification")
        .with_attribute("name", specification.name())
        .with_attribute("ifcVersion", specification.ifc_version().as_str())
        .with_attribute("minOccurs", min_occurs)
        .with_attribute("maxOccurs", max_occurs);

    if let Some(identifier) = specification.identifier() {
        element.set_attribute("identifier", identifier);
    }
    if let Some(description) = specification.description() {
        element.set_attribute("description", description);
    }
    if let Some(instructions) = specification.instructions() {
        element.set_attribute("instructions", instructions);
    }

    element.push(translate_applicability(specification.applicability()));

    let mut requirement = translate_requirement(specification.requirement());
    if let Some(description) = specification.requirement().description() {
        requirement.set_attribute("description", description);
    }
    element.push(requirement);

    Ok(element)
}

/// Builds the `ids:applicability` element.
///
/// Facets are emitted grouped by kind, in [`APPLICABILITY_ORDER`], whatever
/// order they were added in. Facets of the same kind keep their relative
/// order.
#[must_use]
pub fn translate_applicability(applicability: &Applicability) -> Element {
    let mut element = node("applicability");
    for kind in APPLICABILITY_ORDER {
        for facet in applicability.facets_of_kind(kind) {
            element.push(translate_facet(facet));
        }
    }
    element
}

/// Builds the `ids:requirements` element.
///
/// Facets are emitted in the order given, each with an `instructions`
/// attribute when the facet has instructions.
#[must_use]
pub fn translate_requirement(requirement: &Requirement) -> Element {
    let mut element = node("requirements");
    for facet in requirement.facets() {
        let mut facet_node = translate_facet(facet);
        if let Some(instructions) = facet.instructions() {
            facet_node.set_attribute("instructions", instructions);
        }
        element.push(facet_node);
    }
    element
}

/// Builds the element for a single facet.
#[must_use]
pub fn translate_facet(facet: &Facet) -> Element {
    match facet {
        Facet::Entity(facet) => translate_entity(facet),
        Facet::Attribute(facet) => translate_attribute(facet),
        Facet::Classification(facet) => translate_classification(facet),
        Facet::Property(facet) => translate_property(facet),
        Facet::Material(facet) => translate_material(facet),
        Facet::Parts(facet) => translate_parts(facet),
    }
}

fn translate_entity(facet: &EntityFacet) -> Element {
    let mut element =
        node("entity").with_child(value_node("name", &facet.ifc_class().to_uppercase()));
    if let Some(predefined_type) = facet.predefined_type() {
        element.push(value_node("predefinedType", predefined_type));
    }
    element
}

fn translate_attribute(facet: &AttributeFacet) -> Element {
    let mut element = node("attribute").with_child(value_node("name", facet.name()));
    if let Some(value) = facet.value() {
        element.push(value_node("value", value));
    }
    element
}

fn translate_classification(facet: &ClassificationFacet) -> Element {
    let mut element = node("classification");
    if let Some(value) = facet.value() {
        element.push(value_node("value", value));
    }
    if let Some(system) = facet.system() {
        element.push(value_node("system", system));
    }
    element
}

fn translate_property(facet: &PropertyFacet) -> Element {
    // propertySet holds the property name and name holds the property set
    let mut element = node("property")
        .with_attribute("datatype", facet.datatype())
        .with_child(value_node("propertySet", facet.property_name()))
        .with_child(value_node("name", facet.property_set()));
    if let Some(value) = facet.value() {
        element.push(value_node("value", value));
    }
    element
}

fn translate_material(facet: &MaterialFacet) -> Element {
    let mut element = node("material");
    if let Some(value) = facet.value() {
        element.push(value_node("value", value));
    }
    element
}

fn translate_parts(facet: &PartsFacet) -> Element {
    let mut element = node("partOf");
    if let Some(relationship) = facet.relationship() {
        element.set_attribute("relation", relationship.as_str());
    }
    element.with_child(value_node("entity", facet.entity()))
}
