//! Domain models for information delivery specifications.
//!
//! This module contains the requirement model: facets, the applicability and
//! requirement clauses built from them, specifications, and the top-level
//! document container. Every type validates its invariants when it is
//! constructed.

mod error;
pub use error::Error;

/// Facets: the individual testable clauses of a specification.
pub mod facet;
pub use facet::{
    AttributeFacet, ClassificationFacet, EntityFacet, Facet, FacetKind, MaterialFacet,
    PartOfRelation, PartsFacet, PropertyFacet,
};

mod part;
pub use part::{Applicability, Requirement, SpecificationPart};

/// Specifications and the IFC schema versions they target.
pub mod specification;
pub use specification::{IfcVersion, Specification};

mod information_delivery;
pub use information_delivery::{InformationDeliverySpecification, LoadError};

mod scalar;
