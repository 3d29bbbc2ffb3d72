//! Information Delivery Specification (IDS) authoring
//!
//! Requirements on building-model data are described in memory and written
//! out as IDS XML documents.
//!
//! ```no_run
//! use ids_builder::{
//!     Applicability, EntityFacet, Facet, InformationDeliverySpecification, PropertyFacet,
//!     Requirement, Specification,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let applicability = Applicability::new(vec![Facet::from(EntityFacet::new("IfcWall"))])?;
//! let requirement = Requirement::new(vec![Facet::from(
//!     PropertyFacet::new("Pset_WallCommon", "IsExternal", "IFCBOOLEAN").with_value(true),
//! )])?;
//! let specification = Specification::new("Walls", "ifc4", applicability, requirement)?;
//!
//! let ids = InformationDeliverySpecification::new("Example").with_specification(specification);
//! ids_builder::save_ids("walls", &ids)?;
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub use domain::{
    Applicability, AttributeFacet, ClassificationFacet, EntityFacet, Error, Facet, FacetKind,
    IfcVersion, InformationDeliverySpecification, LoadError, MaterialFacet, PartOfRelation,
    PartsFacet, PropertyFacet, Requirement, Specification, SpecificationPart,
};

/// Rendering of the requirement model into IDS documents, and persistence.
pub mod storage;
pub use storage::{Config, Element, IdsWriter, RenderError, SaveError, save_ids};
