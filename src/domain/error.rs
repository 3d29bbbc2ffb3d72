use super::FacetKind;

/// Errors raised while constructing the requirement model.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The part-of relationship is not one of the supported IFC relations.
    #[error("Illegal relation '{0}'")]
    UnknownRelation(String),

    /// The IFC schema version is not one of IFC2X3, IFC4 or IFC4X3.
    #[error("Illegal IFC version '{0}'")]
    UnknownIfcVersion(String),

    /// A facet kind that may appear at most once in a clause appeared again.
    #[error("Only 1 {0} facet allowed per clause")]
    DuplicateFacet(FacetKind),
}
