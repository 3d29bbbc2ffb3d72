//! This bench test renders a large IDS document with many specifications,
//! each with a mixed applicability and requirement.

#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use ids_builder::{
    Applicability, AttributeFacet, ClassificationFacet, EntityFacet, Facet, IdsWriter,
    InformationDeliverySpecification, MaterialFacet, PartsFacet, PropertyFacet,
    Requirement, Specification,
};

fn large_document() -> InformationDeliverySpecification {
    let specifications = (1..=500).map(|i| {
        let applicability = Applicability::new(vec![
            Facet::from(PropertyFacet::new("Pset_WallCommon", "IsExternal", "IFCBOOLEAN")),
            Facet::from(ClassificationFacet::new().with_value(format!("EF_25_{i}"))),
            Facet::from(EntityFacet::new("IfcWall")),
        ])
        .unwrap();
        let requirement = Requirement::new(vec![
            Facet::from(AttributeFacet::new("Name").with_value(format!("Wall {i}"))),
            Facet::from(MaterialFacet::new().with_value("Concrete")),
            Facet::from(
                PartsFacet::new("IfcBuildingStorey", Some("IfcRelContainedInSpatialStructure"))
                    .unwrap(),
            ),
        ])
        .unwrap();
        Specification::new(format!("Spec {i}"), "IFC4", applicability, requirement).unwrap()
    });

    InformationDeliverySpecification::new("Bench").with_specifications(specifications)
}

fn serialize_many(c: &mut Criterion) {
    let ids = large_document();
    let writer = IdsWriter::default();
    c.bench_function("serialize many", |b| {
        b.iter(|| writer.to_bytes(&ids).unwrap());
    });
}

criterion_group!(benches, serialize_many);
criterion_main!(benches);
