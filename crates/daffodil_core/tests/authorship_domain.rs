use daffodil_core::{AuthorshipDomain, Features, Interactions, Operations, Presentations};
use std::any::{Any, TypeId};
use std::collections::HashSet;

#[test]
fn domain_exposes_all_aggregate_roots() {
    let domain = AuthorshipDomain::new();

    assert_eq!(*domain.operations(), Operations);
    assert_eq!(*domain.presentations(), Presentations);
    assert_eq!(*domain.features(), Features);
    assert_eq!(*domain.interactions(), Interactions);
}

#[test]
fn aggregate_roots_are_distinct_types() {
    let domain = AuthorshipDomain::default();
    let roots: [&dyn Any; 4] = [
        domain.operations(),
        domain.presentations(),
        domain.features(),
        domain.interactions(),
    ];

    let ids: HashSet<TypeId> = roots.into_iter().map(|root| (*root).type_id()).collect();
    assert_eq!(ids.len(), 4);
    assert!(ids.contains(&TypeId::of::<Operations>()));
    assert!(ids.contains(&TypeId::of::<Interactions>()));
}

#[test]
fn aggregate_roots_are_default_constructible() {
    assert_eq!(Operations::default(), Operations);
    assert_eq!(Presentations::default(), Presentations);
    assert_eq!(Features::default(), Features);
    assert_eq!(Interactions::default(), Interactions);
}
