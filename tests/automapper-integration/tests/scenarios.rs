//! 端到端注册场景


use automapper::{
    AutomapExt, AutomapperError, CollectionFacade, InstanceResolver, Lifetime, MappingBehaviors,
    TargetRegistry, TypeKey,
};
use common::*;

#[test]
fn test_single_implementation_gets_default_registration() {
    init_test_logger();
    let mut container = container_with_activators();

    let registered = container.automap_types(&single_implementation()).unwrap();

    assert_eq!(registered.len(), 1);
    assert_eq!(registered[0].registered_type, key(I_INTERFACE));
    assert_eq!(registered[0].mapped_to, key(INTERFACE_IMPLEMENTATION));
    assert_eq!(registered[0].name, None);
    assert_eq!(registered[0].lifetime, Lifetime::Transient);

    assert!(container
        .resolve_as::<InterfaceImplementation>(&key(I_INTERFACE), None)
        .is_ok());
}

#[test]
fn test_multimap_by_default_names_by_full_path() {
    init_test_logger();
    let mut container = container_with_activators();

    let registered = container
        .automap_types_with(MappingBehaviors::MULTIMAP_BY_DEFAULT, &two_implementations())
        .unwrap();

    let names: Vec<_> = registered.iter().map(|record| record.name.as_deref()).collect();
    assert_eq!(
        names,
        vec![
            Some("fixtures::InterfaceImplementation"),
            Some("fixtures::InterfaceImplementationTwo"),
        ]
    );
    assert!(registered
        .iter()
        .all(|record| record.registered_type == key(I_INTERFACE)));
}

#[test]
fn test_same_interface_across_calls_is_rejected() {
    init_test_logger();
    let mut container = container_with_activators();
    container.automap_types(&single_implementation()).unwrap();

    let second = vec![
        interface(I_INTERFACE),
        concrete(INTERFACE_IMPLEMENTATION_TWO, &[I_INTERFACE]),
    ];
    let error = container.automap_types(&second).unwrap_err();

    let message = error.to_string();
    assert!(message.contains(INTERFACE_IMPLEMENTATION));
    assert!(message.contains(INTERFACE_IMPLEMENTATION_TWO));
    assert!(message.contains(I_INTERFACE));

    let duplicate = error.as_duplicate_mapping().unwrap();
    assert_eq!(duplicate.interface(), &key(I_INTERFACE));
    assert_eq!(duplicate.mapped_concrete(), &key(INTERFACE_IMPLEMENTATION));
    assert_eq!(duplicate.duplicate_concrete(), &key(INTERFACE_IMPLEMENTATION_TWO));
    assert_eq!(duplicate.name(), None);
    assert_eq!(container.len(), 1);
}

#[test]
fn test_collection_resolves_one_instance_of_each_concrete() {
    init_test_logger();
    let mut container = container_with_activators();

    container
        .automap_types_with(
            MappingBehaviors::MULTIMAP_BY_DEFAULT | MappingBehaviors::COLLECTION_REGISTRATION,
            &two_implementations(),
        )
        .unwrap();

    let resolved = container
        .resolve_as::<CollectionFacade>(&TypeKey::collection_of(&key(I_INTERFACE)), None)
        .unwrap();
    let instances: Vec<_> = resolved.iter().unwrap().collect();

    assert_eq!(instances.len(), 2);
    assert_eq!(
        instances
            .iter()
            .filter(|instance| downcast_is::<InterfaceImplementation>(instance))
            .count(),
        1
    );
    assert_eq!(
        instances
            .iter()
            .filter(|instance| downcast_is::<InterfaceImplementationTwo>(instance))
            .count(),
        1
    );
}

#[test]
fn test_config_providers_drive_registration() {
    init_test_logger();
    let mut container = container_with_activators();

    let registered = container.automap_types(&configured_fixtures()).unwrap();

    assert!(registered
        .iter()
        .all(|record| record.registered_type != key(INTERFACE_TO_IGNORE)));

    let singleton = container
        .registration(&key(SINGLETON_INTERFACE), None)
        .unwrap();
    assert_eq!(singleton.lifetime, Lifetime::Singleton);

    let multimapped: Vec<_> = registered
        .iter()
        .filter(|record| record.registered_type == key(MULTIMAPPING_INTERFACE))
        .collect();
    assert_eq!(multimapped.len(), 2);
    assert!(multimapped.iter().all(|record| record.is_named()));

    assert!(container
        .registration(&key(I_INTERFACE), Some("Bananas"))
        .is_some());
}

#[test]
fn test_markers_match_config_providers() {
    init_test_logger();
    let mut container = container_with_activators();

    let registered = container.automap_types(&marked_fixtures()).unwrap();

    let names: Vec<_> = registered.iter().map(|record| record.name.as_deref()).collect();
    assert_eq!(
        names,
        vec![Some("Bananas"), Some("fixtures::InterfaceImplementation")]
    );
}

#[test]
fn test_generic_forms_resolve_independently() {
    init_test_logger();
    let mut container = container_with_activators();

    let error = container.automap_types(&all_fixtures()).unwrap_err();

    // IInterface 有两个实现且未启用多重映射
    assert!(matches!(error, AutomapperError::DuplicateMapping { .. }));

    let mut container = container_with_activators();
    let registered = container
        .automap_types_with(MappingBehaviors::MULTIMAP_BY_DEFAULT, &all_fixtures())
        .unwrap();

    assert!(registered.iter().any(|record| {
        record.registered_type == key(I_GENERIC_INTERFACE)
            && record.mapped_to == key(OPEN_GENERIC_CONCRETE)
            && record.name.is_none()
    }));
    assert!(registered.iter().any(|record| {
        record.registered_type == key("fixtures::IGenericInterface<String, bool>")
            && record.mapped_to == key(CLOSED_GENERIC_CONCRETE)
    }));
    assert_eq!(container.registrations_for(&key(I_OTHER)).len(), 2);
}
