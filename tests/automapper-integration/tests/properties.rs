//! 映射推断与配置合并的性质测试


use automapper::{
    AutomapperConfig, MappingBehaviors, Marker, TypeDescriptor, TypeKey, TypeMapping,
};
use automapper_impl::{ConfigRegistrationNameFactory, RegistrationNameFactory, TypeMappingFactory};
use common::*;
use proptest::prelude::*;

fn create_mappings(types: &[TypeDescriptor], behaviors: MappingBehaviors) -> Vec<TypeMapping> {
    let config = AutomapperConfig::from_types(types);
    TypeMappingFactory::new().create_mappings(types, behaviors, &config)
}

fn names(
    types: &[TypeDescriptor],
    behaviors: MappingBehaviors,
) -> Vec<(TypeMapping, Option<String>)> {
    let config = AutomapperConfig::from_types(types);
    let mappings = TypeMappingFactory::new().create_mappings(types, behaviors, &config);
    let factory = ConfigRegistrationNameFactory::new(&config, behaviors, &mappings);
    mappings
        .iter()
        .map(|mapping| (mapping.clone(), factory.registration_name(mapping)))
        .collect()
}

#[test]
fn test_every_implemented_interface_gets_exactly_one_binding() {
    init_test_logger();
    let mappings = create_mappings(&all_fixtures(), MappingBehaviors::empty());

    for (from, to) in [
        (I_INTERFACE, INTERFACE_IMPLEMENTATION),
        (I_INTERFACE, COMPOUND_IMPLEMENTATION),
        (I_OTHER, OTHER_IMPLEMENTATION),
        (I_OTHER, COMPOUND_IMPLEMENTATION),
        (I_GENERIC_INTERFACE, OPEN_GENERIC_CONCRETE),
    ] {
        let expected = TypeMapping::new(key(from), key(to));
        assert_eq!(
            mappings.iter().filter(|mapping| **mapping == expected).count(),
            1,
            "{expected}"
        );
    }
    assert_eq!(mappings.len(), 6);
}

#[test]
fn test_excluded_interface_or_concrete_never_appears() {
    init_test_logger();
    let mut types = all_fixtures();
    types[1] = interface(I_OTHER).with_marker(Marker::DoNotMap);
    types[3] = concrete(INTERFACE_IMPLEMENTATION, &[I_INTERFACE]).with_marker(Marker::DoNotMap);

    let mappings = create_mappings(&types, MappingBehaviors::empty());

    assert!(mappings.iter().all(|mapping| {
        mapping.from != key(I_OTHER) && mapping.to != key(INTERFACE_IMPLEMENTATION)
    }));
    assert!(mappings.contains(&TypeMapping::new(
        key(I_INTERFACE),
        key(COMPOUND_IMPLEMENTATION)
    )));
}

#[test]
fn test_multimap_by_default_names_only_plural_groups() {
    init_test_logger();
    let mut types = two_implementations();
    types.push(interface(I_OTHER));
    types.push(concrete(OTHER_IMPLEMENTATION, &[I_OTHER]));

    for (mapping, name) in names(&types, MappingBehaviors::MULTIMAP_BY_DEFAULT) {
        if mapping.from == key(I_INTERFACE) {
            assert_eq!(name, Some(mapping.to.to_string()));
        } else {
            assert_eq!(name, None, "{mapping}");
        }
    }
}

#[test]
fn test_explicit_name_is_stable() {
    init_test_logger();
    let single = vec![
        interface(I_INTERFACE),
        concrete(NAMED_TYPE, &[I_INTERFACE]).with_marker(Marker::MapAs("Bananas".into())),
    ];
    let mut plural = single.clone();
    plural.push(concrete(INTERFACE_IMPLEMENTATION, &[I_INTERFACE]));

    for types in [&single, &plural] {
        for behaviors in [MappingBehaviors::empty(), MappingBehaviors::MULTIMAP_BY_DEFAULT] {
            let named = names(types, behaviors)
                .into_iter()
                .find(|(mapping, _)| mapping.to == key(NAMED_TYPE))
                .and_then(|(_, name)| name);
            assert_eq!(named.as_deref(), Some("Bananas"));
        }
    }
}

#[test]
fn test_collection_bindings_are_added_once_for_plural_groups() {
    init_test_logger();
    let single = create_mappings(&single_implementation(), MappingBehaviors::COLLECTION_REGISTRATION);
    assert!(single.iter().all(|mapping| !mapping.is_collection_mapping()));

    let plural = create_mappings(&two_implementations(), MappingBehaviors::COLLECTION_REGISTRATION);
    assert_eq!(plural.len(), 3);
    assert_eq!(
        plural
            .iter()
            .filter(|mapping| mapping.is_collection_mapping())
            .collect::<Vec<_>>(),
        vec![&TypeMapping::collection_for(&key(I_INTERFACE))]
    );

    let mut explicit = single_implementation();
    explicit[0] = interface(I_INTERFACE).with_marker(Marker::Multimap);
    let explicit = create_mappings(&explicit, MappingBehaviors::COLLECTION_REGISTRATION);
    assert_eq!(explicit.len(), 2);
    assert!(explicit[1].is_collection_mapping());
}

const UNIVERSE: [&str; 6] = [
    "p::IAlpha",
    "p::IBeta",
    "p::IGamma<_>",
    "p::Alpha",
    "p::Beta",
    "p::Gamma<_>",
];

fn build_config(directives: &[(usize, u8)]) -> AutomapperConfig {
    directives
        .iter()
        .fold(AutomapperConfig::new(), |config, &(index, kind)| {
            let target: TypeKey = key(UNIVERSE[index]);
            match kind {
                0 => config.and_do_not_map_for([target]),
                1 => config.and_use_multimapping_for([target]),
                2 => {
                    let name = target.short_name().to_string();
                    config.and_use_named_mapping_for(target, name)
                }
                _ => config.and_map_as_singleton([target]),
            }
        })
}

fn directives() -> impl Strategy<Value = Vec<(usize, u8)>> {
    proptest::collection::vec((0..UNIVERSE.len(), 0u8..4), 0..12)
}

proptest! {
    #[test]
    fn merge_order_does_not_change_queries(left in directives(), right in directives()) {
        let forward = build_config(&left).merge_with(build_config(&right));
        let reverse = build_config(&right).merge_with(build_config(&left));

        prop_assert!(forward.validate().is_ok());
        prop_assert!(reverse.validate().is_ok());
        for path in UNIVERSE {
            let target = key(path);
            prop_assert_eq!(forward.is_mappable(&target), reverse.is_mappable(&target));
            prop_assert_eq!(forward.is_multimap(&target), reverse.is_multimap(&target));
            prop_assert_eq!(forward.is_named_mapping(&target), reverse.is_named_mapping(&target));
            prop_assert_eq!(forward.is_singleton(&target), reverse.is_singleton(&target));
            prop_assert_eq!(forward.explicit_name_for(&target), reverse.explicit_name_for(&target));
        }
    }
}
