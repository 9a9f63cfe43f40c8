//! 类型单元加载与拦截启用


use automapper::{
    AutomapExt, AutomapperBuilder, AutomapperError, InMemoryContainer, InMemoryUnitCatalog,
    InjectionMember, Marker, MappingBehaviors, RegistrationRecord, RegistryError,
    TargetRegistry, TypeUnitLoader,
};
use common::*;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// 统计拦截启用次数的注册表
#[derive(Debug, Default)]
struct CountingRegistry {
    inner: InMemoryContainer,
    interception_calls: usize,
}

impl TargetRegistry for CountingRegistry {
    fn register_binding(&mut self, record: RegistrationRecord) -> Result<(), RegistryError> {
        self.inner.register_binding(record)
    }

    fn registrations(&self) -> Vec<RegistrationRecord> {
        self.inner.registrations()
    }

    fn enable_interception(&mut self) {
        self.interception_calls += 1;
        self.inner.enable_interception();
    }

    fn is_interception_enabled(&self) -> bool {
        self.inner.is_interception_enabled()
    }
}

#[test]
fn test_interception_is_enabled_once() {
    init_test_logger();
    let types = vec![
        interface(I_INTERFACE).with_marker(Marker::PolicyInjection),
        interface(I_OTHER),
        concrete(INTERFACE_IMPLEMENTATION, &[I_INTERFACE]),
        concrete(INTERFACE_IMPLEMENTATION_TWO, &[I_INTERFACE]),
        concrete(OTHER_IMPLEMENTATION, &[I_OTHER]),
    ];
    let mut registry = CountingRegistry::default();

    let registered = registry
        .automap_types_with(MappingBehaviors::MULTIMAP_BY_DEFAULT, &types)
        .unwrap();

    assert_eq!(registry.interception_calls, 1);
    for record in &registered {
        if record.registered_type == key(I_INTERFACE) {
            assert_eq!(record.injection_members, InjectionMember::policy_injection());
        } else {
            assert!(record.injection_members.is_empty());
        }
    }
}

#[test]
fn test_no_interception_without_policy() {
    init_test_logger();
    let mut registry = CountingRegistry::default();

    registry.automap_types(&single_implementation()).unwrap();

    assert_eq!(registry.interception_calls, 0);
    assert!(!registry.is_interception_enabled());
}

#[test]
fn test_missing_unit_registers_nothing() {
    init_test_logger();
    let loader: Arc<dyn TypeUnitLoader> =
        Arc::new(InMemoryUnitCatalog::new().with_unit("core", two_implementations()));
    let mut container = InMemoryContainer::new();

    let error = container
        .automap_units_with(loader, MappingBehaviors::MULTIMAP_BY_DEFAULT, &["core", "plugins"])
        .unwrap_err();

    assert!(matches!(error, AutomapperError::UnitNotFound { ref unit } if unit == "plugins"));
    assert!(container.is_empty());
}

#[test]
fn test_units_from_several_catalog_entries_are_combined() {
    init_test_logger();
    let loader: Arc<dyn TypeUnitLoader> = Arc::new(
        InMemoryUnitCatalog::new()
            .with_unit("contracts", vec![interface(I_INTERFACE)])
            .with_unit(
                "implementations",
                vec![concrete(INTERFACE_IMPLEMENTATION, &[I_INTERFACE])],
            ),
    );
    let mut container = InMemoryContainer::new();

    let registered = container
        .automap_units(loader, &["contracts", "implementations"])
        .unwrap();

    assert_eq!(registered.len(), 1);
    assert_eq!(registered[0].mapped_to, key(INTERFACE_IMPLEMENTATION));
}

#[test]
fn test_manifest_units_register_with_their_config() -> anyhow::Result<()> {
    init_test_logger();
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("contracts.toml"),
        r#"
[[types]]
name = "fixtures::IInterface"
kind = "interface"

[[types]]
name = "fixtures::IRepository<_>"
kind = "interface"
lifetime = "scoped"
"#,
    )?;
    fs::write(
        dir.path().join("implementations.json"),
        r#"{
            "types": [
                { "name": "fixtures::NamedType", "kind": "concrete", "implements": ["fixtures::IInterface"] },
                { "name": "fixtures::InterfaceImplementation", "kind": "concrete", "implements": ["fixtures::IInterface"] },
                { "name": "fixtures::Repository<_>", "kind": "concrete", "implements": ["fixtures::IRepository<_>"],
                  "methods": [{ "name": "save", "call_handlers": ["audit"] }] }
            ],
            "config": {
                "multimap": ["fixtures::IInterface"],
                "named": [{ "type": "fixtures::NamedType", "name": "Bananas" }]
            }
        }"#,
    )?;

    let automapper = AutomapperBuilder::new().with_manifest_root(dir.path()).build()?;
    let mut container = InMemoryContainer::new();
    let registered = automapper.register_units(&mut container, &["contracts", "implementations"])?;

    assert_eq!(registered.len(), 3);
    assert!(container.registration(&key(I_INTERFACE), Some("Bananas")).is_some());
    assert!(container
        .registration(&key(I_INTERFACE), Some(INTERFACE_IMPLEMENTATION))
        .is_some());

    let repository = container
        .registration(&key("fixtures::IRepository<_>"), None)
        .expect("open generic binding");
    assert_eq!(repository.lifetime, automapper::Lifetime::Scoped);
    assert!(!repository.injection_members.is_empty());
    assert!(container.is_interception_enabled());
    Ok(())
}

#[test]
fn test_broken_manifest_is_a_load_failure() -> anyhow::Result<()> {
    init_test_logger();
    let dir = TempDir::new()?;
    fs::write(dir.path().join("broken.yaml"), "types: [ { name: \n")?;

    let automapper = AutomapperBuilder::new().with_manifest_root(dir.path()).build()?;
    let mut container = InMemoryContainer::new();
    let error = automapper.register_units(&mut container, &["broken"]).unwrap_err();

    assert!(matches!(error, AutomapperError::UnitLoadFailed { ref unit, .. } if unit == "broken"));
    assert!(container.is_empty());
    Ok(())
}

#[test]
fn test_manifest_and_code_configuration_conflict_fails_fast() -> anyhow::Result<()> {
    init_test_logger();
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("core.yaml"),
        "types:\n  - name: fixtures::IInterface\n    kind: interface\n    lifetime: singleton\n  - name: fixtures::InterfaceImplementation\n    kind: concrete\n    implements: [\"fixtures::IInterface\"]\n",
    )?;

    let automapper = AutomapperBuilder::new()
        .with_manifest_root(dir.path())
        .with_configuration(
            automapper::AutomapperConfig::new()
                .and_map_with_lifetime(key(I_INTERFACE), automapper::Lifetime::PerThread),
        )
        .build()?;
    let mut container = InMemoryContainer::new();
    let error = automapper.register_units(&mut container, &["core"]).unwrap_err();

    assert!(matches!(error, AutomapperError::Configuration { .. }));
    assert!(container.is_empty());
    Ok(())
}
