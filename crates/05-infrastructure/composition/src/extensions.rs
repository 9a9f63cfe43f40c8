//! 注册表扩展
//!
//! 让任意 [`TargetRegistry`] 都能直接自动映射

use automapper_abstractions::{RegistrationRecord, TargetRegistry, TypeUnitLoader};
use automapper_common::{AutomapperResult, MappingBehaviors, TypeDescriptor};
use automapper_impl::MappingController;
use std::sync::Arc;

/// 自动映射扩展 trait
pub trait AutomapExt: TargetRegistry {
    /// 使用默认行为注册类型集合
    fn automap_types(&mut self, types: &[TypeDescriptor]) -> AutomapperResult<Vec<RegistrationRecord>> {
        self.automap_types_with(MappingBehaviors::empty(), types)
    }

    /// 使用指定行为注册类型集合
    fn automap_types_with(
        &mut self,
        behaviors: MappingBehaviors,
        types: &[TypeDescriptor],
    ) -> AutomapperResult<Vec<RegistrationRecord>> {
        MappingController::new().register_types(self, behaviors, types)
    }

    /// 使用默认行为加载并注册单元
    fn automap_units(
        &mut self,
        loader: Arc<dyn TypeUnitLoader>,
        units: &[&str],
    ) -> AutomapperResult<Vec<RegistrationRecord>> {
        self.automap_units_with(loader, MappingBehaviors::empty(), units)
    }

    /// 使用指定行为加载并注册单元
    fn automap_units_with(
        &mut self,
        loader: Arc<dyn TypeUnitLoader>,
        behaviors: MappingBehaviors,
        units: &[&str],
    ) -> AutomapperResult<Vec<RegistrationRecord>> {
        MappingController::new()
            .with_unit_loader(loader)
            .register_units(self, behaviors, units)
    }
}

impl<R: TargetRegistry + ?Sized> AutomapExt for R {}
