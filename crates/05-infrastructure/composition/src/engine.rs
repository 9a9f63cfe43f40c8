//! 已配置的自动映射器

use automapper_abstractions::{RegistrationRecord, TargetRegistry};
use automapper_common::{AutomapperResult, MappingBehaviors, TypeDescriptor};
use automapper_impl::MappingController;
use tracing::debug;

/// 已配置的自动映射器
///
/// 由 [`AutomapperBuilder`](crate::AutomapperBuilder) 构建，可对多个注册表重复使用
#[derive(Debug, Clone, Default)]
pub struct Automapper {
    controller: MappingController,
    behaviors: MappingBehaviors,
}

impl Automapper {
    /// 创建新的自动映射器
    pub fn new(controller: MappingController, behaviors: MappingBehaviors) -> Self {
        Self {
            controller,
            behaviors,
        }
    }

    /// 映射控制器
    pub fn controller(&self) -> &MappingController {
        &self.controller
    }

    /// 默认映射行为
    pub fn behaviors(&self) -> MappingBehaviors {
        self.behaviors
    }

    /// 注册类型集合，返回本次新增的注册
    pub fn register_types<R>(
        &self,
        registry: &mut R,
        types: &[TypeDescriptor],
    ) -> AutomapperResult<Vec<RegistrationRecord>>
    where
        R: TargetRegistry + ?Sized,
    {
        self.controller.register_types(registry, self.behaviors, types)
    }

    /// 加载并注册指定单元
    pub fn register_units<R>(
        &self,
        registry: &mut R,
        units: &[&str],
    ) -> AutomapperResult<Vec<RegistrationRecord>>
    where
        R: TargetRegistry + ?Sized,
    {
        debug!("注册单元: {:?}", units);
        self.controller.register_units(registry, self.behaviors, units)
    }
}
