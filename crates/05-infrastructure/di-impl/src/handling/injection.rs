//! 注入成员决策

use super::TypeCatalog;
use automapper_common::{AutomapperConfig, InjectionMember, TypeMapping};

/// 注入成员工厂 trait
pub trait InjectionMemberFactory: Send + Sync {
    /// 计算绑定需要的注入成员，空表示不需要拦截
    fn injection_members(&self, mapping: &TypeMapping) -> Vec<InjectionMember>;
}

/// 策略注入成员工厂
///
/// 来源接口被配置为策略注入，或来源、目标类型（含其方法）带有调用处理器时需要拦截
#[derive(Debug)]
pub struct PolicyInjectionMemberFactory<'a> {
    config: &'a AutomapperConfig,
    catalog: TypeCatalog<'a>,
}

impl<'a> PolicyInjectionMemberFactory<'a> {
    /// 创建新的注入成员工厂
    pub fn new(config: &'a AutomapperConfig, catalog: TypeCatalog<'a>) -> Self {
        Self { config, catalog }
    }

    fn has_call_handlers(&self, mapping: &TypeMapping) -> bool {
        [&mapping.from, &mapping.to].into_iter().any(|key| {
            self.catalog
                .get(key)
                .is_some_and(|descriptor| descriptor.has_call_handlers())
        })
    }
}

impl InjectionMemberFactory for PolicyInjectionMemberFactory<'_> {
    fn injection_members(&self, mapping: &TypeMapping) -> Vec<InjectionMember> {
        if self.config.is_marked_for_policy_injection(&mapping.from) || self.has_call_handlers(mapping)
        {
            InjectionMember::policy_injection()
        } else {
            Vec::new()
        }
    }
}
