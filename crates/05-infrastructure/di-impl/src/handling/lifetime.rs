//! 生命周期决策

use automapper_common::{AutomapperConfig, Lifetime, TypeMapping};

/// 生命周期工厂 trait
pub trait LifetimeFactory: Send + Sync {
    /// 计算绑定的生命周期
    fn lifetime(&self, mapping: &TypeMapping) -> Lifetime;
}

/// 基于配置的生命周期工厂
///
/// 只看来源接口上的生命周期指令，没有指令时为瞬时
#[derive(Debug, Clone, Copy)]
pub struct ConfigLifetimeFactory<'a> {
    config: &'a AutomapperConfig,
}

impl<'a> ConfigLifetimeFactory<'a> {
    /// 创建新的生命周期工厂
    pub fn new(config: &'a AutomapperConfig) -> Self {
        Self { config }
    }
}

impl LifetimeFactory for ConfigLifetimeFactory<'_> {
    fn lifetime(&self, mapping: &TypeMapping) -> Lifetime {
        self.config
            .custom_lifetime_for(&mapping.from)
            .unwrap_or_default()
    }
}
