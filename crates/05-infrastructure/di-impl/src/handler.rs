//! 类型映射处理器
//!
//! 按顺序处理绑定：校验 → 注入成员 → 生命周期 → 名称 → 提交。
//! 每一步都依赖上一条绑定提交后的注册表状态，因此不能并行。

use crate::handling::{
    InjectionMemberFactory, LifetimeFactory, RegistrationNameFactory, TypeMappingValidator,
};
use crate::tracker::RegistrationTracker;
use automapper_abstractions::{RegistrationRecord, TargetRegistry};
use automapper_common::{AutomapperResult, TypeMapping};
use tracing::{debug, error, info};

/// 类型映射处理器
pub struct TypeMappingHandler<'a> {
    validator: &'a dyn TypeMappingValidator,
    names: &'a dyn RegistrationNameFactory,
    lifetimes: &'a dyn LifetimeFactory,
    injection: &'a dyn InjectionMemberFactory,
}

impl<'a> TypeMappingHandler<'a> {
    /// 用给定的处理策略创建处理器
    pub fn new(
        validator: &'a dyn TypeMappingValidator,
        names: &'a dyn RegistrationNameFactory,
        lifetimes: &'a dyn LifetimeFactory,
        injection: &'a dyn InjectionMemberFactory,
    ) -> Self {
        Self {
            validator,
            names,
            lifetimes,
            injection,
        }
    }

    /// 处理全部绑定，返回本次新增的注册
    ///
    /// 第一条校验失败即中止，之前已提交的绑定保留在注册表中
    pub fn handle<R>(
        &self,
        mappings: &[TypeMapping],
        registry: &mut R,
    ) -> AutomapperResult<Vec<RegistrationRecord>>
    where
        R: TargetRegistry + ?Sized,
    {
        let tracker = RegistrationTracker::snapshot(registry);
        debug!("注册表快照: {} 条已有注册", tracker.existing_count());

        for mapping in mappings {
            self.handle_mapping(mapping, registry)?;
        }

        let created = tracker.new_registrations(registry);
        info!("映射处理完成: {} 条绑定, {} 条新注册", mappings.len(), created.len());
        Ok(created)
    }

    fn handle_mapping<R>(&self, mapping: &TypeMapping, registry: &mut R) -> AutomapperResult<()>
    where
        R: TargetRegistry + ?Sized,
    {
        let registrations = registry.registrations();
        if let Err(e) = self.validator.validate_type_mapping(mapping, &registrations) {
            error!("映射校验失败: {}", e);
            return Err(e.into());
        }

        let injection_members = self.injection.injection_members(mapping);
        let lifetime = self.lifetimes.lifetime(mapping);
        let name = self.names.registration_name(mapping);

        if !injection_members.is_empty() && !registry.is_interception_enabled() {
            info!("启用拦截扩展");
            registry.enable_interception();
        }

        debug!(
            "注册映射: {} (名称: {:?}, 生命周期: {}, 注入成员: {:?})",
            mapping, name, lifetime, injection_members
        );

        let record = RegistrationRecord::new(mapping.from.clone(), mapping.to.clone())
            .with_name(name)
            .with_lifetime(lifetime)
            .with_injection_members(injection_members);
        registry.register_binding(record)?;
        Ok(())
    }
}
