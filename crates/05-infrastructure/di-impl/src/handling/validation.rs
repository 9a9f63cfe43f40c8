//! 重复映射校验

use super::naming::RegistrationNameFactory;
use automapper_abstractions::RegistrationRecord;
use automapper_common::{AutomapperConfig, DuplicateMappingError, MappingBehaviors, TypeMapping};

/// 类型映射校验器 trait
pub trait TypeMappingValidator: Send + Sync {
    /// 在提交前校验绑定，`registrations` 为注册表的当前状态
    fn validate_type_mapping(
        &self,
        mapping: &TypeMapping,
        registrations: &[RegistrationRecord],
    ) -> Result<(), DuplicateMappingError>;
}

/// 基于配置的类型映射校验器
///
/// 1. 未启用多重映射时，接口已有任何注册即失败
/// 2. 无论是否多重映射，接口已有同名注册即失败
pub struct ConfigTypeMappingValidator<'a> {
    config: &'a AutomapperConfig,
    behaviors: MappingBehaviors,
    names: &'a dyn RegistrationNameFactory,
}

impl<'a> ConfigTypeMappingValidator<'a> {
    /// 创建新的校验器，名称由 `names` 解析
    pub fn new(
        config: &'a AutomapperConfig,
        behaviors: MappingBehaviors,
        names: &'a dyn RegistrationNameFactory,
    ) -> Self {
        Self {
            config,
            behaviors,
            names,
        }
    }

    fn is_multimapping(&self, mapping: &TypeMapping) -> bool {
        self.behaviors.contains(MappingBehaviors::MULTIMAP_BY_DEFAULT)
            || self.config.is_multimap(&mapping.from)
    }
}

impl TypeMappingValidator for ConfigTypeMappingValidator<'_> {
    fn validate_type_mapping(
        &self,
        mapping: &TypeMapping,
        registrations: &[RegistrationRecord],
    ) -> Result<(), DuplicateMappingError> {
        let mut existing = registrations
            .iter()
            .filter(|record| record.registered_type == mapping.from);

        if !self.is_multimapping(mapping) {
            if let Some(record) = existing.next() {
                return Err(DuplicateMappingError::SameInterface {
                    interface: mapping.from.clone(),
                    mapped_concrete: record.mapped_to.clone(),
                    duplicate_concrete: mapping.to.clone(),
                });
            }
            return Ok(());
        }

        let name = self.names.registration_name(mapping);
        match existing.find(|record| record.name == name) {
            Some(record) => match name {
                Some(name) => Err(DuplicateMappingError::SameName {
                    interface: mapping.from.clone(),
                    mapped_concrete: record.mapped_to.clone(),
                    duplicate_concrete: mapping.to.clone(),
                    name,
                }),
                None => Err(DuplicateMappingError::SameInterface {
                    interface: mapping.from.clone(),
                    mapped_concrete: record.mapped_to.clone(),
                    duplicate_concrete: mapping.to.clone(),
                }),
            },
            None => Ok(()),
        }
    }
}
