//! 注册名称解析

use automapper_common::{AutomapperConfig, MappingBehaviors, TypeKey, TypeMapping};
use std::collections::{HashMap, HashSet};

/// 注册名称工厂 trait
pub trait RegistrationNameFactory: Send + Sync {
    /// 计算绑定的注册名称，`None` 表示默认注册
    fn registration_name(&self, mapping: &TypeMapping) -> Option<String>;
}

/// 基于配置的注册名称工厂
///
/// 规则（先匹配者生效）：
/// 1. 来源接口显式多重映射，或目标类型有显式名称 → 命名注册
/// 2. 启用 [`MappingBehaviors::MULTIMAP_BY_DEFAULT`] 且本次调用中该接口有多个绑定 → 命名注册
/// 3. 否则为默认注册
#[derive(Debug)]
pub struct ConfigRegistrationNameFactory<'a> {
    config: &'a AutomapperConfig,
    behaviors: MappingBehaviors,
    multimap_types: HashSet<TypeKey>,
}

impl<'a> ConfigRegistrationNameFactory<'a> {
    /// 用本次调用的全部绑定创建名称工厂
    pub fn new(
        config: &'a AutomapperConfig,
        behaviors: MappingBehaviors,
        mappings: &[TypeMapping],
    ) -> Self {
        let mut counts: HashMap<&TypeKey, usize> = HashMap::new();
        for mapping in mappings {
            *counts.entry(&mapping.from).or_default() += 1;
        }

        let multimap_types = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(from, _)| from.clone())
            .collect();

        Self {
            config,
            behaviors,
            multimap_types,
        }
    }

    /// 接口是否在本次调用中有多个绑定
    pub fn is_ambient_multimap(&self, from: &TypeKey) -> bool {
        self.multimap_types.contains(from)
    }
}

impl RegistrationNameFactory for ConfigRegistrationNameFactory<'_> {
    fn registration_name(&self, mapping: &TypeMapping) -> Option<String> {
        let explicit = self.config.is_multimap(&mapping.from)
            || self.config.is_named_mapping(&mapping.to);
        let implicit = self
            .behaviors
            .contains(MappingBehaviors::MULTIMAP_BY_DEFAULT)
            && self.is_ambient_multimap(&mapping.from);

        (explicit || implicit).then(|| self.config.get_named_mapping(mapping))
    }
}
