//! 自动映射配置模型
//!
//! 配置由五个相互独立的指令列表组成：排除、命名映射、多重映射、策略注入和自定义生命周期。
//! 合并只追加不覆盖，所有查询都是“列表中存在任意匹配”，因此合并顺序不影响结果。

use crate::errors::ConfigurationError;
use crate::lifecycle::Lifetime;
use crate::mapping::TypeMapping;
use crate::metadata::{Marker, TypeDescriptor, TypeKey};
use std::collections::HashMap;
use tracing::debug;

/// 配置提供者 trait
///
/// 出现在待映射类型集合中的提供者会被发现，其配置合并进本次调用的配置
pub trait AutomapperConfigProvider: Send + Sync {
    /// 创建显式配置
    fn create_configuration(&self) -> AutomapperConfig;
}

/// 自动映射配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutomapperConfig {
    do_not_map: Vec<TypeKey>,
    named_mappings: Vec<(TypeKey, String)>,
    multimap: Vec<TypeKey>,
    policy_injection: Vec<TypeKey>,
    custom_lifetimes: Vec<(TypeKey, Lifetime)>,
}

impl AutomapperConfig {
    /// 创建空配置
    pub fn new() -> Self {
        Self {
            do_not_map: Vec::new(),
            named_mappings: Vec::new(),
            multimap: Vec::new(),
            policy_injection: Vec::new(),
            custom_lifetimes: Vec::new(),
        }
    }

    /// 扫描类型上的标记创建配置，没有标记的类型不产生任何指令
    pub fn from_types(types: &[TypeDescriptor]) -> Self {
        types
            .iter()
            .fold(Self::new(), |config, descriptor| config.with_markers_of(descriptor))
    }

    fn with_markers_of(mut self, descriptor: &TypeDescriptor) -> Self {
        let key = &descriptor.key;
        for marker in &descriptor.markers {
            match marker {
                Marker::DoNotMap => self.do_not_map.push(key.clone()),
                Marker::Singleton => self
                    .custom_lifetimes
                    .push((key.clone(), Lifetime::Singleton)),
                Marker::CustomLifetime(lifetime) => {
                    self.custom_lifetimes.push((key.clone(), *lifetime));
                }
                Marker::Multimap => self.multimap.push(key.clone()),
                Marker::PolicyInjection => self.policy_injection.push(key.clone()),
                Marker::MapAs(name) => self.named_mappings.push((key.clone(), name.clone())),
                Marker::CallHandler(_) => {}
            }
        }
        self
    }

    /// 排除类型
    pub fn and_do_not_map_for<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = TypeKey>,
    {
        self.do_not_map.extend(types);
        self
    }

    /// 为具体类型指定注册名称
    pub fn and_use_named_mapping_for(mut self, key: TypeKey, name: impl Into<String>) -> Self {
        self.named_mappings.push((key, name.into()));
        self
    }

    /// 将接口标记为多重映射
    pub fn and_use_multimapping_for<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = TypeKey>,
    {
        self.multimap.extend(types);
        self
    }

    /// 将接口标记为需要策略注入
    pub fn and_use_policy_injection_for<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = TypeKey>,
    {
        self.policy_injection.extend(types);
        self
    }

    /// 以单例生命周期映射
    pub fn and_map_as_singleton<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = TypeKey>,
    {
        self.custom_lifetimes
            .extend(types.into_iter().map(|key| (key, Lifetime::Singleton)));
        self
    }

    /// 以指定生命周期映射
    pub fn and_map_with_lifetime(mut self, key: TypeKey, lifetime: Lifetime) -> Self {
        self.custom_lifetimes.push((key, lifetime));
        self
    }

    /// 合并另一个配置，追加其全部指令
    pub fn merge_with(mut self, other: Self) -> Self {
        debug!("合并配置: 追加 {} 条指令", other.directive_count());
        self.do_not_map.extend(other.do_not_map);
        self.named_mappings.extend(other.named_mappings);
        self.multimap.extend(other.multimap);
        self.policy_injection.extend(other.policy_injection);
        self.custom_lifetimes.extend(other.custom_lifetimes);
        self
    }

    /// 检查矛盾的指令
    ///
    /// 同一类型的重复指令可以共存，不同的生命周期或不同的注册名称视为错误
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut lifetimes: HashMap<&TypeKey, Lifetime> = HashMap::new();
        for (key, lifetime) in &self.custom_lifetimes {
            let first = *lifetimes.entry(key).or_insert(*lifetime);
            if first != *lifetime {
                return Err(ConfigurationError::ConflictingLifetime {
                    type_name: key.clone(),
                    first,
                    second: *lifetime,
                });
            }
        }

        let mut names: HashMap<&TypeKey, &str> = HashMap::new();
        for (key, name) in &self.named_mappings {
            let first = *names.entry(key).or_insert(name.as_str());
            if first != name.as_str() {
                return Err(ConfigurationError::ConflictingName {
                    type_name: key.clone(),
                    first: first.to_string(),
                    second: name.clone(),
                });
            }
        }

        Ok(())
    }

    /// 类型是否可以参与映射
    pub fn is_mappable(&self, key: &TypeKey) -> bool {
        !self.do_not_map.contains(key)
    }

    /// 类型是否被标记为多重映射，查询的类型取泛型定义形式后与标记精确比较
    pub fn is_multimap(&self, key: &TypeKey) -> bool {
        let definition = key.definition();
        self.multimap.contains(&definition)
    }

    /// 类型是否有显式注册名称
    pub fn is_named_mapping(&self, key: &TypeKey) -> bool {
        self.explicit_name_for(key).is_some()
    }

    /// 类型是否需要策略注入
    pub fn is_marked_for_policy_injection(&self, key: &TypeKey) -> bool {
        self.policy_injection.contains(key)
    }

    /// 类型的自定义生命周期
    pub fn custom_lifetime_for(&self, key: &TypeKey) -> Option<Lifetime> {
        self.custom_lifetimes
            .iter()
            .find(|(marked, _)| marked == key)
            .map(|(_, lifetime)| *lifetime)
    }

    /// 类型是否带有自定义生命周期
    pub fn is_marked_with_custom_lifetime(&self, key: &TypeKey) -> bool {
        self.custom_lifetime_for(key).is_some()
    }

    /// 类型是否为单例
    pub fn is_singleton(&self, key: &TypeKey) -> bool {
        self.custom_lifetime_for(key) == Some(Lifetime::Singleton)
    }

    /// 类型的显式注册名称
    pub fn explicit_name_for(&self, key: &TypeKey) -> Option<&str> {
        self.named_mappings
            .iter()
            .find(|(marked, _)| marked == key)
            .map(|(_, name)| name.as_str())
    }

    /// 映射的命名注册名称：目标类型的显式名称，否则为目标类型的完整名称
    pub fn get_named_mapping(&self, mapping: &TypeMapping) -> String {
        self.explicit_name_for(&mapping.to)
            .map_or_else(|| mapping.to.to_string(), ToString::to_string)
    }

    /// 指令总数
    pub fn directive_count(&self) -> usize {
        self.do_not_map.len()
            + self.named_mappings.len()
            + self.multimap.len()
            + self.policy_injection.len()
            + self.custom_lifetimes.len()
    }

    /// 是否没有任何指令
    pub fn is_empty(&self) -> bool {
        self.directive_count() == 0
    }
}

impl Default for AutomapperConfig {
    fn default() -> Self {
        Self::new()
    }
}
