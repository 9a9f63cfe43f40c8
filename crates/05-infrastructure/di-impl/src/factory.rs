//! 类型映射工厂

use crate::matcher::find_matches;
use automapper_common::{AutomapperConfig, MappingBehaviors, TypeDescriptor, TypeMapping};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// 类型映射工厂
///
/// 把接口匹配结果与配置结合，生成最终的绑定集合
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeMappingFactory;

impl TypeMappingFactory {
    /// 创建新的映射工厂
    pub fn new() -> Self {
        Self
    }

    /// 生成绑定
    ///
    /// 结果中没有重复绑定。原始绑定按接口、实现的输入顺序排列，
    /// 集合绑定（启用 [`MappingBehaviors::COLLECTION_REGISTRATION`] 时）按分组首次出现的顺序追加在后面。
    pub fn create_mappings(
        &self,
        types: &[TypeDescriptor],
        behaviors: MappingBehaviors,
        config: &AutomapperConfig,
    ) -> Vec<TypeMapping> {
        let mut seen = HashSet::new();
        let (interfaces, concretes): (Vec<&TypeDescriptor>, Vec<&TypeDescriptor>) = types
            .iter()
            .filter(|descriptor| {
                let first = seen.insert(&descriptor.key);
                if !first {
                    warn!("忽略重复的类型描述: {}", descriptor.key);
                }
                first
            })
            .filter(|descriptor| config.is_mappable(&descriptor.key))
            .partition(|descriptor| descriptor.is_interface());

        debug!(
            "候选类型: {} 个接口, {} 个具体类型",
            interfaces.len(),
            concretes.len()
        );

        let mut mappings = Vec::new();
        let mut distinct = HashSet::new();
        for mapping in find_matches(&interfaces, &concretes) {
            if distinct.insert(mapping.clone()) {
                mappings.push(mapping);
            }
        }

        if !behaviors.contains(MappingBehaviors::COLLECTION_REGISTRATION) {
            return mappings;
        }

        for collection in Self::collection_mappings(&mappings, config) {
            if distinct.insert(collection.clone()) {
                debug!("添加集合绑定: {}", collection);
                mappings.push(collection);
            }
        }
        mappings
    }

    /// 为多实现或显式多重映射的接口生成集合绑定
    fn collection_mappings(mappings: &[TypeMapping], config: &AutomapperConfig) -> Vec<TypeMapping> {
        let mut order = Vec::new();
        let mut counts = HashMap::new();
        for mapping in mappings {
            let count = counts.entry(&mapping.from).or_insert_with(|| {
                order.push(&mapping.from);
                0_usize
            });
            *count += 1;
        }

        order
            .into_iter()
            .filter(|from| counts[from] > 1 || config.is_multimap(from))
            .map(TypeMapping::collection_for)
            .collect()
    }
}
