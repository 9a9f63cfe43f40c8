//! 接口匹配器
//!
//! 纯函数：为具体类型声明的每个接口计算比较形式和目标形式

use automapper_common::{TypeDescriptor, TypeKey, TypeMapping};
use rayon::prelude::*;

/// 接口对
///
/// `comparison` 用于与候选接口比较（泛型接口取定义形式），
/// `destination` 是注册时使用的接口（开放泛型实现取定义形式，否则取声明的封闭形式）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfacePair {
    /// 比较形式
    pub comparison: TypeKey,
    /// 目标形式
    pub destination: TypeKey,
}

/// 计算具体类型的全部接口对
pub fn generically_open_interfaces(concrete: &TypeDescriptor) -> Vec<InterfacePair> {
    concrete
        .implemented_interfaces()
        .iter()
        .map(|interface| {
            let comparison = interface.definition();
            let destination = if concrete.is_generic_open() {
                comparison.clone()
            } else {
                interface.clone()
            };
            InterfacePair {
                comparison,
                destination,
            }
        })
        .collect()
}

/// 候选接口是否与接口对匹配
pub fn matches(interface: &TypeKey, pair: &InterfacePair) -> bool {
    pair.comparison == *interface
}

/// 计算全部 (接口, 实现) 绑定
///
/// 结果按接口顺序、再按实现顺序排列；按接口并行计算，收集时保持顺序
pub fn find_matches(
    interfaces: &[&TypeDescriptor],
    concretes: &[&TypeDescriptor],
) -> Vec<TypeMapping> {
    let candidates: Vec<(&TypeDescriptor, Vec<InterfacePair>)> = concretes
        .iter()
        .map(|concrete| (*concrete, generically_open_interfaces(concrete)))
        .collect();

    interfaces
        .par_iter()
        .flat_map_iter(|interface| {
            let mut found = Vec::new();
            for (concrete, pairs) in &candidates {
                for pair in pairs.iter().filter(|pair| matches(&interface.key, pair)) {
                    found.push(TypeMapping::new(
                        pair.destination.clone(),
                        concrete.key.clone(),
                    ));
                }
            }
            found
        })
        .collect()
}
