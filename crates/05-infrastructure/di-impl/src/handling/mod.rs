//! 单条绑定的处理策略
//!
//! 名称、生命周期、注入成员和重复校验各自是一个可替换的策略，
//! 默认实现都由本次调用的配置驱动。

pub mod injection;
pub mod lifetime;
pub mod naming;
pub mod validation;

pub use injection::*;
pub use lifetime::*;
pub use naming::*;
pub use validation::*;

use automapper_common::{TypeDescriptor, TypeKey};
use std::collections::HashMap;

/// 本次调用的类型目录
///
/// 按类型标识查找描述符，封闭泛型找不到时回退到泛型定义
#[derive(Debug, Default)]
pub struct TypeCatalog<'a> {
    descriptors: HashMap<TypeKey, &'a TypeDescriptor>,
}

impl<'a> TypeCatalog<'a> {
    /// 从类型集合创建目录，重复的标识保留第一个
    pub fn new(types: &'a [TypeDescriptor]) -> Self {
        let mut descriptors = HashMap::with_capacity(types.len());
        for descriptor in types {
            descriptors.entry(descriptor.key.clone()).or_insert(descriptor);
        }
        Self { descriptors }
    }

    /// 查找描述符
    pub fn get(&self, key: &TypeKey) -> Option<&'a TypeDescriptor> {
        self.descriptors
            .get(key)
            .or_else(|| self.descriptors.get(&key.definition()))
            .copied()
    }
}
