//! 类型映射（绑定）

use crate::metadata::TypeKey;
use std::fmt;

/// 类型映射
///
/// 有序对 (来源接口, 目标实现)，按结构比较
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeMapping {
    /// 来源接口（或集合接口）
    pub from: TypeKey,
    /// 目标实现（或集合门面）
    pub to: TypeKey,
}

impl TypeMapping {
    /// 创建新的类型映射
    pub fn new(from: TypeKey, to: TypeKey) -> Self {
        Self { from, to }
    }

    /// 为接口创建集合绑定
    pub fn collection_for(element: &TypeKey) -> Self {
        Self::new(
            TypeKey::collection_of(element),
            TypeKey::collection_facade_of(element),
        )
    }

    /// 是否为合成的集合绑定
    pub fn is_collection_mapping(&self) -> bool {
        self.from.collection_element().is_some() && self.to.is_collection_facade()
    }
}

impl fmt::Display for TypeMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
