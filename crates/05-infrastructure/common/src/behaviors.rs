//! 映射行为

use bitflags::bitflags;

bitflags! {
    /// 映射行为开关
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct MappingBehaviors: u32 {
        /// 多个具体类型映射到同一接口时自动使用命名注册
        const MULTIMAP_BY_DEFAULT = 1 << 0;
        /// 为多实现接口额外注册集合绑定
        const COLLECTION_REGISTRATION = 1 << 1;
    }
}

impl Default for MappingBehaviors {
    fn default() -> Self {
        Self::empty()
    }
}
