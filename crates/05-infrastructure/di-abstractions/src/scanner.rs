//! 类型单元加载器抽象接口
//!
//! 提供按单元名称发现类型的能力

use automapper_common::{AutomapperResult, TypeDescriptor};

/// 类型单元加载器 trait
///
/// 单元是可按名称加载的一组类型，找不到单元时必须返回
/// [`AutomapperError::UnitNotFound`](automapper_common::AutomapperError::UnitNotFound)
pub trait TypeUnitLoader: Send + Sync {
    /// 加载指定单元中的全部类型
    fn load_types(&self, unit: &str) -> AutomapperResult<Vec<TypeDescriptor>>;

    /// 获取加载器名称
    fn name(&self) -> &str;
}
