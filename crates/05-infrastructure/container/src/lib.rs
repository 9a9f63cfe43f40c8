//! # Automapper Container
//!
//! 目标注册表的内存实现，用于演示和测试自动映射的结果。
//!
//! - [`InMemoryContainer`] - 注册表 + 实例解析器
//! - [`CollectionFacade`] - 每次迭代都重新查询注册表的集合门面
//! - [`InMemoryUnitCatalog`] - 按名称保存类型单元的加载器

pub mod catalog;
pub mod container;
pub mod facade;

pub use catalog::*;
pub use container::*;
pub use facade::*;
