//! # Automapper Abstractions
//!
//! 自动映射引擎的外部协作者抽象层。映射引擎只决定“注册什么”，
//! 存储、构造和类型发现都通过这里的接口交给外部实现。
//!
//! ## 核心接口
//!
//! - [`TargetRegistry`] - 目标注册表接口
//! - [`InstanceResolver`] - 实例解析接口（集合门面使用）
//! - [`TypeUnitLoader`] - 按单元名称加载类型的接口

pub mod registry;
pub mod resolver;
pub mod scanner;

pub use registry::*;
pub use resolver::*;
pub use scanner::*;
