//! # Automapper Common
//!
//! 这个 crate 提供了自动映射引擎的公共类型模型。
//!
//! ## 核心组件
//!
//! - [`TypeKey`] - 两级类型标识（泛型定义形式 + 完全应用形式）
//! - [`TypeDescriptor`] - 参与映射的类型描述，带有标记和声明的接口
//! - [`TypeMapping`] - 接口到实现的绑定
//! - [`AutomapperConfig`] - 可合并的映射配置模型
//! - [`MappingBehaviors`] - 多重映射和集合注册行为开关
//!
//! ## 设计原则
//!
//! - 标记只是数据，配置模型只关心标记的语义
//! - 配置在构建阶段按值拥有，构建完成后只读共享
//! - 所有错误都是结构化的，消息包含完整的类型名称

pub mod behaviors;
pub mod configuration;
pub mod errors;
pub mod lifecycle;
pub mod mapping;
pub mod metadata;

pub use behaviors::*;
pub use configuration::*;
pub use errors::*;
pub use lifecycle::*;
pub use mapping::*;
pub use metadata::*;
