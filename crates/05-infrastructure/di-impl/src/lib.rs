//! # 自动映射引擎实现
//!
//! 提供接口匹配、映射生成、注册名称解析、重复映射校验和注册编排的具体实现。
//!
//! ## 处理流程
//!
//! 1. [`MappingController`] 扫描标记并合并所有配置来源
//! 2. [`TypeMappingFactory`] 借助 [`matcher`] 计算绑定，按需追加集合绑定
//! 3. [`TypeMappingHandler`] 逐条校验、决定注入成员、生命周期和名称后提交
//! 4. [`RegistrationTracker`] 对比快照，返回本次新增的注册

pub mod controller;
pub mod factory;
pub mod handler;
pub mod handling;
pub mod matcher;
pub mod tracker;

pub use controller::*;
pub use factory::*;
pub use handler::*;
pub use handling::*;
pub use matcher::*;
pub use tracker::*;
