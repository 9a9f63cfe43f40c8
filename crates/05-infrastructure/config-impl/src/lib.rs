//! # Automapper Config
//!
//! 用清单文件描述类型和映射配置，支持 TOML、JSON 和 YAML 三种格式。
//!
//! ## 主要组件
//!
//! - [`TypeManifest`] - 清单文件模型
//! - [`ManifestConfigProvider`] - 把清单中的配置节作为配置提供者
//! - [`ManifestUnitLoader`] - 按单元名称在目录中查找清单文件

pub mod loader;
pub mod manifest;
pub mod providers;

pub use loader::*;
pub use manifest::*;
pub use providers::*;
