//! # Automapper
//!
//! 依赖注入容器的自动类型注册。给定一组类型描述，推断“接口 -> 实现”绑定，
//! 按配置决定名称、生命周期和拦截，并校验后提交到目标注册表。
//!
//! ## 主要功能
//!
//! - **自动映射**: 任意 [`TargetRegistry`] 都可以通过 [`AutomapExt`] 直接自动映射
//! - **构建器**: [`AutomapperBuilder`] 组装行为、额外配置、单元加载器和日志
//! - **清单文件**: 从 TOML、JSON 或 YAML 清单加载类型单元
//!
//! ## 基本使用
//!
//! ```rust
//! use automapper::{AutomapExt, InMemoryContainer, TypeDescriptor, TypeKey};
//!
//! # fn main() -> Result<(), automapper::AutomapperError> {
//! let types = vec![
//!     TypeDescriptor::interface(TypeKey::new("app::IGreeter")),
//!     TypeDescriptor::concrete(TypeKey::new("app::Greeter"))
//!         .implements(TypeKey::new("app::IGreeter")),
//! ];
//!
//! let mut container = InMemoryContainer::new();
//! let registered = container.automap_types(&types)?;
//!
//! assert_eq!(registered.len(), 1);
//! assert_eq!(registered[0].mapped_to, TypeKey::new("app::Greeter"));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod engine;
pub mod extensions;

pub use builder::{AutomapperBuilder, LoggingConfig};
pub use engine::Automapper;
pub use extensions::AutomapExt;

// 重新导出主要类型
pub use automapper_abstractions::*;
pub use automapper_common::*;
pub use automapper_config::{ManifestConfigProvider, ManifestUnitLoader, TypeManifest};
pub use automapper_container::*;
pub use automapper_impl::MappingController;
