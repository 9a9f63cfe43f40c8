//! 类型清单
//!
//! 清单文件列出一个单元中的类型及其标记，可选的 `config` 节提供显式配置

use crate::providers::ManifestConfigProvider;
use automapper_common::{
    AutomapperError, Lifetime, Marker, MethodDescriptor, TypeDescriptor, TypeKey, TypeKind,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// 清单结果类型
pub type ManifestResult<T> = Result<T, ManifestError>;

/// 清单错误类型
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("清单文件读取失败: {path}, 原因: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML 清单解析失败: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },

    #[error("JSON 清单解析失败: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("YAML 清单解析失败: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },

    #[error("不支持的清单格式: {path}")]
    UnsupportedFormat { path: String },
}

impl ManifestError {
    /// 转换为单元加载失败错误
    pub fn into_unit_error(self, unit: &str) -> AutomapperError {
        AutomapperError::unit_load_failed(unit, self.to_string())
    }
}

/// 清单格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// TOML
    Toml,
    /// JSON
    Json,
    /// YAML
    Yaml,
}

impl ManifestFormat {
    /// 支持的文件扩展名，按查找优先级排列
    pub const EXTENSIONS: [&'static str; 4] = ["toml", "json", "yaml", "yml"];

    /// 根据扩展名判断格式
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// 标记项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerEntry {
    /// 不参与映射
    DoNotMap,
    /// 单例
    Singleton,
    /// 多重映射
    Multimap,
    /// 策略注入
    PolicyInjection,
}

impl From<MarkerEntry> for Marker {
    fn from(entry: MarkerEntry) -> Self {
        match entry {
            MarkerEntry::DoNotMap => Self::DoNotMap,
            MarkerEntry::Singleton => Self::Singleton,
            MarkerEntry::Multimap => Self::Multimap,
            MarkerEntry::PolicyInjection => Self::PolicyInjection,
        }
    }
}

/// 方法项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodEntry {
    /// 方法名称
    pub name: String,
    /// 调用处理器
    #[serde(default)]
    pub call_handlers: Vec<String>,
}

/// 类型项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeEntry {
    /// 类型标识
    pub name: TypeKey,
    /// 类型种类
    pub kind: TypeKind,
    /// 实现的接口
    #[serde(default)]
    pub implements: Vec<TypeKey>,
    /// 标记
    #[serde(default)]
    pub markers: Vec<MarkerEntry>,
    /// 显式注册名称
    #[serde(default)]
    pub map_as: Option<String>,
    /// 自定义生命周期
    #[serde(default)]
    pub lifetime: Option<Lifetime>,
    /// 类型上的调用处理器
    #[serde(default)]
    pub call_handlers: Vec<String>,
    /// 方法
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
}

impl TypeEntry {
    /// 转换为类型描述符
    pub fn to_descriptor(&self) -> TypeDescriptor {
        let mut descriptor = TypeDescriptor::new(self.name.clone(), self.kind);
        descriptor.interfaces.clone_from(&self.implements);
        descriptor
            .markers
            .extend(self.markers.iter().copied().map(Marker::from));
        if let Some(name) = &self.map_as {
            descriptor.markers.push(Marker::MapAs(name.clone()));
        }
        if let Some(lifetime) = self.lifetime {
            descriptor.markers.push(Marker::CustomLifetime(lifetime));
        }
        descriptor.markers.extend(
            self.call_handlers
                .iter()
                .map(|handler| Marker::CallHandler(handler.clone())),
        );
        descriptor.methods = self
            .methods
            .iter()
            .map(|method| {
                method
                    .call_handlers
                    .iter()
                    .fold(MethodDescriptor::new(method.name.clone()), |m, handler| {
                        m.with_marker(Marker::CallHandler(handler.clone()))
                    })
            })
            .collect();
        descriptor
    }
}

/// 命名映射项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedEntry {
    /// 具体类型
    #[serde(rename = "type")]
    pub type_name: TypeKey,
    /// 注册名称
    pub name: String,
}

/// 生命周期项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LifetimeEntry {
    /// 类型
    #[serde(rename = "type")]
    pub type_name: TypeKey,
    /// 生命周期
    pub lifetime: Lifetime,
}

/// 配置节
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigSection {
    /// 排除的类型
    pub do_not_map: Vec<TypeKey>,
    /// 多重映射的接口
    pub multimap: Vec<TypeKey>,
    /// 策略注入的接口
    pub policy_injection: Vec<TypeKey>,
    /// 单例类型
    pub singletons: Vec<TypeKey>,
    /// 命名映射
    pub named: Vec<NamedEntry>,
    /// 自定义生命周期
    pub lifetimes: Vec<LifetimeEntry>,
}

/// 类型清单
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeManifest {
    /// 类型列表
    pub types: Vec<TypeEntry>,
    /// 显式配置
    pub config: Option<ConfigSection>,
}

impl TypeManifest {
    /// 解析 TOML 清单
    pub fn from_toml_str(content: &str) -> ManifestResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 解析 JSON 清单
    pub fn from_json_str(content: &str) -> ManifestResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// 解析 YAML 清单
    pub fn from_yaml_str(content: &str) -> ManifestResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// 按扩展名读取清单文件
    pub fn from_path<P: AsRef<Path>>(path: P) -> ManifestResult<Self> {
        let path = path.as_ref();
        let format = ManifestFormat::from_path(path).ok_or_else(|| ManifestError::UnsupportedFormat {
            path: path.display().to_string(),
        })?;

        debug!("加载清单文件: {} ({:?})", path.display(), format);
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;

        match format {
            ManifestFormat::Toml => Self::from_toml_str(&content),
            ManifestFormat::Json => Self::from_json_str(&content),
            ManifestFormat::Yaml => Self::from_yaml_str(&content),
        }
    }

    /// 转换为类型描述符
    ///
    /// 存在配置节时追加一个携带 [`ManifestConfigProvider`] 的描述符，
    /// 使配置通过常规的提供者发现流程合并
    pub fn to_descriptors(&self, unit: &str) -> Vec<TypeDescriptor> {
        let mut descriptors: Vec<TypeDescriptor> =
            self.types.iter().map(TypeEntry::to_descriptor).collect();

        if let Some(section) = &self.config {
            let provider = ManifestConfigProvider::new(section.clone());
            descriptors.push(
                TypeDescriptor::concrete(TypeKey::new(format!("{unit}::ManifestConfiguration")))
                    .with_config_provider(Arc::new(provider)),
            );
        }
        descriptors
    }
}
