//! 错误类型定义

use crate::lifecycle::Lifetime;
use crate::metadata::TypeKey;
use thiserror::Error;

/// 自动映射结果类型
pub type AutomapperResult<T> = Result<T, AutomapperError>;

/// 配置错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("类型 {type_name} 被配置了两个不同的生命周期: {first} 和 {second}")]
    ConflictingLifetime {
        type_name: TypeKey,
        first: Lifetime,
        second: Lifetime,
    },

    #[error("类型 {type_name} 被配置了两个不同的注册名称: '{first}' 和 '{second}'")]
    ConflictingName {
        type_name: TypeKey,
        first: String,
        second: String,
    },
}

impl ConfigurationError {
    /// 出错的类型
    pub fn type_name(&self) -> &TypeKey {
        match self {
            Self::ConflictingLifetime { type_name, .. } | Self::ConflictingName { type_name, .. } => {
                type_name
            }
        }
    }
}

/// 重复映射错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DuplicateMappingError {
    #[error("尝试将至少两个具体类型 ({mapped_concrete} 和 {duplicate_concrete}) 映射到同一接口 ({interface})")]
    SameInterface {
        interface: TypeKey,
        mapped_concrete: TypeKey,
        duplicate_concrete: TypeKey,
    },

    #[error("尝试将至少两个具体类型 ({mapped_concrete} 和 {duplicate_concrete}) 以相同的名称 ('{name}') 映射到接口 ({interface})")]
    SameName {
        interface: TypeKey,
        mapped_concrete: TypeKey,
        duplicate_concrete: TypeKey,
        name: String,
    },
}

impl DuplicateMappingError {
    /// 发生冲突的接口
    pub fn interface(&self) -> &TypeKey {
        match self {
            Self::SameInterface { interface, .. } | Self::SameName { interface, .. } => interface,
        }
    }

    /// 已注册的实现
    pub fn mapped_concrete(&self) -> &TypeKey {
        match self {
            Self::SameInterface {
                mapped_concrete, ..
            }
            | Self::SameName {
                mapped_concrete, ..
            } => mapped_concrete,
        }
    }

    /// 尝试注册的实现
    pub fn duplicate_concrete(&self) -> &TypeKey {
        match self {
            Self::SameInterface {
                duplicate_concrete,
                ..
            }
            | Self::SameName {
                duplicate_concrete,
                ..
            } => duplicate_concrete,
        }
    }

    /// 冲突的注册名称
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::SameInterface { .. } => None,
            Self::SameName { name, .. } => Some(name),
        }
    }
}

/// 注册表错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("注册被拒绝: {registered_type}, 原因: {message}")]
    RegistrationRejected {
        registered_type: TypeKey,
        message: String,
    },

    #[error("类型未注册: {type_name}")]
    NotRegistered { type_name: String },

    #[error("实例创建失败: {type_name}, 原因: {message}")]
    ActivationFailed { type_name: String, message: String },
}

/// 自动映射错误类型
#[derive(Error, Debug)]
pub enum AutomapperError {
    #[error("配置冲突: {source}")]
    Configuration {
        #[from]
        source: ConfigurationError,
    },

    #[error("重复映射: {source}")]
    DuplicateMapping {
        #[from]
        source: DuplicateMappingError,
    },

    #[error("注册表错误: {source}")]
    Registry {
        #[from]
        source: RegistryError,
    },

    #[error("类型单元不存在: {unit}")]
    UnitNotFound { unit: String },

    #[error("类型单元加载失败: {unit}, 原因: {message}")]
    UnitLoadFailed { unit: String, message: String },

    #[error("类型标识解析失败: '{input}', 原因: {message}")]
    TypeKeyParse { input: String, message: String },

    #[error("泛型参数无效: {type_name}, 原因: {message}")]
    InvalidGenericArguments { type_name: String, message: String },

    #[error("日志初始化失败: {message}")]
    LoggingInit { message: String },
}

impl AutomapperError {
    /// 创建类型单元不存在错误
    pub fn unit_not_found(unit: impl Into<String>) -> Self {
        Self::UnitNotFound { unit: unit.into() }
    }

    /// 创建类型单元加载失败错误
    pub fn unit_load_failed(unit: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnitLoadFailed {
            unit: unit.into(),
            message: message.into(),
        }
    }

    /// 重复映射错误的结构化字段
    pub fn as_duplicate_mapping(&self) -> Option<&DuplicateMappingError> {
        match self {
            Self::DuplicateMapping { source } => Some(source),
            _ => None,
        }
    }
}
