//! 目标注册表抽象接口

use automapper_common::{InjectionMember, Lifetime, RegistryError, TypeKey};
use std::fmt;

/// 注册键
///
/// 注册表中一条注册的身份：注册类型加可选名称
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistrationKey {
    /// 注册类型
    pub registered_type: TypeKey,
    /// 注册名称，`None` 为默认注册
    pub name: Option<String>,
}

impl fmt::Display for RegistrationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ('{}')", self.registered_type, name),
            None => write!(f, "{}", self.registered_type),
        }
    }
}

/// 注册记录
///
/// 已提交到注册表的绑定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecord {
    /// 注册类型
    pub registered_type: TypeKey,
    /// 注册名称
    pub name: Option<String>,
    /// 映射到的类型
    pub mapped_to: TypeKey,
    /// 生命周期
    pub lifetime: Lifetime,
    /// 注入成员
    pub injection_members: Vec<InjectionMember>,
}

impl RegistrationRecord {
    /// 创建新的注册记录
    pub fn new(registered_type: TypeKey, mapped_to: TypeKey) -> Self {
        Self {
            registered_type,
            name: None,
            mapped_to,
            lifetime: Lifetime::default(),
            injection_members: Vec::new(),
        }
    }

    /// 设置名称
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// 设置生命周期
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// 设置注入成员
    pub fn with_injection_members(mut self, members: Vec<InjectionMember>) -> Self {
        self.injection_members = members;
        self
    }

    /// 注册键
    pub fn key(&self) -> RegistrationKey {
        RegistrationKey {
            registered_type: self.registered_type.clone(),
            name: self.name.clone(),
        }
    }

    /// 是否为命名注册
    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }
}

/// 目标注册表 trait
///
/// 映射引擎在一次调用期间独占写入注册表
pub trait TargetRegistry: Send + Sync {
    /// 提交一条绑定
    fn register_binding(&mut self, record: RegistrationRecord) -> Result<(), RegistryError>;

    /// 列出全部注册
    fn registrations(&self) -> Vec<RegistrationRecord>;

    /// 启用拦截扩展
    fn enable_interception(&mut self);

    /// 拦截扩展是否已启用
    fn is_interception_enabled(&self) -> bool;

    /// 列出指定类型的全部注册
    fn registrations_for(&self, registered_type: &TypeKey) -> Vec<RegistrationRecord> {
        self.registrations()
            .into_iter()
            .filter(|record| &record.registered_type == registered_type)
            .collect()
    }

    /// 检查注册键是否存在
    fn is_registered(&self, key: &RegistrationKey) -> bool {
        self.registrations().iter().any(|record| record.key() == *key)
    }
}
