//! 生命周期与注入成员

use serde::{Deserialize, Serialize};
use std::fmt;

/// 注册生命周期类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifetime {
    /// 单例模式 - 整个容器生命周期内只创建一个实例
    Singleton,
    /// 作用域模式 - 在同一作用域内共享实例
    Scoped,
    /// 瞬时模式 - 每次请求都创建新实例
    Transient,
    /// 每线程一个实例
    PerThread,
    /// 实例由外部控制
    External,
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::Transient
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Singleton => "singleton",
            Self::Scoped => "scoped",
            Self::Transient => "transient",
            Self::PerThread => "per_thread",
            Self::External => "external",
        };
        f.write_str(name)
    }
}

/// 注入成员
///
/// 注册时交给拦截层的指令，映射引擎只决定是否需要
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InjectionMember {
    /// 接口拦截器
    InterfaceInterceptor,
    /// 策略注入行为
    PolicyInjectionBehavior,
}

impl InjectionMember {
    /// 策略注入所需的全部成员
    pub fn policy_injection() -> Vec<Self> {
        vec![Self::InterfaceInterceptor, Self::PolicyInjectionBehavior]
    }
}
