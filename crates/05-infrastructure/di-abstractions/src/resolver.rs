//! 实例解析器抽象接口
//!
//! 集合门面在解析时通过它拉取某个接口的全部实现

use automapper_common::{RegistryError, TypeKey};
use std::any::Any;
use std::sync::Arc;

/// 解析出的实例
pub type Instance = Arc<dyn Any + Send + Sync>;

/// 实例解析器 trait
pub trait InstanceResolver: Send + Sync {
    /// 解析指定类型和名称的注册
    fn resolve(&self, registered_type: &TypeKey, name: Option<&str>) -> Result<Instance, RegistryError>;

    /// 按注册顺序解析指定类型的全部命名注册
    fn resolve_all(&self, registered_type: &TypeKey) -> Result<Vec<Instance>, RegistryError>;

    /// 解析并转换为具体类型
    fn resolve_as<T>(&self, registered_type: &TypeKey, name: Option<&str>) -> Result<Arc<T>, RegistryError>
    where
        T: Any + Send + Sync,
        Self: Sized,
    {
        self.resolve(registered_type, name)?
            .downcast::<T>()
            .map_err(|_| RegistryError::ActivationFailed {
                type_name: registered_type.to_string(),
                message: format!("类型转换失败: 期望 {}", std::any::type_name::<T>()),
            })
    }
}
