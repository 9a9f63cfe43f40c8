//! 集合门面
//!
//! 绑定到注册表和接口类型的惰性序列，每次迭代都重新查询，
//! 因此门面创建之后注册的实现也能被看到

use automapper_abstractions::{Instance, InstanceResolver};
use automapper_common::{RegistryError, TypeKey};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 集合门面
#[derive(Clone)]
pub struct CollectionFacade {
    resolver: Arc<dyn InstanceResolver>,
    element: TypeKey,
}

impl CollectionFacade {
    /// 创建新的集合门面
    pub fn new(resolver: Arc<dyn InstanceResolver>, element: TypeKey) -> Self {
        Self { resolver, element }
    }

    /// 元素接口类型
    pub fn element_type(&self) -> &TypeKey {
        &self.element
    }

    /// 按注册顺序迭代当前全部命名实现
    pub fn iter(&self) -> Result<std::vec::IntoIter<Instance>, RegistryError> {
        Ok(self.resolver.resolve_all(&self.element)?.into_iter())
    }

    /// 当前实现数量
    pub fn count(&self) -> Result<usize, RegistryError> {
        Ok(self.iter()?.len())
    }

    /// 迭代并转换为具体类型，跳过类型不符的实例
    pub fn of_type<T>(&self) -> Result<Vec<Arc<T>>, RegistryError>
    where
        T: Any + Send + Sync,
    {
        Ok(self
            .iter()?
            .filter_map(|instance| instance.downcast::<T>().ok())
            .collect())
    }
}

impl fmt::Debug for CollectionFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionFacade")
            .field("element", &self.element)
            .field("resolver", &"<resolver>")
            .finish()
    }
}
