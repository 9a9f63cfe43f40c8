//! 内存类型单元目录

use automapper_abstractions::TypeUnitLoader;
use automapper_common::{AutomapperError, AutomapperResult, TypeDescriptor};
use std::collections::HashMap;
use tracing::debug;

/// 内存类型单元目录
#[derive(Debug, Clone, Default)]
pub struct InMemoryUnitCatalog {
    units: HashMap<String, Vec<TypeDescriptor>>,
}

impl InMemoryUnitCatalog {
    /// 创建空目录
    pub fn new() -> Self {
        Self {
            units: HashMap::new(),
        }
    }

    /// 添加单元，同名单元会被替换
    pub fn with_unit(mut self, name: impl Into<String>, types: Vec<TypeDescriptor>) -> Self {
        self.units.insert(name.into(), types);
        self
    }

    /// 是否包含单元
    pub fn contains(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }
}

impl TypeUnitLoader for InMemoryUnitCatalog {
    fn load_types(&self, unit: &str) -> AutomapperResult<Vec<TypeDescriptor>> {
        debug!("加载内存类型单元: {}", unit);
        self.units
            .get(unit)
            .cloned()
            .ok_or_else(|| AutomapperError::unit_not_found(unit))
    }

    fn name(&self) -> &str {
        "InMemoryUnitCatalog"
    }
}
