//! 内存容器

use crate::facade::CollectionFacade;
use automapper_abstractions::{
    Instance, InstanceResolver, RegistrationKey, RegistrationRecord, TargetRegistry,
};
use automapper_common::{Lifetime, RegistryError, TypeKey};
use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// 实例激活函数，参数为要创建的具体类型（开放泛型激活函数会收到封闭后的类型）
pub type Activator = Arc<dyn Fn(&TypeKey) -> Instance + Send + Sync>;

#[derive(Default)]
struct ContainerState {
    registrations: Vec<RegistrationRecord>,
    activators: HashMap<TypeKey, Activator>,
    instances: HashMap<RegistrationKey, Instance>,
    singletons: HashMap<RegistrationKey, Instance>,
    interception_enabled: bool,
}

/// 解析计划：在锁外执行激活
enum Plan {
    Ready(Instance),
    Collection(TypeKey),
    Activate {
        target: TypeKey,
        activator: Activator,
        cache_key: Option<RegistrationKey>,
    },
}

/// 内存容器
///
/// 克隆共享同一份状态。相同的 (类型, 名称) 注册会原位替换之前的注册。
#[derive(Clone, Default)]
pub struct InMemoryContainer {
    state: Arc<RwLock<ContainerState>>,
}

impl InMemoryContainer {
    /// 创建新的容器
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(ContainerState::default())),
        }
    }

    /// 注册具体类型的激活函数
    pub fn register_activator<F>(&self, concrete: TypeKey, activator: F)
    where
        F: Fn(&TypeKey) -> Instance + Send + Sync + 'static,
    {
        debug!("注册激活函数: {}", concrete);
        self.state
            .write()
            .activators
            .insert(concrete, Arc::new(activator));
    }

    /// 用 `Default` 构造具体类型
    pub fn register_default<T>(&self, concrete: TypeKey)
    where
        T: Default + Any + Send + Sync,
    {
        self.register_activator(concrete, |_| Arc::new(T::default()) as Instance);
    }

    /// 添加激活函数（构建器形式）
    pub fn with_activator<F>(self, concrete: TypeKey, activator: F) -> Self
    where
        F: Fn(&TypeKey) -> Instance + Send + Sync + 'static,
    {
        self.register_activator(concrete, activator);
        self
    }

    /// 注册现成的实例
    pub fn register_instance(&self, registered_type: TypeKey, name: Option<String>, instance: Instance) {
        let record = RegistrationRecord::new(registered_type.clone(), registered_type)
            .with_name(name)
            .with_lifetime(Lifetime::External);
        let key = record.key();
        info!("注册实例: {}", key);

        let mut state = self.state.write();
        Self::upsert(&mut state, record);
        state.instances.insert(key, instance);
    }

    /// 指定接口的集合门面
    pub fn resolve_collection(&self, element: &TypeKey) -> CollectionFacade {
        CollectionFacade::new(Arc::new(self.clone()), element.clone())
    }

    /// 注册数量
    pub fn len(&self) -> usize {
        self.state.read().registrations.len()
    }

    /// 是否没有任何注册
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 查找注册
    pub fn registration(&self, registered_type: &TypeKey, name: Option<&str>) -> Option<RegistrationRecord> {
        self.state
            .read()
            .registrations
            .iter()
            .find(|record| &record.registered_type == registered_type && record.name.as_deref() == name)
            .cloned()
    }

    fn upsert(state: &mut ContainerState, record: RegistrationRecord) {
        let key = record.key();
        state.singletons.remove(&key);
        match state
            .registrations
            .iter_mut()
            .find(|existing| existing.key() == key)
        {
            Some(existing) => *existing = record,
            None => state.registrations.push(record),
        }
    }

    fn plan(&self, registered_type: &TypeKey, name: Option<&str>) -> Result<Plan, RegistryError> {
        let state = self.state.read();
        let find = |key: &TypeKey| {
            state
                .registrations
                .iter()
                .find(|record| &record.registered_type == key && record.name.as_deref() == name)
        };

        let (record, target) = match find(registered_type) {
            Some(record) => (record, record.mapped_to.clone()),
            None if registered_type.is_generic() && !registered_type.is_generic_definition() => {
                let record = find(&registered_type.definition()).ok_or_else(|| not_registered(registered_type, name))?;
                let target = if record.mapped_to.is_generic_definition() {
                    record
                        .mapped_to
                        .make_generic(registered_type.arguments())
                        .map_err(|e| RegistryError::ActivationFailed {
                            type_name: registered_type.to_string(),
                            message: e.to_string(),
                        })?
                } else {
                    record.mapped_to.clone()
                };
                (record, target)
            }
            None => return Err(not_registered(registered_type, name)),
        };

        let cache_key = RegistrationKey {
            registered_type: registered_type.clone(),
            name: name.map(ToString::to_string),
        };

        if let Some(instance) = state.instances.get(&record.key()) {
            return Ok(Plan::Ready(instance.clone()));
        }
        if target.is_collection_facade() {
            if let Some(element) = target.arguments().first() {
                return Ok(Plan::Collection(element.clone()));
            }
        }
        if record.lifetime == Lifetime::Singleton {
            if let Some(instance) = state.singletons.get(&cache_key) {
                return Ok(Plan::Ready(instance.clone()));
            }
        }

        let activator = state
            .activators
            .get(&target)
            .or_else(|| state.activators.get(&target.definition()))
            .cloned()
            .ok_or_else(|| RegistryError::ActivationFailed {
                type_name: target.to_string(),
                message: "没有可用的激活函数".to_string(),
            })?;

        Ok(Plan::Activate {
            target,
            activator,
            cache_key: (record.lifetime == Lifetime::Singleton).then_some(cache_key),
        })
    }
}

fn not_registered(registered_type: &TypeKey, name: Option<&str>) -> RegistryError {
    let type_name = match name {
        Some(name) => format!("{registered_type} ('{name}')"),
        None => registered_type.to_string(),
    };
    RegistryError::NotRegistered { type_name }
}

impl TargetRegistry for InMemoryContainer {
    fn register_binding(&mut self, record: RegistrationRecord) -> Result<(), RegistryError> {
        debug!("提交注册: {} -> {}", record.key(), record.mapped_to);
        let mut state = self.state.write();
        Self::upsert(&mut state, record);
        Ok(())
    }

    fn registrations(&self) -> Vec<RegistrationRecord> {
        self.state.read().registrations.clone()
    }

    fn enable_interception(&mut self) {
        self.state.write().interception_enabled = true;
    }

    fn is_interception_enabled(&self) -> bool {
        self.state.read().interception_enabled
    }
}

impl InstanceResolver for InMemoryContainer {
    fn resolve(&self, registered_type: &TypeKey, name: Option<&str>) -> Result<Instance, RegistryError> {
        match self.plan(registered_type, name)? {
            Plan::Ready(instance) => Ok(instance),
            Plan::Collection(element) => Ok(Arc::new(self.resolve_collection(&element)) as Instance),
            Plan::Activate {
                target,
                activator,
                cache_key,
            } => {
                let instance = activator(&target);
                if let Some(cache_key) = cache_key {
                    let mut state = self.state.write();
                    let cached = state.singletons.entry(cache_key).or_insert(instance);
                    return Ok(cached.clone());
                }
                Ok(instance)
            }
        }
    }

    fn resolve_all(&self, registered_type: &TypeKey) -> Result<Vec<Instance>, RegistryError> {
        let names: Vec<String> = self
            .state
            .read()
            .registrations
            .iter()
            .filter(|record| &record.registered_type == registered_type)
            .filter_map(|record| record.name.clone())
            .collect();

        names
            .iter()
            .map(|name| self.resolve(registered_type, Some(name)))
            .collect()
    }
}

impl fmt::Debug for InMemoryContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("InMemoryContainer")
            .field("registrations", &state.registrations)
            .field("activators", &state.activators.len())
            .field("interception_enabled", &state.interception_enabled)
            .finish()
    }
}
