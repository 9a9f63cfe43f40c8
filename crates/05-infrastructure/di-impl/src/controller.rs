//! 映射控制器
//!
//! 自动映射的入口：构建配置、生成绑定并交给处理器提交

use crate::factory::TypeMappingFactory;
use crate::handler::TypeMappingHandler;
use crate::handling::{
    ConfigLifetimeFactory, ConfigRegistrationNameFactory, ConfigTypeMappingValidator,
    PolicyInjectionMemberFactory, TypeCatalog,
};
use automapper_abstractions::{RegistrationRecord, TargetRegistry, TypeUnitLoader};
use automapper_common::{
    AutomapperConfig, AutomapperError, AutomapperResult, ConfigurationError, MappingBehaviors,
    TypeDescriptor,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// 映射控制器
#[derive(Clone)]
pub struct MappingController {
    configurations: Vec<AutomapperConfig>,
    unit_loader: Option<Arc<dyn TypeUnitLoader>>,
    factory: TypeMappingFactory,
}

impl MappingController {
    /// 创建新的映射控制器
    pub fn new() -> Self {
        Self {
            configurations: Vec::new(),
            unit_loader: None,
            factory: TypeMappingFactory::new(),
        }
    }

    /// 添加额外的显式配置，每次调用都会合并
    pub fn with_configuration(mut self, config: AutomapperConfig) -> Self {
        self.configurations.push(config);
        self
    }

    /// 设置类型单元加载器
    pub fn with_unit_loader(mut self, loader: Arc<dyn TypeUnitLoader>) -> Self {
        self.unit_loader = Some(loader);
        self
    }

    /// 构建本次调用的配置
    ///
    /// 类型标记、类型集合中发现的配置提供者以及额外配置全部合并后校验
    pub fn build_configuration(
        &self,
        types: &[TypeDescriptor],
    ) -> Result<AutomapperConfig, ConfigurationError> {
        let mut config = AutomapperConfig::from_types(types);

        for descriptor in types {
            if let Some(provider) = &descriptor.config_provider {
                debug!("合并配置提供者: {}", descriptor.key);
                config = config.merge_with(provider.create_configuration());
            }
        }

        for extra in &self.configurations {
            config = config.merge_with(extra.clone());
        }

        if let Err(e) = config.validate() {
            error!("配置校验失败: {}", e);
            return Err(e);
        }

        debug!("配置构建完成: {} 条指令", config.directive_count());
        Ok(config)
    }

    /// 注册类型集合，返回本次新增的注册
    pub fn register_types<R>(
        &self,
        registry: &mut R,
        behaviors: MappingBehaviors,
        types: &[TypeDescriptor],
    ) -> AutomapperResult<Vec<RegistrationRecord>>
    where
        R: TargetRegistry + ?Sized,
    {
        info!("开始自动映射: {} 个类型, 行为: {:?}", types.len(), behaviors);

        let config = self.build_configuration(types)?;
        let mappings = self.factory.create_mappings(types, behaviors, &config);
        debug!("生成 {} 条绑定", mappings.len());

        let names = ConfigRegistrationNameFactory::new(&config, behaviors, &mappings);
        let validator = ConfigTypeMappingValidator::new(&config, behaviors, &names);
        let lifetimes = ConfigLifetimeFactory::new(&config);
        let injection = PolicyInjectionMemberFactory::new(&config, TypeCatalog::new(types));

        TypeMappingHandler::new(&validator, &names, &lifetimes, &injection)
            .handle(&mappings, registry)
    }

    /// 加载并注册指定单元中的全部类型
    ///
    /// 所有单元加载成功后才开始注册，任一单元缺失时不会注册任何类型
    pub fn register_units<R>(
        &self,
        registry: &mut R,
        behaviors: MappingBehaviors,
        units: &[&str],
    ) -> AutomapperResult<Vec<RegistrationRecord>>
    where
        R: TargetRegistry + ?Sized,
    {
        let types = self.load_units(units)?;
        self.register_types(registry, behaviors, &types)
    }

    /// 加载指定单元中的全部类型
    pub fn load_units(&self, units: &[&str]) -> AutomapperResult<Vec<TypeDescriptor>> {
        if units.is_empty() {
            return Ok(Vec::new());
        }
        let Some(loader) = &self.unit_loader else {
            warn!("未配置类型单元加载器");
            return Err(AutomapperError::unit_not_found(units[0]));
        };

        let mut types = Vec::new();
        for unit in units {
            let loaded = loader.load_types(unit)?;
            info!("从单元 {} 加载了 {} 个类型 ({})", unit, loaded.len(), loader.name());
            types.extend(loaded);
        }
        Ok(types)
    }
}

impl Default for MappingController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MappingController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingController")
            .field("configurations", &self.configurations.len())
            .field(
                "unit_loader",
                &self.unit_loader.as_ref().map(|loader| loader.name().to_string()),
            )
            .finish()
    }
}
