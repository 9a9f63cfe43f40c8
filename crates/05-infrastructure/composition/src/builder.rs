//! 自动映射器构建器

use crate::engine::Automapper;
use automapper_abstractions::TypeUnitLoader;
use automapper_common::{AutomapperConfig, AutomapperError, AutomapperResult, MappingBehaviors};
use automapper_config::ManifestUnitLoader;
use automapper_impl::MappingController;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// 自动映射器构建器
///
/// 使用建造者模式组装映射行为、额外配置、单元加载器和日志
pub struct AutomapperBuilder {
    /// 默认映射行为
    behaviors: MappingBehaviors,
    /// 额外的显式配置
    configurations: Vec<AutomapperConfig>,
    /// 类型单元加载器
    unit_loader: Option<Arc<dyn TypeUnitLoader>>,
    /// 是否启用日志初始化
    logging_enabled: bool,
    /// 日志配置
    logging_config: LoggingConfig,
}

impl AutomapperBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self {
            behaviors: MappingBehaviors::empty(),
            configurations: Vec::new(),
            unit_loader: None,
            logging_enabled: false,
            logging_config: LoggingConfig::default(),
        }
    }

    /// 设置默认映射行为
    pub fn with_behaviors(mut self, behaviors: MappingBehaviors) -> Self {
        self.behaviors = behaviors;
        self
    }

    /// 默认启用多重映射
    pub fn multimap_by_default(mut self) -> Self {
        self.behaviors |= MappingBehaviors::MULTIMAP_BY_DEFAULT;
        self
    }

    /// 为多实现接口注册集合
    pub fn with_collection_registration(mut self) -> Self {
        self.behaviors |= MappingBehaviors::COLLECTION_REGISTRATION;
        self
    }

    /// 添加额外的显式配置
    pub fn with_configuration(mut self, config: AutomapperConfig) -> Self {
        debug!("添加显式配置: {} 条指令", config.directive_count());
        self.configurations.push(config);
        self
    }

    /// 设置类型单元加载器
    pub fn with_unit_loader(mut self, loader: Arc<dyn TypeUnitLoader>) -> Self {
        info!("使用类型单元加载器: {}", loader.name());
        self.unit_loader = Some(loader);
        self
    }

    /// 从目录中的清单文件加载类型单元
    pub fn with_manifest_root<P: AsRef<Path>>(self, root: P) -> Self {
        self.with_unit_loader(Arc::new(ManifestUnitLoader::new(root)))
    }

    /// 配置日志
    pub fn with_logging(mut self, config: LoggingConfig) -> Self {
        self.logging_config = config;
        self.logging_enabled = true;
        self
    }

    /// 构建自动映射器
    pub fn build(self) -> AutomapperResult<Automapper> {
        // 只有在明确配置了日志时才初始化日志
        if self.logging_enabled {
            self.initialize_logging()?;
        }

        let mut controller = self
            .configurations
            .into_iter()
            .fold(MappingController::new(), MappingController::with_configuration);
        if let Some(loader) = self.unit_loader {
            controller = controller.with_unit_loader(loader);
        }

        info!("自动映射器构建完成, 行为: {:?}", self.behaviors);
        Ok(Automapper::new(controller, self.behaviors))
    }

    /// 初始化日志系统
    fn initialize_logging(&self) -> AutomapperResult<()> {
        let config = &self.logging_config;
        let to_error = |message: String| AutomapperError::LoggingInit { message };

        let filter = EnvFilter::try_new(config.directives()).map_err(|e| to_error(e.to_string()))?;
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(config.show_target)
            .with_file(config.show_source_location)
            .with_line_number(config.show_source_location);

        if config.json_format {
            subscriber.json().try_init()
        } else {
            subscriber.try_init()
        }
        .map_err(|e| to_error(e.to_string()))?;

        info!("日志系统初始化完成: {}", config.directives());
        Ok(())
    }
}

impl Default for AutomapperBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AutomapperBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutomapperBuilder")
            .field("behaviors", &self.behaviors)
            .field("configurations", &self.configurations.len())
            .field(
                "unit_loader",
                &self.unit_loader.as_ref().map(|loader| loader.name().to_string()),
            )
            .field("logging_enabled", &self.logging_enabled)
            .field("logging_config", &self.logging_config)
            .finish()
    }
}

/// 自动映射相关 crate 的日志目标
const ENGINE_TARGETS: [&str; 5] = [
    "automapper",
    "automapper_common",
    "automapper_impl",
    "automapper_container",
    "automapper_config",
];

/// 日志配置
///
/// `level` 作用于全部日志目标，`engine_level` 只覆盖自动映射相关 crate
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// 全局日志级别
    pub level: tracing::Level,
    /// 自动映射 crate 的日志级别
    pub engine_level: Option<tracing::Level>,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否显示源文件和行号
    pub show_source_location: bool,
    /// 是否使用 JSON 格式
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::WARN,
            engine_level: None,
            show_target: true,
            show_source_location: false,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// 开发环境：输出每条绑定的名称、生命周期和注入决策
    pub fn development() -> Self {
        Self {
            level: tracing::Level::INFO,
            engine_level: Some(tracing::Level::DEBUG),
            show_target: true,
            show_source_location: true,
            json_format: false,
        }
    }

    /// 生产环境：只保留每次调用的汇总，JSON 输出
    pub fn production() -> Self {
        Self {
            level: tracing::Level::WARN,
            engine_level: Some(tracing::Level::INFO),
            show_target: false,
            show_source_location: false,
            json_format: true,
        }
    }

    /// 设置自动映射 crate 的日志级别
    pub fn with_engine_level(mut self, level: tracing::Level) -> Self {
        self.engine_level = Some(level);
        self
    }

    /// 生成 `EnvFilter` 指令
    pub fn directives(&self) -> String {
        let mut directives = vec![self.level.as_str().to_ascii_lowercase()];
        if let Some(level) = self.engine_level {
            let level = level.as_str().to_ascii_lowercase();
            directives.extend(ENGINE_TARGETS.iter().map(|target| format!("{target}={level}")));
        }
        directives.join(",")
    }
}
