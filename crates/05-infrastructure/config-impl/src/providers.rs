//! 清单配置提供者

use crate::manifest::ConfigSection;
use automapper_common::{AutomapperConfig, AutomapperConfigProvider};

/// 清单配置提供者
///
/// 把清单文件中的 `config` 节转换为映射配置
#[derive(Debug, Clone, Default)]
pub struct ManifestConfigProvider {
    section: ConfigSection,
}

impl ManifestConfigProvider {
    /// 创建新的清单配置提供者
    pub fn new(section: ConfigSection) -> Self {
        Self { section }
    }

    /// 配置节
    pub fn section(&self) -> &ConfigSection {
        &self.section
    }
}

impl AutomapperConfigProvider for ManifestConfigProvider {
    fn create_configuration(&self) -> AutomapperConfig {
        let section = &self.section;
        let config = AutomapperConfig::new()
            .and_do_not_map_for(section.do_not_map.iter().cloned())
            .and_use_multimapping_for(section.multimap.iter().cloned())
            .and_use_policy_injection_for(section.policy_injection.iter().cloned())
            .and_map_as_singleton(section.singletons.iter().cloned());

        let config = section.named.iter().fold(config, |config, entry| {
            config.and_use_named_mapping_for(entry.type_name.clone(), entry.name.clone())
        });

        section.lifetimes.iter().fold(config, |config, entry| {
            config.and_map_with_lifetime(entry.type_name.clone(), entry.lifetime)
        })
    }
}
