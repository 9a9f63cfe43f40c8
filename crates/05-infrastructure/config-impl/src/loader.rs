//! 清单单元加载器

use crate::manifest::{ManifestFormat, TypeManifest};
use automapper_abstractions::TypeUnitLoader;
use automapper_common::{AutomapperError, AutomapperResult, TypeDescriptor};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 清单单元加载器
///
/// 单元 `x` 对应根目录下第一个存在的 `x.toml`、`x.json`、`x.yaml` 或 `x.yml`
#[derive(Debug, Clone)]
pub struct ManifestUnitLoader {
    root: PathBuf,
}

impl ManifestUnitLoader {
    /// 创建新的清单单元加载器
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// 清单根目录
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 查找单元对应的清单文件
    pub fn locate(&self, unit: &str) -> Option<PathBuf> {
        ManifestFormat::EXTENSIONS
            .iter()
            .map(|extension| self.root.join(format!("{unit}.{extension}")))
            .find(|candidate| candidate.is_file())
    }
}

impl TypeUnitLoader for ManifestUnitLoader {
    fn load_types(&self, unit: &str) -> AutomapperResult<Vec<TypeDescriptor>> {
        let Some(path) = self.locate(unit) else {
            debug!("在 {} 下没有找到单元 {}", self.root.display(), unit);
            return Err(AutomapperError::unit_not_found(unit));
        };

        info!("加载清单单元: {} ({})", unit, path.display());
        let manifest = TypeManifest::from_path(&path).map_err(|e| e.into_unit_error(unit))?;
        Ok(manifest.to_descriptors(unit))
    }

    fn name(&self) -> &str {
        "ManifestUnitLoader"
    }
}
