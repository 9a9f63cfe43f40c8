//! 注册跟踪器

use automapper_abstractions::{RegistrationKey, RegistrationRecord, TargetRegistry};
use std::collections::HashSet;

/// 注册跟踪器
///
/// 在处理前记录注册表中已有的注册键，处理后只返回新出现的键
#[derive(Debug, Clone, Default)]
pub struct RegistrationTracker {
    existing: HashSet<RegistrationKey>,
}

impl RegistrationTracker {
    /// 记录注册表当前状态
    pub fn snapshot<R>(registry: &R) -> Self
    where
        R: TargetRegistry + ?Sized,
    {
        Self {
            existing: registry
                .registrations()
                .iter()
                .map(RegistrationRecord::key)
                .collect(),
        }
    }

    /// 快照中已有的注册数量
    pub fn existing_count(&self) -> usize {
        self.existing.len()
    }

    /// 快照之后新增的注册，每个注册键只出现一次
    pub fn new_registrations<R>(&self, registry: &R) -> Vec<RegistrationRecord>
    where
        R: TargetRegistry + ?Sized,
    {
        let mut seen = HashSet::new();
        registry
            .registrations()
            .into_iter()
            .filter(|record| {
                let key = record.key();
                !self.existing.contains(&key) && seen.insert(key)
            })
            .collect()
    }
}
