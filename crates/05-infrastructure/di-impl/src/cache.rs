//! 单例实例缓存

use dashmap::DashMap;
use di_abstractions::Instance;
use infrastructure_common::TypeKey;

/// 单例实例缓存
///
/// 以请求类型为键，每个键只保存第一次成功构造的实例。
#[derive(Debug, Default)]
pub(crate) struct InstanceCache {
    instances: DashMap<TypeKey, Instance>,
}

impl InstanceCache {
    /// 查找缓存的实例
    pub fn get(&self, key: &TypeKey) -> Option<Instance> {
        self.instances.get(key).map(|entry| entry.value().clone())
    }

    /// 仅在没有缓存时插入，返回是否插入成功
    pub fn store(&self, key: TypeKey, instance: Instance) -> bool {
        let mut inserted = false;
        self.instances.entry(key).or_insert_with(|| {
            inserted = true;
            instance
        });
        inserted
    }

    /// 缓存的实例数量
    pub fn len(&self) -> usize {
        self.instances.len()
    }
}
