//! 容器实现

use crate::builder::DiContainerBuilder;
use crate::cache::InstanceCache;
use crate::engine::ConstructionEngine;
use crate::registry::{Registration, RegistryStore};
use di_abstractions::{
    downcast_instance, ContainerStats, DiContainer, Implements, Instance, ResolveContext,
    ResolveOptions, Resolver, TypeRegistry,
};
use infrastructure_common::{
    ContainerConfig, DependencyError, DependencyResult, SingletonPolicy, TypeKey,
};
use parking_lot::ReentrantMutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 简单的依赖注入容器
///
/// 基于构造函数注入，支持单例模式和属性注入。
/// 容器是普通的值，需要共享时用 `Arc<SimpleContainer>`。
///
/// # 示例
///
/// ```rust,ignore
/// let container = SimpleContainer::create_instance();
/// container.register::<dyn Logger, ConsoleLogger>();
/// container.register::<dyn Service, ServiceImpl>();
///
/// let service = container.resolve::<dyn Service>()?;
/// ```
pub struct SimpleContainer {
    /// 类型注册表
    registry: RegistryStore,
    /// 单例实例缓存
    cache: InstanceCache,
    /// 是否为单例模式
    singleton: AtomicBool,
    /// 顶层解析互斥，保证单例的检查与写入是原子的
    gate: ReentrantMutex<()>,
    /// 容器配置
    config: ContainerConfig,
    resolved: AtomicUsize,
    errors: AtomicUsize,
}

impl SimpleContainer {
    /// 创建容器
    pub fn create_instance() -> Self {
        Self::new()
    }

    /// 创建使用默认配置的容器
    pub fn new() -> Self {
        Self::with_config(ContainerConfig::default())
    }

    /// 使用指定配置创建容器
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            registry: RegistryStore::default(),
            cache: InstanceCache::default(),
            singleton: AtomicBool::new(config.default_lifetime.is_singleton()),
            gate: ReentrantMutex::new(()),
            config,
            resolved: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
        }
    }

    /// 创建构建器
    pub fn builder() -> DiContainerBuilder {
        DiContainerBuilder::new()
    }
}

impl Default for SimpleContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SimpleContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleContainer")
            .field("registered_types", &self.registry.len())
            .field("active_singletons", &self.cache.len())
            .field("singleton", &self.is_singleton_mode())
            .field("config", &self.config)
            .finish()
    }
}

impl TypeRegistry for SimpleContainer {
    fn register<R, I>(&self)
    where
        R: ?Sized + Send + Sync + 'static,
        I: Implements<R>,
    {
        let registration = Registration::of::<R, I>();
        let binding = registration.binding;
        info!("注册类型绑定: {} -> {}", binding.requested, binding.implementation);
        if binding.is_self_binding() {
            warn!("{} 绑定到自身，解析时会报告循环依赖", binding.requested);
        }

        if let Some(previous) = self.registry.insert(registration) {
            debug!(
                "覆盖已有绑定: {} -> {}",
                previous.requested, previous.implementation
            );
        }
    }

    fn is_registered_by_key(&self, key: &TypeKey) -> bool {
        self.registry.contains(key)
    }

    fn get_all_registered_types(&self) -> HashMap<TypeKey, TypeKey> {
        self.registry.snapshot()
    }
}

impl Resolver for SimpleContainer {
    fn resolve<T>(&self) -> DependencyResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = TypeKey::of::<T>();
        let instance = self.resolve_by_key(key)?;
        downcast_instance::<T>(&instance).ok_or_else(|| DependencyError::TypeMismatch {
            type_name: key.name().to_string(),
        })
    }

    fn resolve_by_key(&self, key: TypeKey) -> DependencyResult<Instance> {
        let _gate = self.gate.lock();

        let result = if self.registry.is_empty() {
            Err(DependencyError::EmptyRegistry)
        } else {
            let engine =
                ConstructionEngine::new(&self.registry, &self.cache, self.is_singleton_mode());
            let mut context = ResolveContext::new(key, ResolveOptions::from(&self.config));
            engine.resolve_parameter(key, &mut context)
        };

        match &result {
            Ok(_) => {
                self.resolved.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                self.errors.fetch_add(1, Ordering::Relaxed);
                warn!("解析 {} 失败: {}", key, e);
            }
        }
        result
    }
}

impl DiContainer for SimpleContainer {
    fn use_singleton(&self) {
        if !self.singleton.swap(true, Ordering::SeqCst) {
            info!("开启单例模式");
        }
    }

    fn not_use_singleton(&self) -> DependencyResult<()> {
        if self.config.singleton_policy == SingletonPolicy::Permanent && self.is_singleton_mode() {
            warn!("单例模式已锁定，忽略关闭请求");
            return Err(DependencyError::SingletonModeLocked);
        }

        if self.singleton.swap(false, Ordering::SeqCst) {
            info!("关闭单例模式，已缓存实例 {} 个", self.cache.len());
        }
        Ok(())
    }

    fn is_singleton_mode(&self) -> bool {
        self.singleton.load(Ordering::SeqCst)
    }

    fn config(&self) -> &ContainerConfig {
        &self.config
    }

    fn stats(&self) -> ContainerStats {
        ContainerStats {
            registered_types: self.registry.len(),
            active_singletons: self.cache.len(),
            resolved_instances: self.resolved.load(Ordering::Relaxed),
            resolution_errors: self.errors.load(Ordering::Relaxed),
        }
    }
}
