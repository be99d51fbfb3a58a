//! 构造引擎
//!
//! 深度优先地构造对象图：
//!
//! 1. 单例模式下命中缓存直接返回
//! 2. 查找绑定，不存在则报 `NotRegistered`
//! 3. 循环依赖检查
//! 4. 选择参数最多的构造函数
//! 5. 从左到右递归解析每个参数
//! 6. 调用构造函数
//! 7. 属性注入
//! 8. 单例模式下写入缓存（已有缓存时不覆盖）

use crate::cache::InstanceCache;
use crate::injector::PropertyInjector;
use crate::registry::{Registration, RegistryStore};
use di_abstractions::{Instance, ResolveContext};
use infrastructure_common::{DependencyError, DependencyResult, TypeKey};
use tracing::{debug, trace};

/// 构造引擎
///
/// 单次顶层解析期间借用容器的注册表和缓存。
pub(crate) struct ConstructionEngine<'a> {
    registry: &'a RegistryStore,
    cache: &'a InstanceCache,
    singleton: bool,
}

impl<'a> ConstructionEngine<'a> {
    /// 创建构造引擎
    pub fn new(registry: &'a RegistryStore, cache: &'a InstanceCache, singleton: bool) -> Self {
        Self {
            registry,
            cache,
            singleton,
        }
    }

    /// 解析一个类型，参数和属性的依赖也经由这里递归解析
    pub fn resolve_parameter(
        &self,
        key: TypeKey,
        context: &mut ResolveContext,
    ) -> DependencyResult<Instance> {
        if self.singleton {
            if let Some(instance) = self.cache.get(&key) {
                debug!("命中单例缓存: {}", key);
                return Ok(instance);
            }
        }

        trace!("解析 {}，根类型 {}", key, context.root());
        let registration = self
            .registry
            .get(&key)
            .ok_or_else(|| DependencyError::not_registered(&key))?;

        context.push_type(registration.binding.implementation)?;
        let result = self.construct(key, &registration, context);
        context.pop_type();
        let instance = result?;

        if self.singleton && self.cache.store(key, instance.clone()) {
            debug!("缓存单例实例: {}", key);
        }

        Ok(instance)
    }

    fn construct(
        &self,
        key: TypeKey,
        registration: &Registration,
        context: &mut ResolveContext,
    ) -> DependencyResult<Instance> {
        let activator = registration.activator.as_ref();
        let implementation = registration.binding.implementation;

        let constructor = activator.select_constructor().ok_or_else(|| {
            DependencyError::resolution(
                key.name(),
                format!("{} 没有可用的构造函数", implementation.name()),
            )
        })?;
        debug!(
            "构造 {} -> {}，使用 {} 个参数的构造函数",
            key,
            implementation,
            constructor.arity()
        );

        let mut arguments = Vec::with_capacity(constructor.arity());
        for parameter in &constructor.parameters {
            trace!("解析构造参数: {} <- {}", implementation, parameter);
            let argument = self
                .resolve_parameter(*parameter, context)
                .map_err(|e| DependencyError::resolution(key.name(), e))?;
            arguments.push(argument);
        }

        let mut value = activator
            .instantiate(&constructor, arguments)
            .map_err(|e| DependencyError::resolution(key.name(), e))?;

        PropertyInjector::new(self).inject(key, activator, value.as_mut(), context)?;

        activator
            .seal(value)
            .map_err(|e| DependencyError::resolution(key.name(), e))
    }
}
