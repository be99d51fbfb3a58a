//! 容器构建器

use crate::container::SimpleContainer;
use di_abstractions::{Implements, TypeRegistry};
use infrastructure_common::{
    ConfigResult, ContainerConfig, CycleDetection, Lifetime, SingletonPolicy,
};
use tracing::info;

type Registrar = Box<dyn FnOnce(&SimpleContainer)>;

/// 容器构建器
///
/// 先收集配置和绑定，`build` 时验证配置并一次性注册。
pub struct DiContainerBuilder {
    config: ContainerConfig,
    registrations: Vec<Registrar>,
}

impl DiContainerBuilder {
    /// 创建使用默认配置、没有任何绑定的构建器
    pub fn new() -> Self {
        Self {
            config: ContainerConfig::default(),
            registrations: Vec::new(),
        }
    }

    /// 使用已有配置（例如从文件加载的配置）
    pub fn with_config(mut self, config: ContainerConfig) -> Self {
        self.config = config;
        self
    }

    /// 创建后是否立即开启单例模式
    pub fn singleton(mut self, enabled: bool) -> Self {
        self.config.default_lifetime = Lifetime::from(enabled);
        self
    }

    /// 单例切换策略
    pub fn singleton_policy(mut self, policy: SingletonPolicy) -> Self {
        self.config.singleton_policy = policy;
        self
    }

    /// 循环依赖检测方式
    pub fn cycle_detection(mut self, detection: CycleDetection) -> Self {
        self.config.cycle_detection = detection;
        self
    }

    /// 最大解析深度
    pub fn max_resolution_depth(mut self, depth: usize) -> Self {
        self.config.max_resolution_depth = depth;
        self
    }

    /// 添加绑定 `R -> I`
    pub fn register<R, I>(mut self) -> Self
    where
        R: ?Sized + Send + Sync + 'static,
        I: Implements<R>,
    {
        self.registrations
            .push(Box::new(|container: &SimpleContainer| container.register::<R, I>()));
        self
    }

    /// 构建容器
    pub fn build(self) -> ConfigResult<SimpleContainer> {
        self.config.validate()?;

        let container = SimpleContainer::with_config(self.config);
        let registration_count = self.registrations.len();
        for registrar in self.registrations {
            registrar(&container);
        }

        info!("构建容器完成，注册了 {} 个绑定", registration_count);
        Ok(container)
    }
}

impl Default for DiContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
