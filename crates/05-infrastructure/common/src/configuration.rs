//! 容器配置
//!
//! 配置可以来自文件（按扩展名识别 toml / json / yaml）和带前缀的环境变量，
//! 环境变量覆盖文件中的同名项。

use crate::errors::{ConfigError, ConfigResult};
use crate::lifecycle::{Lifetime, SingletonPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, error};

/// 默认环境变量前缀，例如 `SIMPLE_IOC_MAX_RESOLUTION_DEPTH=64`
pub const ENV_PREFIX: &str = "SIMPLE_IOC";

/// 默认最大解析深度
pub const DEFAULT_MAX_RESOLUTION_DEPTH: usize = 100;

/// 循环依赖检测方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleDetection {
    /// 只比较当前顶层请求的根类型，只能发现自引用
    #[default]
    RootOnly,
    /// 跟踪完整的解析链，可以发现任意长度的循环
    FullChain,
}

/// 容器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 初始生命周期（`singleton` 等价于创建后立即开启单例模式）
    pub default_lifetime: Lifetime,
    /// 单例模式切换策略
    pub singleton_policy: SingletonPolicy,
    /// 循环依赖检测方式
    pub cycle_detection: CycleDetection,
    /// 最大解析深度
    pub max_resolution_depth: usize,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            default_lifetime: Lifetime::Transient,
            singleton_policy: SingletonPolicy::Switchable,
            cycle_detection: CycleDetection::RootOnly,
            max_resolution_depth: DEFAULT_MAX_RESOLUTION_DEPTH,
        }
    }
}

impl ContainerConfig {
    /// 从可选的配置文件和默认前缀的环境变量加载
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> ConfigResult<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    /// 只从环境变量加载
    pub fn from_env() -> ConfigResult<Self> {
        Self::load::<&Path>(None)
    }

    /// 从可选的配置文件和指定前缀的环境变量加载
    pub fn load_with_prefix<P: AsRef<Path>>(path: Option<P>, prefix: &str) -> ConfigResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            let path = path.as_ref();
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            debug!("加载容器配置文件: {}", path.display());
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| {
                error!("容器配置构建失败: {}", e);
                ConfigError::ParseError {
                    source: Box::new(e),
                }
            })?;

        let config: Self = settings.try_deserialize().map_err(|e| {
            error!("容器配置绑定失败: {}", e);
            ConfigError::ParseError {
                source: Box::new(e),
            }
        })?;

        config.validate()?;
        debug!("容器配置加载完成: {:?}", config);
        Ok(config)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_resolution_depth == 0 {
            return Err(ConfigError::ValidationError {
                message: "max_resolution_depth 必须大于 0".to_string(),
            });
        }
        Ok(())
    }

    /// 设置初始生命周期
    pub fn with_default_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.default_lifetime = lifetime;
        self
    }

    /// 设置单例切换策略
    pub fn with_singleton_policy(mut self, policy: SingletonPolicy) -> Self {
        self.singleton_policy = policy;
        self
    }

    /// 设置循环依赖检测方式
    pub fn with_cycle_detection(mut self, detection: CycleDetection) -> Self {
        self.cycle_detection = detection;
        self
    }

    /// 设置最大解析深度
    pub fn with_max_resolution_depth(mut self, depth: usize) -> Self {
        self.max_resolution_depth = depth;
        self
    }
}
