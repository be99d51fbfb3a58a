//! 依赖注入容器抽象接口
//!
//! 提供依赖注入容器的核心抽象

use crate::registry::TypeRegistry;
use crate::resolver::Resolver;
use infrastructure_common::{ContainerConfig, DependencyResult, Lifetime};

/// 依赖注入容器 trait
///
/// 组合类型注册、依赖解析和单例模式开关
pub trait DiContainer: TypeRegistry + Resolver {
    /// 开启单例模式，只影响之后的解析
    fn use_singleton(&self);

    /// 关闭单例模式，已缓存的实例保留
    ///
    /// 单例策略为 `Permanent` 且单例模式已开启时返回
    /// [`DependencyError::SingletonModeLocked`](infrastructure_common::DependencyError::SingletonModeLocked)。
    fn not_use_singleton(&self) -> DependencyResult<()>;

    /// 当前是否为单例模式
    fn is_singleton_mode(&self) -> bool;

    /// 当前解析使用的生命周期
    fn current_lifetime(&self) -> Lifetime {
        Lifetime::from(self.is_singleton_mode())
    }

    /// 容器配置
    fn config(&self) -> &ContainerConfig;

    /// 容器统计信息
    fn stats(&self) -> ContainerStats;
}

/// 容器统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerStats {
    /// 已注册类型数量
    pub registered_types: usize,
    /// 活跃单例数量
    pub active_singletons: usize,
    /// 成功的顶层解析次数
    pub resolved_instances: usize,
    /// 失败的顶层解析次数
    pub resolution_errors: usize,
}
