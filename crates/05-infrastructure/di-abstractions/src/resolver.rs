//! 依赖解析器抽象接口
//!
//! 提供依赖解析和解析上下文

use crate::factory::Instance;
use infrastructure_common::{
    ContainerConfig, CycleDetection, DependencyError, DependencyResult, TypeKey,
    DEFAULT_MAX_RESOLUTION_DEPTH,
};
use std::sync::Arc;

/// 依赖解析器 trait
///
/// 负责解析类型依赖并创建实例
pub trait Resolver {
    /// 解析指定类型
    fn resolve<T>(&self) -> DependencyResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static;

    /// 解析指定类型（使用 TypeKey），返回类型擦除的实例
    fn resolve_by_key(&self, key: TypeKey) -> DependencyResult<Instance>;

    /// 解析指定类型，失败时返回 `None`
    fn try_resolve<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolve::<T>().ok()
    }
}

/// 解析选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// 循环依赖检测方式
    pub cycle_detection: CycleDetection,
    /// 最大递归深度
    pub max_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            cycle_detection: CycleDetection::RootOnly,
            max_depth: DEFAULT_MAX_RESOLUTION_DEPTH,
        }
    }
}

impl From<&ContainerConfig> for ResolveOptions {
    fn from(config: &ContainerConfig) -> Self {
        Self {
            cycle_detection: config.cycle_detection,
            max_depth: config.max_resolution_depth,
        }
    }
}

/// 解析上下文
///
/// 每次顶层解析创建一个，结束后丢弃。
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// 顶层请求的根类型
    root: TypeKey,
    /// 当前正在构造的实现类型链
    resolution_chain: Vec<TypeKey>,
    /// 解析选项
    options: ResolveOptions,
}

impl ResolveContext {
    /// 创建新的解析上下文
    pub fn new(root: TypeKey, options: ResolveOptions) -> Self {
        Self {
            root,
            resolution_chain: Vec::new(),
            options,
        }
    }

    /// 根类型
    pub fn root(&self) -> TypeKey {
        self.root
    }

    /// 当前深度
    pub fn depth(&self) -> usize {
        self.resolution_chain.len()
    }

    /// 当前解析链
    pub fn chain(&self) -> &[TypeKey] {
        &self.resolution_chain
    }

    /// 进入实现类型的构造
    ///
    /// 实现类型等于根类型时视为循环依赖；`FullChain` 模式下
    /// 实现类型已经在解析链中也视为循环依赖。
    pub fn push_type(&mut self, implementation: TypeKey) -> Result<(), DependencyError> {
        let revisits_chain = self.options.cycle_detection == CycleDetection::FullChain
            && self.resolution_chain.contains(&implementation);

        if implementation == self.root || revisits_chain {
            return Err(DependencyError::Circulation {
                type_name: implementation.name().to_string(),
                dependency_chain: self.describe_chain(implementation),
            });
        }

        if self.resolution_chain.len() >= self.options.max_depth {
            return Err(DependencyError::DepthExceeded {
                type_name: implementation.name().to_string(),
                depth: self.options.max_depth,
            });
        }

        self.resolution_chain.push(implementation);
        Ok(())
    }

    /// 从解析链中移除类型
    pub fn pop_type(&mut self) {
        self.resolution_chain.pop();
    }

    fn describe_chain(&self, next: TypeKey) -> String {
        std::iter::once(self.root)
            .chain(self.resolution_chain.iter().copied())
            .chain(std::iter::once(next))
            .map(|key| key.short_name())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
