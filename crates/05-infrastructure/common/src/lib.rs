//! # Infrastructure Common
//!
//! 这个 crate 提供了 Simple IoC 容器各层共用的类型和工具。
//!
//! ## 核心内容
//!
//! - [`TypeKey`] - 类型标识，注册表与实例缓存的键
//! - [`Binding`] - 请求类型到实现类型的绑定
//! - [`DependencyError`] - 依赖解析错误分类
//! - [`Lifetime`] - 单例 / 瞬时生命周期
//! - [`ContainerConfig`] - 容器配置及加载
//!
//! ## 设计原则
//!
//! - 基于 Rust 类型系统的编译时安全
//! - 显式的错误返回，不在内部吞掉错误
//! - 没有全局状态，容器是显式创建的值

pub mod configuration;
pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use configuration::*;
pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
