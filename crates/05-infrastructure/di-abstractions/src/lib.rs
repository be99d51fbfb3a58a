//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义类型注册和依赖解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`Injectable`] - 可由容器构造的类型
//! - [`Implements`] - 实现类型到请求类型（通常是 `dyn Trait`）的转换
//! - [`TypeDescriptor`] - 构造函数与属性的声明
//! - [`TypeRegistry`] - 类型注册表接口
//! - [`Resolver`] - 依赖解析器接口
//! - [`DiContainer`] - 完整的容器接口

pub mod container;
pub mod descriptor;
pub mod factory;
pub mod registry;
pub mod resolver;

pub use container::*;
pub use descriptor::*;
pub use factory::*;
pub use registry::*;
pub use resolver::*;

pub use infrastructure_common::{
    ArgumentError, Binding, BoxError, DependencyError, DependencyResult, TypeKey,
};
