//! 错误类型定义

use crate::metadata::TypeKey;
use thiserror::Error;

/// 装箱的错误来源
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置解析失败: {source}")]
    ParseError { source: BoxError },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("容器中还没有注册任何类型")]
    EmptyRegistry,

    #[error("类型未注册: {type_name}")]
    NotRegistered { type_name: String },

    #[error("检测到循环依赖: {type_name} ({dependency_chain})")]
    Circulation {
        type_name: String,
        dependency_chain: String,
    },

    #[error("类型无法解析: {type_name}, 原因: {source}")]
    Resolution { type_name: String, source: BoxError },

    #[error("解析深度超过上限 {depth}: {type_name}")]
    DepthExceeded { type_name: String, depth: usize },

    #[error("单例模式已锁定，无法关闭")]
    SingletonModeLocked,

    #[error("实例类型不匹配: 期望 {type_name}")]
    TypeMismatch { type_name: String },
}

impl DependencyError {
    /// 创建未注册错误
    pub fn not_registered(key: &TypeKey) -> Self {
        Self::NotRegistered {
            type_name: key.name().to_string(),
        }
    }

    /// 创建解析错误，包装原始原因
    pub fn resolution(type_name: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Resolution {
            type_name: type_name.into(),
            source: source.into(),
        }
    }

    /// 沿着嵌套的 `Resolution` 找到最初的依赖错误
    ///
    /// 来源不是 `DependencyError`（例如构造函数自身返回的错误）时，
    /// 停在最内层的 `Resolution` 上。
    pub fn root_cause(&self) -> &DependencyError {
        let mut current = self;
        while let Self::Resolution { source, .. } = current {
            match source.downcast_ref::<DependencyError>() {
                Some(inner) => current = inner,
                None => break,
            }
        }
        current
    }

    /// 是否为循环依赖错误（包括被包装的情况）
    pub fn is_circulation(&self) -> bool {
        matches!(self.root_cause(), Self::Circulation { .. })
    }

    /// 是否为未注册错误（包括被包装的情况）
    pub fn is_not_registered(&self) -> bool {
        matches!(self.root_cause(), Self::NotRegistered { .. })
    }
}

/// 构造参数与属性赋值错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("缺少第 {index} 个构造参数")]
    Missing { index: usize },

    #[error("第 {index} 个构造参数类型不匹配: 期望 {expected}")]
    TypeMismatch { index: usize, expected: String },

    #[error("属性 {property} 的值类型不匹配: 期望 {expected}")]
    PropertyMismatch { property: String, expected: String },

    #[error("构造函数不存在: 索引 {index}")]
    UnknownConstructor { index: usize },

    #[error("属性不存在: 索引 {index}")]
    UnknownProperty { index: usize },

    #[error("目标实例类型不匹配: 期望 {expected}")]
    TargetMismatch { expected: String },

    #[error("构造函数声明了 {declared} 个参数，只使用了 {consumed} 个")]
    Unconsumed { declared: usize, consumed: usize },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
