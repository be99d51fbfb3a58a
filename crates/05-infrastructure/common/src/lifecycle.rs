//! 实例生命周期

use serde::{Deserialize, Serialize};

/// 实例生命周期类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifetime {
    /// 单例模式 - 每个类型第一次成功解析的实例被缓存并复用
    Singleton,
    /// 瞬时模式 - 每次请求都创建新实例
    #[default]
    Transient,
}

impl Lifetime {
    /// 是否为单例
    pub fn is_singleton(self) -> bool {
        matches!(self, Self::Singleton)
    }
}

impl From<bool> for Lifetime {
    fn from(singleton: bool) -> Self {
        if singleton {
            Self::Singleton
        } else {
            Self::Transient
        }
    }
}

/// 单例模式切换策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingletonPolicy {
    /// 可以随时开启或关闭
    #[default]
    Switchable,
    /// 一旦开启，在容器生命周期内保持开启
    Permanent,
}
