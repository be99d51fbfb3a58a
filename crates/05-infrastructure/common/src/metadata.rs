//! 元数据定义
//!
//! 提供容器使用的类型标识信息

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 类型标识
///
/// 容器中注册表与实例缓存的键。相等性与哈希只取决于 `TypeId`，
/// 类型名称只用于日志和错误信息。可以标识 `dyn Trait` 这样的非定长类型。
#[derive(Clone, Copy)]
pub struct TypeKey {
    /// 类型ID
    id: TypeId,
    /// 完整类型名称
    name: &'static str,
}

impl TypeKey {
    /// 从类型获取类型标识
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 完整类型名称（包含模块路径）
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 获取简短的类型名称
    ///
    /// 去掉每一段路径的模块前缀，泛型参数同样处理：
    /// `alloc::sync::Arc<app::Logger>` 显示为 `Arc<Logger>`。
    pub fn short_name(&self) -> String {
        let mut short = String::with_capacity(self.name.len());
        let mut path = String::new();

        for ch in self.name.chars() {
            if ch.is_alphanumeric() || ch == '_' || ch == ':' {
                path.push(ch);
            } else {
                short.push_str(last_segment(&path));
                path.clear();
                short.push(ch);
            }
        }
        short.push_str(last_segment(&path));
        short
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.name).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// 类型绑定：请求类型 -> 实现类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding {
    /// 请求（抽象）类型
    pub requested: TypeKey,
    /// 实现（具体）类型
    pub implementation: TypeKey,
}

impl Binding {
    /// 创建新的绑定
    pub fn new(requested: TypeKey, implementation: TypeKey) -> Self {
        Self {
            requested,
            implementation,
        }
    }

    /// 从类型参数创建绑定
    pub fn of<R: ?Sized + 'static, I: ?Sized + 'static>() -> Self {
        Self::new(TypeKey::of::<R>(), TypeKey::of::<I>())
    }

    /// 是否绑定到自身
    pub fn is_self_binding(&self) -> bool {
        self.requested == self.implementation
    }
}
