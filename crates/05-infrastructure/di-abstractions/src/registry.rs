//! 类型注册表抽象接口

use crate::descriptor::TypeDescriptor;
use infrastructure_common::TypeKey;
use std::collections::HashMap;
use std::sync::Arc;

/// 可注入类型 trait
///
/// 能被容器构造的具体类型都必须实现此 trait，
/// 通常由 `#[derive(Injectable)]` 自动生成。
pub trait Injectable: Sized + Send + Sync + 'static {
    /// 描述该类型的构造函数和属性
    ///
    /// 每个类型在注册时只调用一次。
    fn describe() -> TypeDescriptor<Self>;
}

/// 实现关系 trait
///
/// `I: Implements<R>` 表示 `I` 可以作为请求类型 `R` 的实现，
/// `R` 通常是 `dyn Trait`。每个类型自动实现 `Implements<Self>`，
/// 其它关系用 [`implements!`](crate::implements) 声明。
pub trait Implements<R: ?Sized + 'static>: Injectable {
    /// 转换为请求类型
    fn upcast(self: Arc<Self>) -> Arc<R>;
}

impl<T: Injectable> Implements<T> for T {
    fn upcast(self: Arc<Self>) -> Arc<T> {
        self
    }
}

/// 声明实现关系
///
/// ```rust,ignore
/// implements!(ConsoleLogger => dyn Logger);
/// implements!(EmailCommunicator => dyn Communicator, dyn Notifier);
/// ```
#[macro_export]
macro_rules! implements {
    ($implementation:ty => $($interface:ty),+ $(,)?) => {
        $(
            impl $crate::Implements<$interface> for $implementation {
                fn upcast(
                    self: ::std::sync::Arc<Self>,
                ) -> ::std::sync::Arc<$interface> {
                    self
                }
            }
        )+
    };
}

/// 类型注册表 trait
///
/// 提供类型绑定的注册和查询接口
pub trait TypeRegistry {
    /// 注册绑定 `R -> I`，覆盖 `R` 已有的绑定
    ///
    /// 这里不检查 `I` 能否被构造，问题在解析时才会暴露。
    fn register<R, I>(&self)
    where
        R: ?Sized + Send + Sync + 'static,
        I: Implements<R>;

    /// 检查类型是否已注册
    fn is_registered<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        self.is_registered_by_key(&TypeKey::of::<T>())
    }

    /// 检查类型是否已注册（通过 TypeKey）
    fn is_registered_by_key(&self, key: &TypeKey) -> bool;

    /// 获取所有绑定的副本，修改返回值不会影响注册表
    fn get_all_registered_types(&self) -> HashMap<TypeKey, TypeKey>;
}
