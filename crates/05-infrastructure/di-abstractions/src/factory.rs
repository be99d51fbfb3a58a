//! 实例与构造参数
//!
//! 容器内部以类型擦除的 [`Instance`] 传递已解析的依赖，
//! 构造函数通过 [`Arguments`] 按声明顺序取回强类型的值。

use infrastructure_common::ArgumentError;
use std::any::Any;
use std::sync::Arc;

/// 类型擦除的实例
///
/// 内部保存的是请求类型 `R` 的 `Arc<R>`，因此 `dyn Trait` 也能被擦除和取回。
pub type Instance = Arc<dyn Any + Send + Sync>;

/// 把强类型实例擦除为 [`Instance`]
pub fn into_instance<T>(value: Arc<T>) -> Instance
where
    T: ?Sized + Send + Sync + 'static,
{
    Arc::new(value)
}

/// 从 [`Instance`] 中取回 `Arc<T>`
pub fn downcast_instance<T>(instance: &Instance) -> Option<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    instance.downcast_ref::<Arc<T>>().cloned()
}

/// 构造函数的参数列表
///
/// 按构造函数声明的参数顺序依次取出。
#[derive(Debug)]
pub struct Arguments {
    values: std::vec::IntoIter<Instance>,
    position: usize,
}

impl Arguments {
    /// 创建参数列表
    pub fn new(values: Vec<Instance>) -> Self {
        Self {
            values: values.into_iter(),
            position: 0,
        }
    }

    /// 空参数列表
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// 取出下一个参数
    pub fn take<T>(&mut self) -> Result<Arc<T>, ArgumentError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let index = self.position;
        self.position += 1;

        let value = self.values.next().ok_or(ArgumentError::Missing { index })?;
        downcast_instance::<T>(&value).ok_or_else(|| ArgumentError::TypeMismatch {
            index,
            expected: std::any::type_name::<T>().to_string(),
        })
    }

    /// 剩余参数数量
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// 已经取出的参数数量
    pub fn consumed(&self) -> usize {
        self.position
    }
}
