//! 类型注册表实现
//!
//! 注册时把实现类型的 [`TypeDescriptor`] 包装成类型擦除的 [`Activator`]，
//! 构造引擎只通过 `Activator` 操作实例，不需要知道具体类型。

use di_abstractions::{
    into_instance, Arguments, ConstructorDescriptor, Implements, Instance, PropertyDescriptor,
    TypeDescriptor,
};
use infrastructure_common::{ArgumentError, Binding, BoxError, TypeKey};
use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

/// 类型擦除的构造器
pub(crate) trait Activator: Send + Sync {
    /// 选择参数最多的构造函数
    fn select_constructor(&self) -> Option<ConstructorDescriptor>;

    /// 所有声明的属性
    fn properties(&self) -> Vec<PropertyDescriptor>;

    /// 调用构造函数，返回尚未注入属性的实现类型值
    fn instantiate(
        &self,
        constructor: &ConstructorDescriptor,
        arguments: Vec<Instance>,
    ) -> Result<Box<dyn Any + Send>, BoxError>;

    /// 为属性赋值
    fn assign(
        &self,
        target: &mut (dyn Any + Send),
        property: &PropertyDescriptor,
        value: &Instance,
    ) -> Result<(), ArgumentError>;

    /// 转换为请求类型并擦除
    fn seal(&self, target: Box<dyn Any + Send>) -> Result<Instance, ArgumentError>;
}

/// `R -> I` 绑定的构造器
struct TypedActivator<R: ?Sized, I> {
    descriptor: TypeDescriptor<I>,
    _requested: PhantomData<fn() -> Arc<R>>,
}

impl<R, I> TypedActivator<R, I>
where
    R: ?Sized + Send + Sync + 'static,
    I: Implements<R>,
{
    fn new() -> Self {
        Self {
            descriptor: I::describe(),
            _requested: PhantomData,
        }
    }

    fn target_mismatch() -> ArgumentError {
        ArgumentError::TargetMismatch {
            expected: std::any::type_name::<I>().to_string(),
        }
    }
}

impl<R, I> Activator for TypedActivator<R, I>
where
    R: ?Sized + Send + Sync + 'static,
    I: Implements<R>,
{
    fn select_constructor(&self) -> Option<ConstructorDescriptor> {
        self.descriptor.select_constructor()
    }

    fn properties(&self) -> Vec<PropertyDescriptor> {
        self.descriptor.properties()
    }

    fn instantiate(
        &self,
        constructor: &ConstructorDescriptor,
        arguments: Vec<Instance>,
    ) -> Result<Box<dyn Any + Send>, BoxError> {
        let mut arguments = Arguments::new(arguments);
        let value = self.descriptor.construct(constructor.index, &mut arguments)?;

        if arguments.remaining() > 0 {
            return Err(ArgumentError::Unconsumed {
                declared: constructor.arity(),
                consumed: arguments.consumed(),
            }
            .into());
        }
        Ok(Box::new(value))
    }

    fn assign(
        &self,
        target: &mut (dyn Any + Send),
        property: &PropertyDescriptor,
        value: &Instance,
    ) -> Result<(), ArgumentError> {
        let target = target
            .downcast_mut::<I>()
            .ok_or_else(Self::target_mismatch)?;
        self.descriptor.assign(target, property.index, value)
    }

    fn seal(&self, target: Box<dyn Any + Send>) -> Result<Instance, ArgumentError> {
        let value = target.downcast::<I>().map_err(|_| Self::target_mismatch())?;
        let requested: Arc<R> = <I as Implements<R>>::upcast(Arc::new(*value));
        Ok(into_instance(requested))
    }
}

/// 注册信息
#[derive(Clone)]
pub(crate) struct Registration {
    /// 绑定
    pub binding: Binding,
    /// 构造器
    pub activator: Arc<dyn Activator>,
}

impl Registration {
    /// 为 `R -> I` 创建注册信息
    pub fn of<R, I>() -> Self
    where
        R: ?Sized + Send + Sync + 'static,
        I: Implements<R>,
    {
        Self {
            binding: Binding::of::<R, I>(),
            activator: Arc::new(TypedActivator::<R, I>::new()),
        }
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("binding", &self.binding)
            .field("activator", &"<activator>")
            .finish()
    }
}

/// 类型注册表存储
#[derive(Debug, Default)]
pub(crate) struct RegistryStore {
    registrations: RwLock<HashMap<TypeKey, Registration>>,
}

impl RegistryStore {
    /// 插入注册信息，返回被覆盖的旧绑定
    pub fn insert(&self, registration: Registration) -> Option<Binding> {
        let key = registration.binding.requested;
        self.registrations
            .write()
            .insert(key, registration)
            .map(|previous| previous.binding)
    }

    /// 查找注册信息
    pub fn get(&self, key: &TypeKey) -> Option<Registration> {
        self.registrations.read().get(key).cloned()
    }

    /// 是否已注册
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.registrations.read().contains_key(key)
    }

    /// 已注册数量
    pub fn len(&self) -> usize {
        self.registrations.read().len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.registrations.read().is_empty()
    }

    /// 绑定快照
    pub fn snapshot(&self) -> HashMap<TypeKey, TypeKey> {
        self.registrations
            .read()
            .iter()
            .map(|(key, registration)| (*key, registration.binding.implementation))
            .collect()
    }
}
