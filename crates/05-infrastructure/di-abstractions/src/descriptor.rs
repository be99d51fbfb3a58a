//! 类型描述符
//!
//! 每个可注入类型通过 [`TypeDescriptor`] 声明自己的构造函数和属性，
//! 容器据此完成构造函数选择、参数解析和属性注入，不需要运行时反射。

use crate::factory::{downcast_instance, Arguments, Instance};
use infrastructure_common::{ArgumentError, BoxError, TypeKey};
use std::fmt;
use std::sync::Arc;

/// 构造函数
pub type ConstructorFn<T> = Box<dyn Fn(&mut Arguments) -> Result<T, BoxError> + Send + Sync>;

/// 属性赋值函数
pub type SetterFn<T> = Box<dyn Fn(&mut T, &Instance) -> Result<(), ArgumentError> + Send + Sync>;

/// 被选中的构造函数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDescriptor {
    /// 在声明列表中的位置
    pub index: usize,
    /// 参数类型，按声明顺序
    pub parameters: Vec<TypeKey>,
}

impl ConstructorDescriptor {
    /// 参数个数
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// 属性描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// 在声明列表中的位置
    pub index: usize,
    /// 属性名称
    pub name: &'static str,
    /// 属性类型
    pub type_key: TypeKey,
    /// 是否带有注入标记
    pub injectable: bool,
}

struct Constructor<T> {
    parameters: Vec<TypeKey>,
    factory: ConstructorFn<T>,
}

struct Property<T> {
    name: &'static str,
    type_key: TypeKey,
    injectable: bool,
    setter: SetterFn<T>,
}

/// 类型描述符
///
/// # 示例
///
/// ```rust,ignore
/// impl Injectable for ServiceImpl {
///     fn describe() -> TypeDescriptor<Self> {
///         TypeDescriptor::new()
///             .constructor0(ServiceImpl::default)
///             .constructor1::<dyn Logger, _>(ServiceImpl::with_logger)
///             .inject::<dyn Counter, _>("counter", |this, counter| this.counter = Some(counter))
///     }
/// }
/// ```
pub struct TypeDescriptor<T> {
    type_key: TypeKey,
    constructors: Vec<Constructor<T>>,
    properties: Vec<Property<T>>,
}

impl<T: 'static> TypeDescriptor<T> {
    /// 创建空的描述符（没有构造函数也没有属性）
    pub fn new() -> Self {
        Self {
            type_key: TypeKey::of::<T>(),
            constructors: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// 声明构造函数
    ///
    /// `parameters` 必须与 `factory` 从 [`Arguments`] 中取值的顺序一致。
    pub fn constructor<F>(mut self, parameters: Vec<TypeKey>, factory: F) -> Self
    where
        F: Fn(&mut Arguments) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.constructors.push(Constructor {
            parameters,
            factory: Box::new(factory),
        });
        self
    }

    /// 声明无参构造函数
    pub fn constructor0<F>(self, factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.constructor(Vec::new(), move |_| Ok(factory()))
    }

    /// 声明单参数构造函数
    pub fn constructor1<A, F>(self, factory: F) -> Self
    where
        A: ?Sized + Send + Sync + 'static,
        F: Fn(Arc<A>) -> T + Send + Sync + 'static,
    {
        self.constructor(vec![TypeKey::of::<A>()], move |arguments| {
            let a = arguments.take::<A>()?;
            Ok(factory(a))
        })
    }

    /// 声明双参数构造函数
    pub fn constructor2<A, B, F>(self, factory: F) -> Self
    where
        A: ?Sized + Send + Sync + 'static,
        B: ?Sized + Send + Sync + 'static,
        F: Fn(Arc<A>, Arc<B>) -> T + Send + Sync + 'static,
    {
        self.constructor(
            vec![TypeKey::of::<A>(), TypeKey::of::<B>()],
            move |arguments| {
                let a = arguments.take::<A>()?;
                let b = arguments.take::<B>()?;
                Ok(factory(a, b))
            },
        )
    }

    /// 声明三参数构造函数
    pub fn constructor3<A, B, C, F>(self, factory: F) -> Self
    where
        A: ?Sized + Send + Sync + 'static,
        B: ?Sized + Send + Sync + 'static,
        C: ?Sized + Send + Sync + 'static,
        F: Fn(Arc<A>, Arc<B>, Arc<C>) -> T + Send + Sync + 'static,
    {
        self.constructor(
            vec![TypeKey::of::<A>(), TypeKey::of::<B>(), TypeKey::of::<C>()],
            move |arguments| {
                let a = arguments.take::<A>()?;
                let b = arguments.take::<B>()?;
                let c = arguments.take::<C>()?;
                Ok(factory(a, b, c))
            },
        )
    }

    /// 声明带注入标记的属性，构造完成后由容器解析并赋值
    pub fn inject<P, F>(self, name: &'static str, setter: F) -> Self
    where
        P: ?Sized + Send + Sync + 'static,
        F: Fn(&mut T, Arc<P>) + Send + Sync + 'static,
    {
        self.push_property(name, true, setter)
    }

    /// 声明普通属性，容器不会为它赋值
    pub fn property<P, F>(self, name: &'static str, setter: F) -> Self
    where
        P: ?Sized + Send + Sync + 'static,
        F: Fn(&mut T, Arc<P>) + Send + Sync + 'static,
    {
        self.push_property(name, false, setter)
    }

    fn push_property<P, F>(mut self, name: &'static str, injectable: bool, setter: F) -> Self
    where
        P: ?Sized + Send + Sync + 'static,
        F: Fn(&mut T, Arc<P>) + Send + Sync + 'static,
    {
        self.properties.push(Property {
            name,
            type_key: TypeKey::of::<P>(),
            injectable,
            setter: Box::new(move |target: &mut T, value: &Instance| {
                let value = downcast_instance::<P>(value).ok_or_else(|| {
                    ArgumentError::PropertyMismatch {
                        property: name.to_string(),
                        expected: std::any::type_name::<P>().to_string(),
                    }
                })?;
                setter(target, value);
                Ok(())
            }),
        });
        self
    }

    /// 被描述的类型
    pub fn type_key(&self) -> TypeKey {
        self.type_key
    }

    /// 声明的构造函数数量
    pub fn constructor_count(&self) -> usize {
        self.constructors.len()
    }

    /// 选择参数最多的构造函数，参数个数相同时取最先声明的
    pub fn select_constructor(&self) -> Option<ConstructorDescriptor> {
        let mut selected: Option<(usize, &Constructor<T>)> = None;
        for (index, constructor) in self.constructors.iter().enumerate() {
            let longer = selected
                .map_or(true, |(_, best)| constructor.parameters.len() > best.parameters.len());
            if longer {
                selected = Some((index, constructor));
            }
        }

        selected.map(|(index, constructor)| ConstructorDescriptor {
            index,
            parameters: constructor.parameters.clone(),
        })
    }

    /// 调用指定的构造函数
    pub fn construct(&self, index: usize, arguments: &mut Arguments) -> Result<T, BoxError> {
        let constructor = self
            .constructors
            .get(index)
            .ok_or(ArgumentError::UnknownConstructor { index })?;
        (constructor.factory)(arguments)
    }

    /// 按声明顺序列出所有属性
    pub fn properties(&self) -> Vec<PropertyDescriptor> {
        self.properties
            .iter()
            .enumerate()
            .map(|(index, property)| PropertyDescriptor {
                index,
                name: property.name,
                type_key: property.type_key,
                injectable: property.injectable,
            })
            .collect()
    }

    /// 为指定属性赋值
    pub fn assign(&self, target: &mut T, index: usize, value: &Instance) -> Result<(), ArgumentError> {
        let property = self
            .properties
            .get(index)
            .ok_or(ArgumentError::UnknownProperty { index })?;
        (property.setter)(target, value)
    }
}

impl<T: 'static> Default for TypeDescriptor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_key", &self.type_key)
            .field(
                "constructors",
                &self
                    .constructors
                    .iter()
                    .map(|c| &c.parameters)
                    .collect::<Vec<_>>(),
            )
            .field(
                "properties",
                &self
                    .properties
                    .iter()
                    .map(|p| (p.name, p.type_key, p.injectable))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
