//! 属性注入

use crate::engine::ConstructionEngine;
use crate::registry::Activator;
use di_abstractions::ResolveContext;
use infrastructure_common::{DependencyError, DependencyResult, TypeKey};
use std::any::Any;
use tracing::{debug, trace};

/// 属性注入器
///
/// 构造完成后，为带有注入标记的属性解析依赖并赋值。
/// 没有注入标记的属性不会被访问。
pub(crate) struct PropertyInjector<'e, 'a> {
    engine: &'e ConstructionEngine<'a>,
}

impl<'e, 'a> PropertyInjector<'e, 'a> {
    /// 创建属性注入器
    pub fn new(engine: &'e ConstructionEngine<'a>) -> Self {
        Self { engine }
    }

    /// 按声明顺序注入属性，返回注入的属性个数
    ///
    /// 任何一个属性失败都会中止注入，已经赋值的属性不会回滚。
    pub fn inject(
        &self,
        owner: TypeKey,
        activator: &dyn Activator,
        target: &mut (dyn Any + Send),
        context: &mut ResolveContext,
    ) -> DependencyResult<usize> {
        let mut injected = 0;

        for property in activator.properties().iter().filter(|p| p.injectable) {
            trace!("注入属性: {}.{} <- {}", owner, property.name, property.type_key);

            let value = self
                .engine
                .resolve_parameter(property.type_key, context)
                .map_err(|e| DependencyError::resolution(owner.name(), e))?;

            activator
                .assign(target, property, &value)
                .map_err(|e| DependencyError::resolution(owner.name(), e))?;
            injected += 1;
        }

        if injected > 0 {
            debug!("{} 完成属性注入: {} 个", owner, injected);
        }
        Ok(injected)
    }
}
