//! 宏工具函数

use syn::{Field, GenericArgument, PathArguments, Type};

/// 若类型的最后一段路径为 `name<T>`，返回 `T`
fn single_generic_argument<'a>(ty: &'a Type, name: &str) -> Option<&'a Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }

    let segment = type_path.path.segments.last()?;
    if segment.ident != name {
        return None;
    }

    match &segment.arguments {
        PathArguments::AngleBracketed(args) if args.args.len() == 1 => match args.args.first() {
            Some(GenericArgument::Type(inner)) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

/// `Arc<T>` 的 `T`
pub fn arc_inner(ty: &Type) -> Option<&Type> {
    single_generic_argument(ty, "Arc")
}

/// `Option<Arc<T>>` 的 `T`
pub fn option_arc_inner(ty: &Type) -> Option<&Type> {
    single_generic_argument(ty, "Option").and_then(arc_inner)
}

/// 检查字段是否有特定属性
pub fn field_has_attribute(field: &Field, attr_name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(attr_name))
}
