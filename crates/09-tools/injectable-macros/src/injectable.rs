//! `#[derive(Injectable)]` 实现

use crate::utils::{arc_inner, field_has_attribute, option_arc_inner};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parenthesized, punctuated::Punctuated, Data, DeriveInput, Error, Fields, Ident, Result, Token,
    Type,
};

/// 字段在生成代码中的角色
enum FieldRole<'a> {
    /// 构造函数参数
    Parameter(&'a Type),
    /// 带注入标记的属性
    Property(&'a Type),
    /// 使用默认值
    Default,
}

struct FieldPlan<'a> {
    ident: &'a Ident,
    role: FieldRole<'a>,
}

/// 实现 #[derive(Injectable)] 宏
pub fn derive_injectable_impl(input: DeriveInput) -> Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Injectable 不支持泛型结构体",
        ));
    }

    let name = &input.ident;
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(Error::new_spanned(
                name,
                "Injectable 只能用于结构体",
            ))
        }
    };

    let plans = match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(plan_field)
            .collect::<Result<Vec<_>>>()?,
        Fields::Unit => Vec::new(),
        Fields::Unnamed(_) => {
            return Err(Error::new_spanned(
                name,
                "Injectable 不支持元组结构体，请使用具名字段",
            ))
        }
    };

    let interfaces = parse_implements(&input)?;

    let describe = generate_describe(name, &plans);
    let implements = interfaces.iter().map(|interface| {
        quote! {
            impl ::di_abstractions::Implements<#interface> for #name {
                fn upcast(self: ::std::sync::Arc<Self>) -> ::std::sync::Arc<#interface> {
                    self
                }
            }
        }
    });

    Ok(quote! {
        impl ::di_abstractions::Injectable for #name {
            fn describe() -> ::di_abstractions::TypeDescriptor<Self> {
                #describe
            }
        }

        #(#implements)*
    })
}

fn plan_field(field: &syn::Field) -> Result<FieldPlan<'_>> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| Error::new_spanned(field, "字段必须具名"))?;

    let role = if field_has_attribute(field, "inject") {
        let inner = option_arc_inner(&field.ty).ok_or_else(|| {
            Error::new_spanned(&field.ty, "#[inject] 字段的类型必须是 Option<Arc<T>>")
        })?;
        FieldRole::Property(inner)
    } else if let Some(inner) = arc_inner(&field.ty) {
        FieldRole::Parameter(inner)
    } else {
        FieldRole::Default
    };

    Ok(FieldPlan { ident, role })
}

/// 解析 `#[injectable(implements(dyn A, dyn B))]`
fn parse_implements(input: &DeriveInput) -> Result<Vec<Type>> {
    let mut interfaces = Vec::new();

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("injectable")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("implements") {
                let content;
                parenthesized!(content in meta.input);
                let types = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
                interfaces.extend(types);
                Ok(())
            } else {
                Err(meta.error("未知的 injectable 参数，只支持 implements(...)"))
            }
        })?;
    }

    Ok(interfaces)
}

fn generate_describe(name: &Ident, plans: &[FieldPlan<'_>]) -> TokenStream {
    let parameter_keys = plans.iter().filter_map(|plan| match plan.role {
        FieldRole::Parameter(inner) => Some(quote! { ::di_abstractions::TypeKey::of::<#inner>() }),
        _ => None,
    });

    let has_parameters = plans
        .iter()
        .any(|plan| matches!(plan.role, FieldRole::Parameter(_)));
    let arguments = if has_parameters {
        quote! { arguments }
    } else {
        quote! { _arguments }
    };

    let initializers = plans.iter().map(|plan| {
        let ident = plan.ident;
        match plan.role {
            FieldRole::Parameter(inner) => quote! { #ident: #arguments.take::<#inner>()? },
            FieldRole::Property(_) => quote! { #ident: ::std::option::Option::None },
            FieldRole::Default => quote! { #ident: ::std::default::Default::default() },
        }
    });

    let properties = plans.iter().filter_map(|plan| match plan.role {
        FieldRole::Property(inner) => {
            let ident = plan.ident;
            let property_name = ident.to_string();
            Some(quote! {
                .inject::<#inner, _>(#property_name, |target: &mut #name, value| {
                    target.#ident = ::std::option::Option::Some(value);
                })
            })
        }
        _ => None,
    });

    quote! {
        ::di_abstractions::TypeDescriptor::new()
            .constructor(
                ::std::vec![#(#parameter_keys),*],
                |#arguments: &mut ::di_abstractions::Arguments| {
                    ::std::result::Result::Ok(#name { #(#initializers),* })
                },
            )
            #(#properties)*
    }
}
