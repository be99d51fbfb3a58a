//! # Injectable Macros
//!
//! 为结构体生成 `Injectable` 实现，替代运行时反射。
//!
//! ## 字段规则
//!
//! - `Arc<T>` 字段按声明顺序成为唯一构造函数的参数
//! - 带 `#[inject]` 的 `Option<Arc<T>>` 字段成为带注入标记的属性，构造时为 `None`
//! - 其它字段使用 `Default::default()`
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use injectable_macros::Injectable;
//! use std::sync::Arc;
//!
//! #[derive(Injectable)]
//! #[injectable(implements(dyn Service))]
//! pub struct ServiceImpl {
//!     logger: Arc<dyn Logger>,
//!     #[inject]
//!     audit: Option<Arc<dyn Audit>>,
//!     calls: AtomicUsize,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod injectable;
mod utils;

/// 可注入类型派生宏
///
/// 生成 `di_abstractions::Injectable` 实现；
/// `#[injectable(implements(...))]` 额外为列出的接口生成 `Implements` 实现。
///
/// # 示例
///
/// ```rust,ignore
/// #[derive(Injectable)]
/// #[injectable(implements(dyn Logger))]
/// pub struct ConsoleLogger;
/// ```
#[proc_macro_derive(Injectable, attributes(inject, injectable))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    injectable::derive_injectable_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
