//! # 依赖注入具体实现
//!
//! 提供 [`SimpleContainer`]：类型注册表、单例实例缓存、构造引擎和属性注入器。
//!
//! ## 解析流程
//!
//! 注册绑定 → 请求类型 → 查找绑定 → 选择参数最多的构造函数 →
//! 递归解析参数 → 构造 → 注入带标记的属性 → （单例模式下）缓存
//!
//! ## 循环依赖
//!
//! 默认只检测实现类型等于顶层请求类型的自引用；更长的循环由
//! `max_resolution_depth` 截断为 `DepthExceeded`。配置
//! `CycleDetection::FullChain` 可以检测任意长度的循环。

mod builder;
mod cache;
mod container;
mod engine;
mod injector;
mod registry;

pub use builder::DiContainerBuilder;
pub use container::SimpleContainer;
