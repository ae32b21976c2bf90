//! Phrase Builder - 短语构造题输入
//!
//! 作者给出带 key 的短语池，学生按顺序挑选部分短语组成答案，再交给代数层与标准答案比较。
//!
//! 模块划分：
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **core**: 错误、选择、输入状态与输入外观 `BuilderInput`
//! - **pool**: 作者规格 → 不可变短语池与标准答案顺序
//! - **codec**: index 列表 / key 列表 / 展示文本之间的编解码
//! - **response**: 学生作答校验与作者侧严格校验
//! - **cas**: 代数协作者抽象与标准答案适配
//! - **render**: 已用 / 未用投影、HTML 片段、选择器状态机
//! - **observability**: 日志初始化

pub mod cas;
pub mod codec;
pub mod config;
pub mod core;
pub mod observability;
pub mod pool;
pub mod render;
pub mod response;

pub use crate::core::{BuilderError, BuilderInput, InputState, InputStatus, Selection};
pub use crate::pool::{compile, PhrasePool};
