//! 代数层适配
//!
//! - **traits**: 外部代数/CAS 协作者的抽象（黑盒：接收规范 key 列表，返回是否等价）
//! - **mock**: 参考实现，逐项比较解码后的 key 列表（测试与命令行使用）
//! - **adapter**: 标准答案的三种编码、学生选择的可评分形式

pub mod adapter;
pub mod mock;
pub mod traits;

pub use adapter::{grade, to_gradable_form, ModelAnswer, ERR_SENTINEL};
pub use mock::ListEqualityEngine;
pub use traits::AlgebraEngine;
