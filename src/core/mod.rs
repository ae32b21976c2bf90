//! 核心类型：错误、选择、输入状态与输入外观

pub mod builder;
pub mod error;
pub mod selection;
pub mod state;

pub use builder::{parameter_defaults, BuilderInput};
pub use error::BuilderError;
pub use selection::Selection;
pub use state::{InputState, InputStatus};
