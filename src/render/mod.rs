//! 展示投影：选择 + 短语池 → 「已用 / 未用」两个有序列表与隐藏字段
//!
//! - **projector**: 纯数据投影
//! - **html**: 选择器与错误片段的 HTML
//! - **picker**: 客户端组件的状态机（点击在两列表间移动短语并重算线格式）

pub mod html;
pub mod picker;
pub mod projector;

pub use html::{render, render_error};
pub use picker::PickerState;
pub use projector::{project, Projection};
