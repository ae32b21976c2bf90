//! 标准答案适配器
//!
//! 作者规格编译出的标准答案以三种编码暴露：`raw`（index 线格式，用作「正确作答」）、
//! `value`（规范 key 列表，交给代数层）、`display`（展示文本）。

use serde::Serialize;

use crate::cas::AlgebraEngine;
use crate::codec::{encode_display, encode_indices, encode_keys, SelectionCodec};
use crate::core::{BuilderError, InputState, InputStatus, Selection};
use crate::pool::PhrasePool;

/// 规格致命错误时三种编码的占位值
pub const ERR_SENTINEL: &str = "[ERR]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelAnswer {
    pub raw: String,
    pub value: String,
    pub display: String,
}

impl ModelAnswer {
    /// 由短语池的标准答案顺序生成；池致命时返回 `[ERR]` 占位
    pub fn adapt(pool: &PhrasePool) -> Self {
        if pool.is_fatal() {
            return Self::error();
        }
        let correct = pool.correct_order();
        Self {
            raw: encode_indices(&correct.indices),
            value: encode_keys(&correct.keys),
            display: encode_display(&correct.texts),
        }
    }

    pub fn error() -> Self {
        Self {
            raw: ERR_SENTINEL.to_string(),
            value: ERR_SENTINEL.to_string(),
            display: format!("<code>{ERR_SENTINEL}</code>"),
        }
    }

    pub fn is_error(&self) -> bool {
        self.value == ERR_SENTINEL
    }

    /// 展示给学生的标准答案
    pub fn teacher_answer_display(&self) -> String {
        format!("A correct answer is as follows: <br/><div>{}</div>", self.display)
    }
}

/// 学生选择 → 交给代数层的规范 key 编码
pub fn to_gradable_form(pool: &PhrasePool, selection: &Selection) -> Result<String, BuilderError> {
    SelectionCodec::new(pool).keys_of(selection)
}

/// 只对可评分状态调用代数引擎；其余状态返回 `Ok(None)`
pub fn grade(
    engine: &dyn AlgebraEngine,
    model: &ModelAnswer,
    state: &InputState,
) -> Result<Option<bool>, String> {
    if state.status != InputStatus::Score || model.is_error() {
        return Ok(None);
    }
    let verdict = engine.equivalent(&state.contents_modified, &model.value)?;
    tracing::debug!(engine = engine.name(), verdict, "Graded response");
    Ok(Some(verdict))
}
