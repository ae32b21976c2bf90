//! 输入状态：校验器产出、渲染层与评分层消费

use serde::{Deserialize, Serialize, Serializer};

use crate::core::error::{join_errors, BuilderError};
use crate::core::Selection;

/// 作答状态
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputStatus {
    /// 尚未作答
    Blank,
    /// 输入格式错误
    Invalid,
    /// 合法，待确认
    Valid,
    /// 合法，可评分
    #[default]
    Score,
}

/// 一次校验的完整结果
///
/// `contents_modified` 是交给代数层的规范 key 列表（JSON），`contents_displayed` 是空格拼接的展示文本。
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InputState {
    pub status: InputStatus,
    pub contents: Selection,
    pub contents_modified: String,
    pub contents_displayed: String,
    #[serde(serialize_with = "serialize_errors")]
    pub errors: Vec<BuilderError>,
}

impl InputState {
    pub fn blank() -> Self {
        Self {
            status: InputStatus::Blank,
            contents: Selection::empty(),
            contents_modified: String::new(),
            contents_displayed: String::new(),
            errors: Vec::new(),
        }
    }

    /// 展示用的错误文本
    pub fn error_text(&self) -> String {
        join_errors(&self.errors)
    }
}

fn serialize_errors<S: Serializer>(errors: &[BuilderError], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(errors.iter().map(|e| e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_state() {
        let state = InputState::blank();
        assert_eq!(state.status, InputStatus::Blank);
        assert!(state.contents.is_empty());
        assert!(state.error_text().is_empty());
    }

    #[test]
    fn test_state_serializes_errors_as_text() {
        let mut state = InputState::blank();
        state.status = InputStatus::Invalid;
        state.errors.push(BuilderError::BadResponse);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["status"], "invalid");
        assert_eq!(json["errors"][0], "The response is malformed.");
        assert_eq!(json["contents"], serde_json::json!([]));
    }

    #[test]
    fn test_default_status_is_score() {
        assert_eq!(InputStatus::default(), InputStatus::Score);
    }

    #[test]
    fn test_status_parses_lowercase() {
        let s: InputStatus = serde_json::from_str("\"valid\"").unwrap();
        assert_eq!(s, InputStatus::Valid);
    }
}
