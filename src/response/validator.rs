//! 作答校验器
//!
//! 学生侧逐项降级：非法或重复的元素被跳过并记错，其余照常接收；所有错误一次性返回。
//! 作者侧（`validate_contents`）更严格：任一违规即整体不可用于标准答案推导。

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::codec::{decode_index_list, encode_display, encode_keys, SelectionCodec};
use crate::core::{BuilderError, InputState, InputStatus, Selection};
use crate::pool::PhrasePool;

/// 提交的两种形态
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Ajax 直接送来的 index 列表线格式
    Wire(String),
    /// 表单字段表，期望其中有 `<name>_raw`
    Fields(Map<String, Value>),
}

/// 输入对应的原始字段名
pub fn raw_field_name(name: &str) -> String {
    format!("{name}_raw")
}

fn invalid_empty(errors: Vec<BuilderError>) -> InputState {
    InputState {
        status: InputStatus::Invalid,
        contents: Selection::empty(),
        contents_modified: encode_keys::<&str>(&[]),
        contents_displayed: String::new(),
        errors,
    }
}

/// 校验学生作答
///
/// `default_status` 是无错误时给出的状态（通常为 `Score`）；校验器本身从不评分。
pub fn validate_student_response(
    pool: &PhrasePool,
    name: &str,
    submission: &Submission,
    default_status: InputStatus,
) -> InputState {
    let raw = match submission {
        Submission::Wire(s) => s.as_str(),
        Submission::Fields(fields) => match fields.get(&raw_field_name(name)) {
            None => return InputState::blank(),
            Some(Value::String(s)) => s.as_str(),
            Some(other) => {
                tracing::debug!("Non-string raw field for {}: {}", name, other);
                return invalid_empty(vec![BuilderError::BadResponse]);
            }
        },
    };

    let raw = raw.trim();
    if raw.is_empty() {
        return InputState::blank();
    }

    let items = match decode_index_list(raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::debug!("Undecodable response for {}: {}", name, raw);
            return invalid_empty(vec![e]);
        }
    };
    if items.is_empty() {
        return InputState::blank();
    }

    let mut status = default_status;
    let mut errors = Vec::new();
    let mut used = HashSet::with_capacity(items.len());
    let mut contents = Selection::empty();
    let mut keys = Vec::with_capacity(items.len());
    let mut texts = Vec::with_capacity(items.len());

    for item in &items {
        let phrase = item
            .as_u64()
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| pool.by_index(i));
        let Some(phrase) = phrase else {
            status = InputStatus::Invalid;
            errors.push(BuilderError::BadResponse);
            continue;
        };
        if !used.insert(phrase.index) {
            status = InputStatus::Invalid;
            errors.push(BuilderError::RepeatedValue);
            continue;
        }
        contents.push(phrase.index);
        keys.push(phrase.key.as_str());
        texts.push(phrase.text.as_str());
    }

    if !errors.is_empty() {
        tracing::debug!("Response for {} rejected with {} error(s)", name, errors.len());
    }

    InputState {
        status,
        contents,
        contents_modified: encode_keys(&keys),
        contents_displayed: encode_display(&texts),
        errors,
    }
}

/// 作者侧严格校验结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentsCheck {
    pub valid: bool,
    pub errors: Vec<BuilderError>,
    /// 合法时为规范 key 编码，否则为空串
    pub value: String,
}

/// 严格校验候选内容：`1 <= i <= N` 且不重复；任一违规则 `valid = false`，但仍返回全部错误
pub fn validate_contents(pool: &PhrasePool, contents: &[i64]) -> ContentsCheck {
    let n = pool.len();
    let mut valid = true;
    let mut errors = Vec::new();
    let mut used = HashSet::with_capacity(contents.len());

    for &i in contents {
        match usize::try_from(i) {
            Ok(i) if (1..=n).contains(&i) => {
                if !used.insert(i) {
                    valid = false;
                    errors.push(BuilderError::RepeatedValue);
                }
            }
            _ => {
                valid = false;
                errors.push(BuilderError::UnrecognizedValue);
            }
        }
    }

    let value = if valid {
        let indices: Vec<usize> = contents.iter().filter_map(|&i| usize::try_from(i).ok()).collect();
        SelectionCodec::new(pool)
            .to_keys(&indices)
            .map(|keys| encode_keys(&keys))
            .unwrap_or_default()
    } else {
        String::new()
    };

    ContentsCheck {
        valid,
        errors,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::compile;

    fn pool() -> PhrasePool {
        compile(r#"[["n even","n is even",1],["implies","implies",2],["2n even","2n is even",3],["iff","iff",-1]]"#).pool
    }

    fn fields(value: Value) -> Submission {
        let mut map = Map::new();
        map.insert("ans1_raw".to_string(), value);
        Submission::Fields(map)
    }

    fn check(raw: &str) -> InputState {
        validate_student_response(&pool(), "ans1", &fields(Value::String(raw.to_string())), InputStatus::Score)
    }

    #[test]
    fn test_valid_response() {
        let state = check("[1,2]");
        assert_eq!(state.status, InputStatus::Score);
        assert_eq!(state.contents.indices(), &[1, 2]);
        assert_eq!(state.contents_modified, r#"["n even","implies"]"#);
        assert_eq!(state.contents_displayed, "n is even implies");
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_default_status_is_passed_through() {
        let state = validate_student_response(&pool(), "ans1", &Submission::Wire("[4]".into()), InputStatus::Valid);
        assert_eq!(state.status, InputStatus::Valid);
        assert_eq!(state.contents_displayed, "iff");
    }

    #[test]
    fn test_blank_responses() {
        for raw in ["", "   ", "[]", " [ ] "] {
            let state = check(raw);
            assert_eq!(state.status, InputStatus::Blank, "{raw:?}");
            assert!(state.contents.is_empty());
            assert!(state.errors.is_empty());
        }
        let missing = validate_student_response(&pool(), "ans1", &Submission::Fields(Map::new()), InputStatus::Score);
        assert_eq!(missing, InputState::blank());
    }

    #[test]
    fn test_other_input_field_is_ignored() {
        let mut map = Map::new();
        map.insert("ans2_raw".to_string(), Value::String("[1]".into()));
        let state = validate_student_response(&pool(), "ans1", &Submission::Fields(map), InputStatus::Score);
        assert_eq!(state.status, InputStatus::Blank);
    }

    #[test]
    fn test_repeated_value() {
        let state = check("[1,1]");
        assert_eq!(state.status, InputStatus::Invalid);
        assert_eq!(state.errors, vec![BuilderError::RepeatedValue]);
        assert_eq!(state.contents.indices(), &[1]);
        assert_eq!(state.contents_modified, r#"["n even"]"#);
    }

    #[test]
    fn test_out_of_range_is_skipped() {
        let state = check("[0,2,5,-1]");
        assert_eq!(state.status, InputStatus::Invalid);
        assert_eq!(state.errors, vec![BuilderError::BadResponse; 3]);
        assert_eq!(state.contents.indices(), &[2]);
    }

    #[test]
    fn test_non_integer_elements() {
        let state = check(r#"[1, "2", 2.5, null, [3]]"#);
        assert_eq!(state.status, InputStatus::Invalid);
        assert_eq!(state.errors.len(), 4);
        assert_eq!(state.contents.indices(), &[1]);
    }

    #[test]
    fn test_all_errors_reported_together() {
        let state = check("[3,9,3,1,1]");
        assert_eq!(
            state.errors,
            vec![BuilderError::BadResponse, BuilderError::RepeatedValue, BuilderError::RepeatedValue]
        );
        assert_eq!(state.contents.indices(), &[3, 1]);
        assert_eq!(state.contents_displayed, "2n is even n is even");
    }

    #[test]
    fn test_malformed_response() {
        for raw in ["[1,2", "1", "{\"a\":1}", "hello"] {
            let state = check(raw);
            assert_eq!(state.status, InputStatus::Invalid, "{raw:?}");
            assert_eq!(state.errors, vec![BuilderError::BadResponse]);
            assert!(state.contents.is_empty());
            assert_eq!(state.contents_modified, "[]");
        }
    }

    #[test]
    fn test_non_string_field() {
        let state = validate_student_response(&pool(), "ans1", &fields(serde_json::json!([1, 2])), InputStatus::Score);
        assert_eq!(state.status, InputStatus::Invalid);
        assert_eq!(state.errors, vec![BuilderError::BadResponse]);
        assert!(state.contents.is_empty());
    }

    #[test]
    fn test_validate_contents_ok() {
        let check = validate_contents(&pool(), &[3, 1]);
        assert!(check.valid);
        assert!(check.errors.is_empty());
        assert_eq!(check.value, r#"["2n even","n even"]"#);
    }

    #[test]
    fn test_validate_contents_is_all_or_nothing() {
        let check = validate_contents(&pool(), &[1, 1, 7, 0, 2]);
        assert!(!check.valid);
        assert_eq!(
            check.errors,
            vec![BuilderError::RepeatedValue, BuilderError::UnrecognizedValue, BuilderError::UnrecognizedValue]
        );
        assert!(check.value.is_empty());
    }

    #[test]
    fn test_validate_contents_empty() {
        let check = validate_contents(&pool(), &[]);
        assert!(check.valid);
        assert_eq!(check.value, "[]");
    }
}
