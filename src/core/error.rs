//! 短语构造输入的错误类型
//!
//! 编译与校验从不向调用方抛错：问题收集进 `Vec<BuilderError>` 与状态码；
//! 只有「按 key 反查 index」这类无法部分成功的转换才整体返回 `Err`。

use thiserror::Error;

/// 作者规格、学生作答与编解码过程中可能出现的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// 规格整体无法解析、不是列表或为空（致命：阻止渲染选择器）
    #[error("The model answer field for this input is malformed: <code>{0}</code>.")]
    BadSpec(String),

    /// 单个三元组格式错误，该条目被丢弃
    #[error("The model answer field for this input is malformed: <code>{0}</code>.")]
    BadSpecEntry(String),

    /// key 含有允许字符集之外的字符，条目保留
    #[error("The key <code>{0}</code> may only contain letters, digits, spaces and the characters -%^*()_+={{}}:;")]
    BadKey(String),

    /// key 重复，条目保留
    #[error("The keys in the model answer are not distinct: <code>{0}</code> is used more than once.")]
    DuplicateKey(String),

    #[error("The response is malformed.")]
    BadResponse,

    #[error("The response contains a repeated value.")]
    RepeatedValue,

    #[error("The response contains an unrecognised value.")]
    UnrecognizedValue,

    /// 按 key 解码时遇到池中不存在的 key，整个解码失败
    #[error("The key <code>{0}</code> does not belong to any phrase of this input.")]
    UnknownKey(String),
}

impl BuilderError {
    /// 是否为规格级致命错误
    pub fn is_fatal(&self) -> bool {
        matches!(self, BuilderError::BadSpec(_))
    }
}

/// 将错误列表拼接为一段展示文本（空格分隔）
pub fn join_errors(errors: &[BuilderError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
