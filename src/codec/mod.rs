//! 选择的三种表示之间的编解码
//!
//! - index 列表：UI ⇄ 服务端线格式，如 `[1,2]`
//! - key 列表：持久化与代数层使用的规范编码，如 `["n even","implies"]`
//! - 展示文本：空格拼接，仅用于显示，不再反解析
//!
//! 编解码从不重排：序列位置始终是提交/作者顺序。

use serde_json::Value;

use crate::core::{BuilderError, Selection};
use crate::pool::PhrasePool;

/// index 列表线格式，`[]` 表示空
pub fn encode_indices(indices: &[usize]) -> String {
    let parts: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
    format!("[{}]", parts.join(","))
}

/// key 列表的规范编码（JSON 字符串数组）
pub fn encode_keys<S: AsRef<str>>(keys: &[S]) -> String {
    let keys: Vec<&str> = keys.iter().map(|k| k.as_ref()).collect();
    serde_json::to_string(&keys).unwrap_or_else(|_| String::from("[]"))
}

/// 展示文本：空格拼接
pub fn encode_display<S: AsRef<str>>(texts: &[S]) -> String {
    texts
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 解码规范 key 列表
///
/// 先按 JSON 字符串数组解析；否则按代数层的列表写法 `[a, "b c"]` 拆分：
/// 去掉首尾方括号，在引号之外的逗号处切分，逐项去空白并剥掉外层双引号。
pub fn decode_keys(input: &str) -> Result<Vec<String>, BuilderError> {
    let input = input.trim();
    if let Ok(keys) = serde_json::from_str::<Vec<String>>(input) {
        return Ok(keys);
    }

    let inner = input
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or(BuilderError::BadResponse)?;
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in inner.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if !in_quotes => items.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if in_quotes {
        return Err(BuilderError::BadResponse);
    }
    items.push(current);

    Ok(items.iter().map(|item| unquote(item.trim()).to_string()).collect())
}

fn unquote(item: &str) -> &str {
    item.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(item)
}

/// 解码 index 列表线格式；只保证是 JSON 数组，元素合法性由校验器逐项判断
pub fn decode_index_list(input: &str) -> Result<Vec<Value>, BuilderError> {
    match serde_json::from_str::<Value>(input.trim()) {
        Ok(Value::Array(items)) => Ok(items),
        _ => Err(BuilderError::BadResponse),
    }
}

/// 绑定到某个短语池的编解码器
#[derive(Debug, Clone, Copy)]
pub struct SelectionCodec<'p> {
    pool: &'p PhrasePool,
}

impl<'p> SelectionCodec<'p> {
    pub fn new(pool: &'p PhrasePool) -> Self {
        Self { pool }
    }

    /// index → key；任一 index 不在池中即失败
    pub fn to_keys(&self, indices: &[usize]) -> Result<Vec<&'p str>, BuilderError> {
        indices
            .iter()
            .map(|&i| {
                self.pool
                    .by_index(i)
                    .map(|p| p.key.as_str())
                    .ok_or(BuilderError::UnrecognizedValue)
            })
            .collect()
    }

    /// key → index；任一 key 不在池中即整体失败（没有安全的部分映射）
    pub fn to_indices<S: AsRef<str>>(&self, keys: &[S]) -> Result<Vec<usize>, BuilderError> {
        keys.iter()
            .map(|k| {
                let k = k.as_ref();
                self.pool
                    .by_key(k)
                    .map(|p| p.index)
                    .ok_or_else(|| BuilderError::UnknownKey(k.to_string()))
            })
            .collect()
    }

    /// index → 展示文本
    pub fn to_texts(&self, indices: &[usize]) -> Result<Vec<&'p str>, BuilderError> {
        indices
            .iter()
            .map(|&i| {
                self.pool
                    .by_index(i)
                    .map(|p| p.text.as_str())
                    .ok_or(BuilderError::UnrecognizedValue)
            })
            .collect()
    }

    /// 选择的规范 key 编码（交给代数层的唯一形式）
    pub fn keys_of(&self, selection: &Selection) -> Result<String, BuilderError> {
        self.to_keys(selection.indices()).map(|keys| encode_keys(&keys))
    }

    /// 选择的展示文本
    pub fn display_of(&self, selection: &Selection) -> Result<String, BuilderError> {
        self.to_texts(selection.indices()).map(|texts| encode_display(&texts))
    }

    /// 规范 key 列表文本 → index 线格式
    pub fn keys_to_wire(&self, encoded_keys: &str) -> Result<String, BuilderError> {
        let keys = decode_keys(encoded_keys)?;
        self.to_indices(&keys).map(|indices| encode_indices(&indices))
    }

    /// 规范 key 列表文本 → 选择（key 未知或重复均失败）
    pub fn selection_from_keys(&self, encoded_keys: &str) -> Result<Selection, BuilderError> {
        let keys = decode_keys(encoded_keys)?;
        let indices = self.to_indices(&keys)?;
        Selection::from_indices(self.pool, &indices)
    }
}
