//! 短语池：编译后的不可变索引集合
//!
//! - **phrase**: 短语记录与 key 字符集校验
//! - **compiler**: 作者规格 → 短语池（累计错误，不短路）
//! - **schema**: 作者规格线格式的 JSON Schema

pub mod compiler;
pub mod phrase;
pub mod schema;

use std::collections::HashMap;

use serde::Serialize;

pub use compiler::{compile, compile_value, CompileOutcome, SpecEntry};
pub use phrase::{is_valid_key, Phrase, KEY_PUNCTUATION};

/// 标准答案顺序：position > 0 的短语按 position 升序（稳定排序），以三条平行序列暴露
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorrectOrder {
    pub indices: Vec<usize>,
    pub keys: Vec<String>,
    pub texts: Vec<String>,
}

impl CorrectOrder {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// 一个输入的完整短语池
///
/// 编译完成后只读：index 稠密地覆盖 `1..=N`，因此 `phrases` 本身就是 index → 短语表；
/// `by_key` 为 key → 短语在 `phrases` 中的偏移（重复 key 时后出现者生效，同时编译报错）。
#[derive(Debug, Clone, Default)]
pub struct PhrasePool {
    phrases: Vec<Phrase>,
    by_key: HashMap<String, usize>,
    correct: CorrectOrder,
    fatal: bool,
}

impl PhrasePool {
    /// 规格致命错误时的空池（渲染层据此显示错误片段）
    pub fn fatal() -> Self {
        Self {
            fatal: true,
            ..Self::default()
        }
    }

    pub(crate) fn from_phrases(phrases: Vec<Phrase>) -> Self {
        let by_key = phrases
            .iter()
            .enumerate()
            .map(|(offset, p)| (p.key.clone(), offset))
            .collect();

        let mut correct: Vec<&Phrase> = phrases.iter().filter(|p| p.in_model_answer()).collect();
        correct.sort_by_key(|p| p.position);
        let correct = CorrectOrder {
            indices: correct.iter().map(|p| p.index).collect(),
            keys: correct.iter().map(|p| p.key.clone()).collect(),
            texts: correct.iter().map(|p| p.text.clone()).collect(),
        };

        Self {
            phrases,
            by_key,
            correct,
            fatal: false,
        }
    }

    /// 规格是否致命错误（池为空，不应渲染选择器）
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// 作者顺序的全部短语
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn by_index(&self, index: usize) -> Option<&Phrase> {
        index.checked_sub(1).and_then(|offset| self.phrases.get(offset))
    }

    pub fn by_key(&self, key: &str) -> Option<&Phrase> {
        self.by_key.get(key).and_then(|&offset| self.phrases.get(offset))
    }

    pub fn contains_index(&self, index: usize) -> bool {
        self.by_index(index).is_some()
    }

    pub fn correct_order(&self) -> &CorrectOrder {
        &self.correct
    }
}
