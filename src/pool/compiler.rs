//! 短语池编译器
//!
//! 作者规格是 JSON 列表，每项为三元组 `[key, text, position]`。逐项解析为严格的
//! `SpecEntry`，错误累计而不短路：格式错误的条目被丢弃（不占 index），
//! key 非法或重复的条目仍然入池，保证 index 稳定。

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::core::BuilderError;
use crate::pool::phrase::{is_valid_key, Phrase};
use crate::pool::PhrasePool;

/// 规格中的一个三元组（解析后）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct SpecEntry(
    /// 规范 key
    pub String,
    /// 展示文本
    pub String,
    /// 标准答案中的名次，<= 0 表示干扰项
    pub i64,
);

impl SpecEntry {
    /// 严格解析：必须恰好三项，依次为字符串、字符串、整数
    pub fn parse(value: &Value) -> Result<Self, BuilderError> {
        serde_json::from_value(value.clone())
            .map_err(|_| BuilderError::BadSpecEntry(value.to_string()))
    }
}

/// 编译结果：短语池与累计的作者错误
#[derive(Debug, Clone, Default)]
pub struct CompileOutcome {
    pub pool: PhrasePool,
    pub errors: Vec<BuilderError>,
}

impl CompileOutcome {
    fn fatal(raw: &str) -> Self {
        Self {
            pool: PhrasePool::fatal(),
            errors: vec![BuilderError::BadSpec(raw.to_string())],
        }
    }
}

/// 编译 JSON 文本形式的作者规格
pub fn compile(spec: &str) -> CompileOutcome {
    match serde_json::from_str::<Value>(spec) {
        Ok(value) => compile_value(&value, spec),
        Err(e) => {
            tracing::warn!("Author spec is not valid JSON: {}", e);
            CompileOutcome::fatal(spec)
        }
    }
}

/// 编译已解码的作者规格；`raw` 仅用于错误信息
pub fn compile_value(value: &Value, raw: &str) -> CompileOutcome {
    let entries = match value.as_array() {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            tracing::warn!("Author spec is empty or not a list");
            return CompileOutcome::fatal(raw);
        }
    };

    let mut errors = Vec::new();
    let mut phrases = Vec::with_capacity(entries.len());
    let mut seen_keys: HashSet<String> = HashSet::new();

    for entry in entries {
        let SpecEntry(key, text, position) = match SpecEntry::parse(entry) {
            Ok(parsed) => parsed,
            Err(e) => {
                errors.push(e);
                continue;
            }
        };

        if !is_valid_key(&key) {
            errors.push(BuilderError::BadKey(key.clone()));
        }
        if !seen_keys.insert(key.clone()) {
            errors.push(BuilderError::DuplicateKey(key.clone()));
        }

        let index = phrases.len() + 1;
        phrases.push(Phrase {
            key,
            text,
            position,
            index,
        });
    }

    let pool = PhrasePool::from_phrases(phrases);
    tracing::debug!(
        phrases = pool.len(),
        correct = pool.correct_order().len(),
        errors = errors.len(),
        "Compiled phrase pool"
    );
    if !errors.is_empty() {
        tracing::warn!("Author spec has {} problem(s)", errors.len());
    }

    CompileOutcome { pool, errors }
}
