//! 作者规格线格式的 JSON Schema（schemars 自动生成）
//!
//! 供题目编辑器或外部工具提示 `[[key, text, position], ...]` 的结构。

use schemars::schema_for;

use crate::pool::SpecEntry;

/// 返回作者规格的 JSON Schema 字符串
pub fn spec_schema_json() -> String {
    let schema = schema_for!(Vec<SpecEntry>);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_schema_is_array_of_triples() {
        let json = spec_schema_json();
        let schema: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(schema["type"], "array");
        assert!(json.contains("SpecEntry"));
    }
}
