//! 列表相等引擎（无需外部 CAS）
//!
//! 解码两侧 key 列表后逐项比较，顺序敏感。

use crate::cas::AlgebraEngine;
use crate::codec::decode_keys;

#[derive(Debug, Default, Clone, Copy)]
pub struct ListEqualityEngine;

impl AlgebraEngine for ListEqualityEngine {
    fn name(&self) -> &str {
        "list-equality"
    }

    fn equivalent(&self, student: &str, teacher: &str) -> Result<bool, String> {
        let student = decode_keys(student).map_err(|e| e.to_string())?;
        let teacher = decode_keys(teacher).map_err(|e| e.to_string())?;
        Ok(student == teacher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_lists() {
        let engine = ListEqualityEngine;
        assert_eq!(engine.equivalent(r#"["a","b"]"#, r#"[a, "b"]"#), Ok(true));
    }

    #[test]
    fn test_order_matters() {
        let engine = ListEqualityEngine;
        assert_eq!(engine.equivalent(r#"["b","a"]"#, r#"["a","b"]"#), Ok(false));
    }

    #[test]
    fn test_undecodable_is_engine_error() {
        let engine = ListEqualityEngine;
        assert!(engine.equivalent("oops", "[]").is_err());
    }
}
