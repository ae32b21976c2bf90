//! 短语：池中的最小可选单元

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// key 允许的标点（另加字母、数字、空格）；这些字符在代数编码中无需转义
pub const KEY_PUNCTUATION: &str = "-%^*()_+={}:;";

static KEY_RE: OnceLock<Regex> = OnceLock::new();

/// key 是否只包含允许字符
pub fn is_valid_key(key: &str) -> bool {
    let re = KEY_RE.get_or_init(|| {
        Regex::new(r"^[-A-Za-z0-9 %^*()_+={}:;]*$").expect("key pattern is a valid regex")
    });
    re.is_match(key)
}

/// 编译后的短语（不可变）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phrase {
    /// 规范 key，用于代数层的列表编码
    pub key: String,
    /// 展示给学生的文本
    pub text: String,
    /// > 0：在标准答案中的名次；<= 0：干扰项
    pub position: i64,
    /// 从 1 开始、按作者顺序分配的外部标识
    pub index: usize,
}

impl Phrase {
    pub fn in_model_answer(&self) -> bool {
        self.position > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keys() {
        assert!(is_valid_key("n even"));
        assert!(is_valid_key("2n even"));
        assert!(is_valid_key("x^2+1=(y-z)*{a}:b;c%d_e"));
        assert!(is_valid_key(""));
    }

    #[test]
    fn test_invalid_keys() {
        assert!(!is_valid_key("a\"b"));
        assert!(!is_valid_key("a,b"));
        assert!(!is_valid_key("it's"));
        assert!(!is_valid_key("tab\there"));
        assert!(!is_valid_key("ünïcode"));
    }

    #[test]
    fn test_punctuation_constant_matches_pattern() {
        for c in KEY_PUNCTUATION.chars() {
            assert!(is_valid_key(&c.to_string()), "{c} should be allowed");
        }
    }
}
