//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `PHRASE_BUILDER__*` 覆盖（双下划线表示嵌套，如 `PHRASE_BUILDER__INPUT__NAME=ans2`）。

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::core::InputStatus;

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputSection,
    #[serde(default)]
    pub render: RenderSection,
    #[serde(default)]
    pub log: LogSection,
}

/// [input] 段：输入名与无错误时的作答状态
#[derive(Debug, Clone, Deserialize)]
pub struct InputSection {
    /// 输入名；原始字段为 `<name>_raw`
    #[serde(default = "default_input_name")]
    pub name: String,
    /// score / valid
    #[serde(default)]
    pub default_status: InputStatus,
}

fn default_input_name() -> String {
    "ans1".to_string()
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            name: default_input_name(),
            default_status: InputStatus::default(),
        }
    }
}

/// [render] 段：选择器说明文字、作者错误是否阻止渲染
#[derive(Debug, Clone, Deserialize)]
pub struct RenderSection {
    #[serde(default = "default_instructions")]
    pub instructions: String,
    /// 为 true 时任何编译错误都以错误片段替代选择器；否则仅规格致命错误如此
    #[serde(default = "default_block_on_author_errors")]
    pub block_on_author_errors: bool,
}

fn default_instructions() -> String {
    "Construct your answer in the upper panel by clicking on phrases in the lower panel.  \
     If you click on a phrase by mistake, just click on it again to move it back to the lower panel.  \
     You may not need to use all of the phrases. "
        .to_string()
}

fn default_block_on_author_errors() -> bool {
    true
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            instructions: default_instructions(),
            block_on_author_errors: default_block_on_author_errors(),
        }
    }
}

/// [log] 段：默认日志级别（RUST_LOG 优先）
#[derive(Debug, Clone, Deserialize)]
pub struct LogSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// 第一个存在的默认配置文件（config/default.toml、../config/default.toml、default.toml）
fn default_config_file() -> Option<&'static str> {
    ["config/default", "../config/default", "default"]
        .into_iter()
        .find(|name| Path::new(&format!("{name}.toml")).exists())
}

impl AppConfig {
    /// 加载后的约束：输入名非空且不含空白（它是表单字段前缀）；无错误作答只能是 score 或 valid
    pub fn check(&self) -> Result<(), ConfigError> {
        let name = &self.input.name;
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(ConfigError::Message(format!(
                "input.name must be a non-empty field prefix without whitespace, got {name:?}"
            )));
        }
        if !matches!(self.input.default_status, InputStatus::Score | InputStatus::Valid) {
            return Err(ConfigError::Message(format!(
                "input.default_status must be score or valid, got {:?}",
                self.input.default_status
            )));
        }
        Ok(())
    }
}

/// 加载配置：内置默认值 → 默认配置文件 → `config_path` → 环境变量 PHRASE_BUILDER__*（双下划线表示嵌套键），
/// 最后做 `AppConfig::check`
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .set_default("input.name", default_input_name())?
        .set_default("input.default_status", "score")?
        .set_default("render.block_on_author_errors", default_block_on_author_errors())?
        .set_default("log.level", default_log_level())?;

    if let Some(name) = default_config_file() {
        builder = builder.add_source(File::with_name(name).required(false));
    }
    if let Some(path) = config_path.filter(|p| p.exists()) {
        builder = builder.add_source(File::from(path).required(false));
    }
    builder = builder.add_source(
        Environment::with_prefix("PHRASE_BUILDER")
            .separator("__")
            .try_parsing(true),
    );

    let cfg: AppConfig = builder.build()?.try_deserialize()?;
    cfg.check()?;
    tracing::debug!(input = %cfg.input.name, status = ?cfg.input.default_status, "Loaded config");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.input.name, "ans1");
        assert_eq!(cfg.input.default_status, InputStatus::Score);
        assert!(cfg.render.block_on_author_errors);
        assert!(cfg.render.instructions.starts_with("Construct your answer"));
        assert!(cfg.render.instructions.contains("panel.  If you"));
        assert_eq!(cfg.log.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("builder.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "[input]\nname = \"ans7\"\ndefault_status = \"valid\"\n\n[render]\nblock_on_author_errors = false").unwrap();

        let cfg = load_config(Some(path)).unwrap();
        assert_eq!(cfg.input.name, "ans7");
        assert_eq!(cfg.input.default_status, InputStatus::Valid);
        assert!(!cfg.render.block_on_author_errors);
        assert!(cfg.render.instructions.starts_with("Construct"));
    }

    #[test]
    fn test_rejects_blank_default_status() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("builder.toml");
        std::fs::write(&path, "[input]\ndefault_status = \"blank\"\n").unwrap();
        assert!(load_config(Some(path)).is_err());
    }

    #[test]
    fn test_rejects_bad_input_name() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("builder.toml");
        std::fs::write(&path, "[input]\nname = \"ans 1\"\n").unwrap();
        assert!(load_config(Some(path)).is_err());
    }

    #[test]
    fn test_check_defaults() {
        assert!(AppConfig::default().check().is_ok());
        let mut cfg = AppConfig::default();
        cfg.input.default_status = InputStatus::Invalid;
        assert!(cfg.check().is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let cfg = load_config(Some(PathBuf::from("/nonexistent/builder.toml"))).unwrap();
        assert_eq!(cfg.input.name, "ans1");
    }
}
