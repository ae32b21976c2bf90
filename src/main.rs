//! Phrase Builder 命令行
//!
//! `<SPEC>` 以 `@` 开头时视为文件路径。

use anyhow::Context;
use clap::{Parser, Subcommand};
use phrase_builder::{
    cas::{grade, ListEqualityEngine},
    config::load_config,
    core::BuilderInput,
    pool::schema::spec_schema_json,
    response::Submission,
};

#[derive(Parser)]
#[command(name = "phrase-builder")]
#[command(about = "Compile phrase pools, validate responses and render the phrase picker")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 输出标准答案三种编码与作者错误
    Compile {
        #[arg(value_parser = parse_spec)]
        spec: String,
    },
    /// 输出学生作答的校验结果与评分
    Validate {
        #[arg(value_parser = parse_spec)]
        spec: String,
        /// index 列表线格式，如 [1,2]
        raw: Option<String>,
    },
    /// 输出选择器 HTML
    Render {
        #[arg(value_parser = parse_spec)]
        spec: String,
        raw: Option<String>,
    },
    /// 输出作者规格的 JSON Schema
    Schema,
}

/// 作者规格参数：`@path` 读文件，否则即规格本身
fn parse_spec(arg: &str) -> Result<String, String> {
    match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read spec file {path}: {e}")),
        None => Ok(arg.to_string()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(None).context("Failed to load config")?;
    phrase_builder::observability::init(&cfg.log.level);

    let input = match &cli.command {
        Command::Schema => {
            println!("{}", spec_schema_json());
            return Ok(());
        }
        Command::Compile { spec } | Command::Validate { spec, .. } | Command::Render { spec, .. } => {
            BuilderInput::from_config(spec, cfg)
        }
    };
    tracing::info!("Compiled {} phrase(s) for input {}", input.pool().len(), input.name());

    match cli.command {
        Command::Compile { .. } => {
            let errors: Vec<String> = input.errors().iter().map(|e| e.to_string()).collect();
            let out = serde_json::json!({
                "model_answer": input.model_answer(),
                "errors": errors,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Validate { raw, .. } => {
            let state = input.validate_student_response(&Submission::Wire(raw.unwrap_or_default()));
            let verdict = grade(&ListEqualityEngine, input.model_answer(), &state)
                .map_err(anyhow::Error::msg)
                .context("Grading failed")?;
            let out = serde_json::json!({
                "state": state,
                "correct": verdict,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Render { raw, .. } => {
            let state = input.validate_student_response(&Submission::Wire(raw.unwrap_or_default()));
            println!("{}", input.render(&state, input.name()));
        }
        Command::Schema => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_validate_command() {
        let cli = Cli::try_parse_from(["phrase-builder", "validate", r#"[["a","A",1]]"#, "[1]"]).unwrap();
        match cli.command {
            Command::Validate { spec, raw } => {
                assert_eq!(spec, r#"[["a","A",1]]"#);
                assert_eq!(raw.as_deref(), Some("[1]"));
            }
            _ => panic!("expected validate"),
        }
    }

    #[test]
    fn test_raw_is_optional() {
        let cli = Cli::try_parse_from(["phrase-builder", "render", "[]"]).unwrap();
        assert!(matches!(cli.command, Command::Render { raw: None, .. }));
    }

    #[test]
    fn test_spec_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("spec.json");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, r#"[["k","K",1]]"#).unwrap();

        let arg = format!("@{}", path.display());
        let cli = Cli::try_parse_from(["phrase-builder", "compile", arg.as_str()]).unwrap();
        assert!(matches!(cli.command, Command::Compile { spec } if spec == r#"[["k","K",1]]"#));
    }

    #[test]
    fn test_missing_spec_file_is_rejected() {
        assert!(Cli::try_parse_from(["phrase-builder", "compile", "@/nonexistent/spec.json"]).is_err());
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["phrase-builder", "grade", "[]"]).is_err());
        assert!(Cli::try_parse_from(["phrase-builder", "schema"]).is_ok());
    }
}
