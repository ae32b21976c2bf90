//! 选择器 HTML 片段
//!
//! 短语文本原样输出（作者可在其中写标记），属性值做转义。

use crate::config::RenderSection;
use crate::core::error::join_errors;
use crate::core::{BuilderError, Selection};
use crate::pool::{Phrase, PhrasePool};
use crate::render::project;

const RUNTIME_ERROR_NOTICE: &str =
    "The input has generated the following runtime error which prevents you from answering. Please contact your teacher.";

fn escape_attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

fn phrase_li(field_name: &str, phrase: &Phrase) -> String {
    format!(
        "<li class=\"builder_phrase\" id=\"{}\">{}</li>",
        escape_attr(&format!("{field_name}_{}", phrase.index)),
        phrase.text
    )
}

fn panel(field_name: &str, class: &str, items: &[&Phrase]) -> String {
    let lis: Vec<String> = items.iter().map(|p| phrase_li(field_name, p)).collect();
    let id = escape_attr(field_name);
    format!(
        "<div class=\"{class}\" id=\"{id}_{class_suffix}_div\"><ol class=\"{class}\" id=\"{id}_{class_suffix}_ol\">{}</ol></div>",
        lis.join("\n"),
        class_suffix = class.trim_start_matches("builder_"),
    )
}

/// 运行时错误片段（替代选择器）
pub fn render_error(errors: &[BuilderError]) -> String {
    format!(
        "<div class=\"error\"><p>{RUNTIME_ERROR_NOTICE}</p><p>{}</p></div>",
        join_errors(errors)
    )
}

/// 渲染选择器
///
/// 规格致命，或（`block_on_author_errors` 时）存在任何编译错误，则输出错误片段。
pub fn render(
    pool: &PhrasePool,
    compile_errors: &[BuilderError],
    selection: &Selection,
    field_name: &str,
    cfg: &RenderSection,
) -> String {
    let blocked = pool.is_fatal() || (cfg.block_on_author_errors && !compile_errors.is_empty());
    if blocked {
        return render_error(compile_errors);
    }

    let proj = project(pool, selection);
    let raw_name = escape_attr(&format!("{field_name}_raw"));
    let hidden = format!(
        "<input id=\"{raw_name}\" name=\"{raw_name}\" type=\"hidden\" value=\"{}\"></input>",
        escape_attr(&proj.wire)
    );

    format!(
        "<div><p class=\"stackinputnotice\">{}</p><br/>\n{}<br/>\n{}\n{}\n</div>",
        cfg.instructions,
        panel(field_name, "builder_used", &proj.used),
        panel(field_name, "builder_unused", &proj.unused),
        hidden
    )
}
