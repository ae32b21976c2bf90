//! 短语构造输入：把输入名、配置与编译后的短语池组合在一起
//!
//! 题目框架持有一个 `BuilderInput`；作者规格变化时调用 `adapt_to_model_answer` 重建短语池，
//! 其余操作都委托给以不可变短语池为参数的纯函数。

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::cas::ModelAnswer;
use crate::codec::SelectionCodec;
use crate::config::AppConfig;
use crate::core::{BuilderError, InputState, Selection};
use crate::pool::{compile, PhrasePool};
use crate::render;
use crate::response::{raw_field_name, validate_contents, validate_student_response, ContentsCheck, Submission};

/// 输入参数默认值（mustVerify / showValidation / options）
pub fn parameter_defaults() -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("mustVerify".to_string(), Value::Bool(false));
    params.insert("showValidation".to_string(), Value::from(0));
    params.insert("options".to_string(), Value::String(String::new()));
    params
}

pub struct BuilderInput {
    name: String,
    config: AppConfig,
    pool: PhrasePool,
    errors: Vec<BuilderError>,
    model: ModelAnswer,
    must_verify: bool,
}

impl BuilderInput {
    /// 创建输入并编译作者规格
    pub fn new(name: &str, spec: &str, config: AppConfig) -> Self {
        let mut input = Self {
            name: name.to_string(),
            config,
            pool: PhrasePool::fatal(),
            errors: Vec::new(),
            model: ModelAnswer::error(),
            must_verify: false,
        };
        input.adapt_to_model_answer(spec);
        input
    }

    /// 使用配置中的输入名
    pub fn from_config(spec: &str, config: AppConfig) -> Self {
        let name = config.input.name.clone();
        Self::new(&name, spec, config)
    }

    /// 是否要求学生先确认再评分（决定 `maxima_to_response_array` 是否带 `_val` 字段）
    pub fn with_must_verify(mut self, must_verify: bool) -> Self {
        self.must_verify = must_verify;
        self
    }

    /// 重新编译作者规格；返回规格是否可用（非致命）
    pub fn adapt_to_model_answer(&mut self, spec: &str) -> bool {
        let outcome = compile(spec);
        self.pool = outcome.pool;
        self.errors = outcome.errors;
        self.model = ModelAnswer::adapt(&self.pool);
        !self.pool.is_fatal()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pool(&self) -> &PhrasePool {
        &self.pool
    }

    /// 编译阶段的作者错误
    pub fn errors(&self) -> &[BuilderError] {
        &self.errors
    }

    pub fn model_answer(&self) -> &ModelAnswer {
        &self.model
    }

    /// 期望的表单字段：仅 `<name>_raw`
    pub fn get_expected_data(&self) -> Vec<String> {
        vec![raw_field_name(&self.name)]
    }

    pub fn validate_student_response(&self, submission: &Submission) -> InputState {
        validate_student_response(&self.pool, &self.name, submission, self.config.input.default_status)
    }

    /// 作者侧严格校验；错误列表以编译错误开头
    pub fn validate_contents(&self, contents: &[i64]) -> ContentsCheck {
        let mut check = validate_contents(&self.pool, contents);
        if !self.errors.is_empty() {
            let mut errors = self.errors.clone();
            errors.append(&mut check.errors);
            check.errors = errors;
        }
        check
    }

    /// 标准答案作为「正确作答」的字段表
    pub fn get_correct_response(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(raw_field_name(&self.name), self.model.raw.clone())])
    }

    pub fn get_teacher_answer_display(&self) -> String {
        self.model.teacher_answer_display()
    }

    /// 规范 key 列表 → 作答字段表（需要确认时附带 `<name>_val`）
    pub fn maxima_to_response_array(&self, value: &str) -> Result<BTreeMap<String, String>, BuilderError> {
        let wire = SelectionCodec::new(&self.pool).keys_to_wire(value)?;
        let mut response = BTreeMap::from([(raw_field_name(&self.name), wire)]);
        if self.must_verify {
            response.insert(format!("{}_val", self.name), value.to_string());
        }
        Ok(response)
    }

    /// 以 key 列表保存的作答字段 `<name>` → 选择
    pub fn response_to_contents(&self, fields: &Map<String, Value>) -> Result<Selection, BuilderError> {
        let encoded = fields
            .get(&self.name)
            .and_then(Value::as_str)
            .ok_or(BuilderError::BadResponse)?;
        SelectionCodec::new(&self.pool).selection_from_keys(encoded)
    }

    pub fn is_blank_response(&self, contents: &Selection) -> bool {
        contents.is_empty()
    }

    /// 渲染选择器；`field_name` 是页面中的完整字段前缀
    pub fn render(&self, state: &InputState, field_name: &str) -> String {
        render::render(&self.pool, &self.errors, &state.contents, field_name, &self.config.render)
    }
}
