//! 作答校验：学生提交 → 去重、有序的选择 + 结构化错误列表

pub mod validator;

pub use validator::{raw_field_name, validate_contents, validate_student_response, ContentsCheck, Submission};
