//! 代数协作者抽象

/// 代数引擎 trait：比较学生与标准答案的规范 key 列表
///
/// 两个参数都是 `["k1","k2",...]` 形式；返回 `Err` 表示引擎自身失败（超时、不可达等），
/// 这类问题由引擎负责，本模块只透传。
pub trait AlgebraEngine: Send + Sync {
    /// 引擎名称（用于日志）
    fn name(&self) -> &str;

    fn equivalent(&self, student: &str, teacher: &str) -> Result<bool, String>;
}
