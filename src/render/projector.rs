//! 选择 → 两个有序列表

use crate::codec::encode_indices;
use crate::core::Selection;
use crate::pool::{Phrase, PhrasePool};

/// 渲染所需的全部数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection<'p> {
    /// 已用：选择中的顺序
    pub used: Vec<&'p Phrase>,
    /// 未用：其余短语，作者顺序
    pub unused: Vec<&'p Phrase>,
    /// 隐藏字段的 index 线格式
    pub wire: String,
}

/// 选择中不在池里的 index 直接忽略
pub fn project<'p>(pool: &'p PhrasePool, selection: &Selection) -> Projection<'p> {
    let used: Vec<&Phrase> = selection
        .indices()
        .iter()
        .filter_map(|&i| pool.by_index(i))
        .collect();
    let unused = pool
        .phrases()
        .iter()
        .filter(|p| !selection.contains(p.index))
        .collect();
    let wire = encode_indices(&used.iter().map(|p| p.index).collect::<Vec<_>>());

    Projection { used, unused, wire }
}
