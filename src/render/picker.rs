//! 选择器组件状态机
//!
//! 只维护一个有序的「已用」列表，「未用」由作者顺序减去已用推导；
//! 每次点击把一个短语在两边之间移动（移入时追加到末尾），隐藏字段随之由「已用」重算。

use crate::codec::encode_indices;
use crate::core::Selection;
use crate::pool::PhrasePool;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    order: Vec<usize>,
    used: Vec<usize>,
}

impl PickerState {
    pub fn new(pool: &PhrasePool, selection: &Selection) -> Self {
        let order: Vec<usize> = pool.phrases().iter().map(|p| p.index).collect();
        let used = selection
            .indices()
            .iter()
            .copied()
            .filter(|i| order.contains(i))
            .collect();
        Self { order, used }
    }

    /// 点击短语；未知 index 返回 false 且不改变状态
    pub fn toggle(&mut self, index: usize) -> bool {
        if !self.order.contains(&index) {
            return false;
        }
        match self.used.iter().position(|&i| i == index) {
            Some(pos) => {
                self.used.remove(pos);
            }
            None => self.used.push(index),
        }
        true
    }

    pub fn used(&self) -> &[usize] {
        &self.used
    }

    pub fn unused(&self) -> Vec<usize> {
        self.order
            .iter()
            .copied()
            .filter(|i| !self.used.contains(i))
            .collect()
    }

    /// 隐藏字段的值；「已用」为空时为空串（提交即视为未作答）
    pub fn wire(&self) -> String {
        if self.used.is_empty() {
            String::new()
        } else {
            encode_indices(&self.used)
        }
    }
}
