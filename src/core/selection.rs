//! 学生选择：有序、无重复的短语 index 序列
//!
//! 每次提交时由校验器从线格式新建，之后不再修改；投影成三种编码后即丢弃。

use std::collections::HashSet;

use serde::Serialize;

use crate::core::BuilderError;
use crate::pool::PhrasePool;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    pub fn empty() -> Self {
        Self::default()
    }

    /// 严格构造：任一 index 不在池中或重复即整体失败
    pub fn from_indices(pool: &PhrasePool, indices: &[usize]) -> Result<Self, BuilderError> {
        let mut seen = HashSet::with_capacity(indices.len());
        for &i in indices {
            if !pool.contains_index(i) {
                return Err(BuilderError::UnrecognizedValue);
            }
            if !seen.insert(i) {
                return Err(BuilderError::RepeatedValue);
            }
        }
        Ok(Self {
            indices: indices.to_vec(),
        })
    }

    /// 仅供校验器在已去重、已查表后追加
    pub(crate) fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}
