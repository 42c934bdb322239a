//! 边定义
//!
//! 有向带权边：(source, target) 唯一确定一条边

use crate::types::Weight;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    /// 源顶点
    source: String,
    /// 目标顶点
    target: String,
    /// 权重（> 0）
    weight: Weight,
}

impl Edge {
    /// 创建新边
    ///
    /// # Panics
    ///
    /// `weight <= 0` 时 panic。非正权重不是合法的存储边，调用方应走 `Graph::set` 的删边路径
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: Weight) -> Self {
        assert!(weight > 0, "边权重必须为正数, 实际为 {}", weight);
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// 获取源顶点
    pub fn source(&self) -> &str {
        &self.source
    }

    /// 获取目标顶点
    pub fn target(&self) -> &str {
        &self.target
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 是否为自环
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} [weight: {}]", self.source, self.target, self.weight)
    }
}
