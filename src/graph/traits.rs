//! 带权有向图的操作契约

use crate::types::{Weight, DEFAULT_WEIGHT};
use std::collections::{HashMap, HashSet};

/// 可变的带权有向图，顶点以字符串标签区分
///
/// 所有查询返回独立快照，修改返回值不会影响图本身。
/// 除 `set` 以正权重隐式创建端点外，没有其他操作会隐式创建顶点。
pub trait WeightedDigraph {
    /// 添加顶点，返回是否为新顶点
    fn add_vertex(&mut self, label: &str) -> bool;

    /// 设置边 `source -> target` 的权重，返回旧权重（不存在时为 0）
    ///
    /// - `weight > 0`：插入或更新边，缺失的端点会被自动创建
    /// - `weight <= 0`：删除该边（不存在时什么也不做），不会创建或删除顶点
    fn set(&mut self, source: &str, target: &str, weight: Weight) -> Weight;

    /// 删除顶点及其所有入边和出边，返回顶点是否存在
    fn remove(&mut self, label: &str) -> bool;

    /// 所有顶点标签
    fn vertices(&self) -> HashSet<String>;

    /// 指向 `target` 的所有源顶点及边权重
    fn sources(&self, target: &str) -> HashMap<String, Weight>;

    /// 从 `source` 出发的所有目标顶点及边权重
    fn targets(&self, source: &str) -> HashMap<String, Weight>;

    /// 添加无权边（权重为 1），返回旧权重
    fn add_edge(&mut self, source: &str, target: &str) -> Weight {
        self.set(source, target, DEFAULT_WEIGHT)
    }

    /// 边的权重
    fn weight(&self, source: &str, target: &str) -> Option<Weight> {
        self.targets(source).get(target).copied()
    }

    /// 是否存在边
    fn has_edge(&self, source: &str, target: &str) -> bool {
        self.weight(source, target).is_some()
    }
}
