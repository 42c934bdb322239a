//! 邻接索引
//!
//! 标签 -> 顶点的映射，每条边同时登记在源顶点的出边表和目标顶点的入边表中

use crate::graph::vertex::Vertex;
use crate::types::Weight;
use std::collections::HashMap;

/// 邻接索引，只能经由 `Graph` 修改
#[derive(Debug, Clone, Default)]
pub(crate) struct AdjacencyIndex {
    /// 标签到顶点的映射
    vertices: HashMap<String, Vertex>,
    /// 边数量
    edge_count: usize,
}

impl AdjacencyIndex {
    /// 创建空索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 顶点不存在时插入，返回是否新插入
    pub fn ensure_vertex(&mut self, label: &str) -> bool {
        if self.vertices.contains_key(label) {
            return false;
        }
        self.vertices.insert(label.to_string(), Vertex::new(label));
        true
    }

    /// 获取顶点
    pub fn get(&self, label: &str) -> Option<&Vertex> {
        self.vertices.get(label)
    }

    /// 是否存在顶点
    pub fn contains(&self, label: &str) -> bool {
        self.vertices.contains_key(label)
    }

    /// 插入或更新边，返回旧权重
    ///
    /// # Panics
    ///
    /// 权重非正或任一端点不存在时 panic
    pub fn put_edge(&mut self, source: &str, target: &str, weight: Weight) -> Option<Weight> {
        assert!(weight > 0, "边权重必须为正数, 实际为 {}", weight);
        assert!(self.contains(source), "源顶点 {:?} 不存在", source);
        assert!(self.contains(target), "目标顶点 {:?} 不存在", target);

        let previous = self
            .vertices
            .get_mut(source)
            .and_then(|v| v.put_target(target, weight));
        if let Some(v) = self.vertices.get_mut(target) {
            v.put_source(source, weight);
        }

        if previous.is_none() {
            self.edge_count += 1;
        }
        previous
    }

    /// 删除边，返回旧权重
    pub fn take_edge(&mut self, source: &str, target: &str) -> Option<Weight> {
        let previous = self.vertices.get_mut(source)?.take_target(target)?;
        if let Some(v) = self.vertices.get_mut(target) {
            v.take_source(source);
        }
        self.edge_count -= 1;
        Some(previous)
    }

    /// 删除顶点及其所有关联边，返回被删除的边数
    pub fn take_vertex(&mut self, label: &str) -> Option<usize> {
        let (outgoing, incoming) = self.vertices.remove(label)?.into_adjacency();

        // 自环只在 outgoing 中计数一次
        let mut removed = outgoing.len();
        for target in outgoing.keys().filter(|t| t.as_str() != label) {
            if let Some(v) = self.vertices.get_mut(target) {
                v.take_source(label);
            }
        }
        for source in incoming.keys().filter(|s| s.as_str() != label) {
            if let Some(v) = self.vertices.get_mut(source) {
                v.take_target(label);
            }
            removed += 1;
        }

        self.edge_count -= removed;
        Some(removed)
    }

    /// 删除所有边，保留顶点
    pub fn clear_edges(&mut self) {
        for v in self.vertices.values_mut() {
            v.clear_edges();
        }
        self.edge_count = 0;
    }

    /// 删除所有顶点和边
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }

    /// 遍历所有顶点
    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[cfg(test)]
    pub(crate) fn vertex_mut(&mut self, label: &str) -> Option<&mut Vertex> {
        self.vertices.get_mut(label)
    }

    #[cfg(test)]
    pub(crate) fn set_edge_count(&mut self, count: usize) {
        self.edge_count = count;
    }
}
