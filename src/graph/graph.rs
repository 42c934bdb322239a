//! 图数据结构
//!
//! 基于邻接表的带权有向图，`sources`/`targets` 的开销与顶点度数成正比

use super::edge::Edge;
use super::index::AdjacencyIndex;
use super::traits::WeightedDigraph;
use super::vertex::Vertex;
use crate::types::{Weight, DEFAULT_WEIGHT};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use tracing::{debug, trace};

/// 图统计快照
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub max_out_degree: usize,
    pub max_in_degree: usize,
    pub isolated_vertices: usize,
    pub self_loops: usize,
}

/// 带权有向图
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 邻接索引
    index: AdjacencyIndex,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建空图
    pub fn empty() -> Self {
        Self::new()
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，已存在时返回 false
    pub fn add_vertex(&mut self, label: &str) -> bool {
        let added = self.index.ensure_vertex(label);
        trace!(vertex = label, added, "add_vertex");
        added
    }

    /// 删除顶点，并级联删除所有以它为源或目标的边
    pub fn remove(&mut self, label: &str) -> bool {
        let Some(removed_edges) = self.index.take_vertex(label) else {
            trace!(vertex = label, "remove: 顶点不存在");
            return false;
        };
        debug!(vertex = label, removed_edges, "remove: 级联删除关联边");
        self.debug_check();
        true
    }

    /// 是否存在顶点
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.index.contains(label)
    }

    /// 获取顶点（只读）
    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.index.get(label)
    }

    /// 所有顶点标签的快照
    pub fn vertices(&self) -> HashSet<String> {
        self.index.iter().map(|v| v.label().to_string()).collect()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.index.vertex_count()
    }

    // ==================== 边操作 ====================

    /// 设置边权重，返回旧权重（没有旧边时为 0）
    ///
    /// 正权重插入或更新边，并自动创建缺失的端点。
    /// 非正权重视为删边请求：边不存在时返回 0，且不会创建端点。
    pub fn set(&mut self, source: &str, target: &str, weight: Weight) -> Weight {
        if weight <= 0 {
            let previous = self.index.take_edge(source, target).unwrap_or(0);
            trace!(source, target, previous, "set: 删除边");
            self.debug_check();
            return previous;
        }

        self.index.ensure_vertex(source);
        self.index.ensure_vertex(target);
        let previous = self.index.put_edge(source, target, weight).unwrap_or(0);
        trace!(source, target, weight, previous, "set: 写入边");
        self.debug_check();
        previous
    }

    /// 添加无权边（权重为 1），返回旧权重
    pub fn add_edge(&mut self, source: &str, target: &str) -> Weight {
        self.set(source, target, DEFAULT_WEIGHT)
    }

    /// 获取边权重
    pub fn weight(&self, source: &str, target: &str) -> Option<Weight> {
        self.index.get(source)?.targets().get(target).copied()
    }

    /// 是否存在边
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.weight(source, target).is_some()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.index.edge_count()
    }

    /// 所有边，按 (source, target) 排序
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .index
            .iter()
            .flat_map(|v| {
                v.targets()
                    .iter()
                    .map(move |(target, &weight)| Edge::new(v.label(), target.as_str(), weight))
            })
            .collect();
        edges.sort();
        edges
    }

    /// 删除所有边，保留顶点
    pub fn clear_edges(&mut self) {
        debug!(edges = self.edge_count(), "clear_edges");
        self.index.clear_edges();
        self.debug_check();
    }

    /// 删除所有顶点和边
    pub fn clear(&mut self) {
        debug!(
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            "clear"
        );
        self.index.clear();
    }

    // ==================== 邻居查询 ====================

    /// 指向 `target` 的源顶点及权重快照；顶点不存在时为空
    pub fn sources(&self, target: &str) -> HashMap<String, Weight> {
        self.index
            .get(target)
            .map(|v| v.sources().clone())
            .unwrap_or_default()
    }

    /// 从 `source` 出发的目标顶点及权重快照；顶点不存在时为空
    pub fn targets(&self, source: &str) -> HashMap<String, Weight> {
        self.index
            .get(source)
            .map(|v| v.targets().clone())
            .unwrap_or_default()
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, label: &str) -> usize {
        self.index.get(label).map_or(0, Vertex::out_degree)
    }

    /// 获取顶点的入度
    pub fn in_degree(&self, label: &str) -> usize {
        self.index.get(label).map_or(0, Vertex::in_degree)
    }

    // ==================== 统计与校验 ====================

    /// 统计快照
    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            ..GraphStats::default()
        };
        for v in self.index.iter() {
            stats.max_out_degree = stats.max_out_degree.max(v.out_degree());
            stats.max_in_degree = stats.max_in_degree.max(v.in_degree());
            if v.is_isolated() {
                stats.isolated_vertices += 1;
            }
            if v.targets().contains_key(v.label()) {
                stats.self_loops += 1;
            }
        }
        stats
    }

    /// 校验表示不变式，违反时 panic
    ///
    /// - 每条边的权重 > 0
    /// - 出边表与入边表互为镜像，且只引用图中存在的顶点
    /// - 边计数与邻接表一致
    pub fn check_rep(&self) {
        let mut counted = 0;
        for v in self.index.iter() {
            for (target, &weight) in v.targets() {
                assert!(weight > 0, "边 {} -> {} 权重非正: {}", v.label(), target, weight);
                let mirrored = self.index.get(target).and_then(|t| t.sources().get(v.label()));
                assert_eq!(
                    mirrored,
                    Some(&weight),
                    "边 {} -> {} 缺少入边镜像",
                    v.label(),
                    target
                );
                counted += 1;
            }
            for (source, &weight) in v.sources() {
                let mirrored = self.index.get(source).and_then(|s| s.targets().get(v.label()));
                assert_eq!(
                    mirrored,
                    Some(&weight),
                    "边 {} -> {} 缺少出边镜像",
                    source,
                    v.label()
                );
            }
        }
        assert_eq!(counted, self.index.edge_count(), "边计数不一致");
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            self.check_rep();
        }
    }
}

impl WeightedDigraph for Graph {
    fn add_vertex(&mut self, label: &str) -> bool {
        Graph::add_vertex(self, label)
    }

    fn set(&mut self, source: &str, target: &str, weight: Weight) -> Weight {
        Graph::set(self, source, target, weight)
    }

    fn remove(&mut self, label: &str) -> bool {
        Graph::remove(self, label)
    }

    fn vertices(&self) -> HashSet<String> {
        Graph::vertices(self)
    }

    fn sources(&self, target: &str) -> HashMap<String, Weight> {
        Graph::sources(self, target)
    }

    fn targets(&self, source: &str) -> HashMap<String, Weight> {
        Graph::targets(self, source)
    }

    fn weight(&self, source: &str, target: &str) -> Option<Weight> {
        Graph::weight(self, source, target)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: BTreeSet<&str> = self.index.iter().map(Vertex::label).collect();
        writeln!(f, "Vertices: {:?}", labels)?;
        writeln!(f, "Edges:")?;
        for edge in self.edges() {
            writeln!(f, "  {}", edge)?;
        }
        Ok(())
    }
}
