//! 基于边列表的参考实现
//!
//! 只用于差分测试和基准对比：所有查询都是 O(E)

use std::collections::{HashMap, HashSet};
use wdgraph::{Edge, Weight, WeightedDigraph};

#[derive(Debug, Clone, Default)]
pub struct EdgeListGraph {
    vertices: HashSet<String>,
    edges: Vec<Edge>,
}

impl EdgeListGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, source: &str, target: &str) -> Option<usize> {
        self.edges
            .iter()
            .position(|e| e.source() == source && e.target() == target)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl WeightedDigraph for EdgeListGraph {
    fn add_vertex(&mut self, label: &str) -> bool {
        self.vertices.insert(label.to_string())
    }

    fn set(&mut self, source: &str, target: &str, weight: Weight) -> Weight {
        let existing = self.position(source, target);
        if weight <= 0 {
            return existing.map_or(0, |i| self.edges.remove(i).weight());
        }

        self.vertices.insert(source.to_string());
        self.vertices.insert(target.to_string());
        let edge = Edge::new(source, target, weight);
        match existing {
            Some(i) => std::mem::replace(&mut self.edges[i], edge).weight(),
            None => {
                self.edges.push(edge);
                0
            }
        }
    }

    fn remove(&mut self, label: &str) -> bool {
        if !self.vertices.remove(label) {
            return false;
        }
        self.edges
            .retain(|e| e.source() != label && e.target() != label);
        true
    }

    fn vertices(&self) -> HashSet<String> {
        self.vertices.clone()
    }

    fn sources(&self, target: &str) -> HashMap<String, Weight> {
        self.edges
            .iter()
            .filter(|e| e.target() == target)
            .map(|e| (e.source().to_string(), e.weight()))
            .collect()
    }

    fn targets(&self, source: &str) -> HashMap<String, Weight> {
        self.edges
            .iter()
            .filter(|e| e.source() == source)
            .map(|e| (e.target().to_string(), e.weight()))
            .collect()
    }
}
