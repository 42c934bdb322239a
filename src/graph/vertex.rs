//! 顶点定义
//!
//! 每个顶点同时持有出边和入边的邻接表，两侧互为镜像

use crate::types::Weight;
use std::collections::HashMap;

/// 顶点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    /// 顶点标签（图内唯一）
    label: String,
    /// 出边：目标顶点 -> 权重
    outgoing: HashMap<String, Weight>,
    /// 入边：源顶点 -> 权重
    incoming: HashMap<String, Weight>,
}

impl Vertex {
    /// 创建无边的顶点
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }

    /// 获取顶点标签
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 出边邻接表
    pub fn targets(&self) -> &HashMap<String, Weight> {
        &self.outgoing
    }

    /// 入边邻接表
    pub fn sources(&self) -> &HashMap<String, Weight> {
        &self.incoming
    }

    /// 出度
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// 入度
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    /// 是否没有任何关联边
    pub fn is_isolated(&self) -> bool {
        self.outgoing.is_empty() && self.incoming.is_empty()
    }

    pub(crate) fn put_target(&mut self, target: &str, weight: Weight) -> Option<Weight> {
        self.outgoing.insert(target.to_string(), weight)
    }

    pub(crate) fn put_source(&mut self, source: &str, weight: Weight) -> Option<Weight> {
        self.incoming.insert(source.to_string(), weight)
    }

    pub(crate) fn take_target(&mut self, target: &str) -> Option<Weight> {
        self.outgoing.remove(target)
    }

    pub(crate) fn take_source(&mut self, source: &str) -> Option<Weight> {
        self.incoming.remove(source)
    }

    /// 拆出两侧邻接表，用于级联删除
    pub(crate) fn into_adjacency(self) -> (HashMap<String, Weight>, HashMap<String, Weight>) {
        (self.outgoing, self.incoming)
    }

    pub(crate) fn clear_edges(&mut self) {
        self.outgoing.clear();
        self.incoming.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_new() {
        let v = Vertex::new("A");

        assert_eq!(v.label(), "A");
        assert!(v.is_isolated());
        assert_eq!(v.out_degree(), 0);
        assert_eq!(v.in_degree(), 0);
    }

    #[test]
    fn test_vertex_adjacency() {
        let mut v = Vertex::new("A");

        assert_eq!(v.put_target("B", 2), None);
        assert_eq!(v.put_target("B", 5), Some(2));
        assert_eq!(v.put_source("C", 1), None);

        assert_eq!(v.targets().get("B"), Some(&5));
        assert_eq!(v.sources().get("C"), Some(&1));
        assert_eq!(v.out_degree(), 1);
        assert_eq!(v.in_degree(), 1);

        assert_eq!(v.take_target("B"), Some(5));
        assert_eq!(v.take_target("B"), None);
        assert_eq!(v.take_source("C"), Some(1));
        assert!(v.is_isolated());
    }
}
