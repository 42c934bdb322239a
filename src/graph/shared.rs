//! 共享图
//!
//! `Graph` 本身不做任何同步。需要跨线程访问时，用一把读写锁保护整个实例

use super::graph::Graph;
use parking_lot::RwLock;
use std::sync::Arc;

/// 由单把读写锁保护的图，克隆后共享同一实例
#[derive(Debug, Clone, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<Graph>>,
}

impl SharedGraph {
    /// 包装已有的图
    pub fn new(graph: Graph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// 持读锁执行查询
    pub fn read<R>(&self, f: impl FnOnce(&Graph) -> R) -> R {
        f(&self.inner.read())
    }

    /// 持写锁执行修改，闭包内的多步修改对其他线程整体可见
    pub fn write<R>(&self, f: impl FnOnce(&mut Graph) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// 取出当前图的副本
    pub fn snapshot(&self) -> Graph {
        self.inner.read().clone()
    }
}

impl From<Graph> for SharedGraph {
    fn from(graph: Graph) -> Self {
        Self::new(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_graph_across_threads() {
        let shared = SharedGraph::default();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for j in 0..25 {
                        let source = format!("s{}", i);
                        let target = format!("t{}", j);
                        shared.write(|g| g.set(&source, &target, j + 1));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        shared.read(|g| {
            assert_eq!(g.edge_count(), 100);
            assert_eq!(g.vertex_count(), 29);
            assert_eq!(g.sources("t3").len(), 4);
            g.check_rep();
        });
    }

    #[test]
    fn test_shared_graph_snapshot_is_detached() {
        let shared = SharedGraph::new(Graph::new());
        shared.write(|g| g.add_vertex("A"));

        let snapshot = shared.snapshot();
        shared.write(|g| g.remove("A"));

        assert!(snapshot.contains_vertex("A"));
        assert!(!shared.read(|g| g.contains_vertex("A")));
    }
}
