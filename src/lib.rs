//! wdgraph - 带权有向图
//!
//! 以字符串标签区分顶点、以正整数为边权重的可变有向图：
//! - 基于邻接表存储，`sources`/`targets` 查询与顶点度数成正比
//! - `set` 一个操作完成边的插入、更新和删除
//! - 删除顶点时级联删除所有入边和出边
//! - 所有查询返回独立快照

pub mod cli;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphStats, SharedGraph, Vertex, WeightedDigraph};
pub use types::{Direction, Weight, DEFAULT_WEIGHT};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
