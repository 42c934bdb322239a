//! 图核心模块
//!
//! 定义顶点、边、邻接索引和带权有向图

mod edge;
mod graph;
mod index;
mod shared;
mod traits;
mod vertex;

pub use edge::Edge;
pub use graph::{Graph, GraphStats};
pub use shared::SharedGraph;
pub use traits::WeightedDigraph;
pub use vertex::Vertex;
