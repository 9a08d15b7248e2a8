//! Bellman-Ford算法模块
//!
//! 无向边展开为两个方向的有向边后执行 |V|-1 轮松弛。
//! 生成的边权恒为正，因此不做负权环检测

use super::types::{ShortestPath, ShortestPathTree};
use crate::core::{Graph, NodeId};

/// Bellman-Ford算法结构体
pub struct BellmanFord;

/// 有向边 (起点, 终点, 权重)
type DirectedEdge<'a> = (&'a NodeId, &'a NodeId, u32);

impl BellmanFord {
    /// 把每条无向边展开为正反两条同权有向边，保持原有边顺序
    fn directed_edges(graph: &Graph) -> Vec<DirectedEdge<'_>> {
        graph
            .edges()
            .iter()
            .flat_map(|e| [(&e.source, &e.target, e.weight), (&e.target, &e.source, e.weight)])
            .collect()
    }
}

impl ShortestPath for BellmanFord {
    fn run(graph: &Graph, source: &NodeId) -> ShortestPathTree {
        let mut tree = ShortestPathTree::init(graph, source);
        let directed = Self::directed_edges(graph);

        // 固定执行 n-1 轮，不提前退出
        for _ in 0..graph.node_count().saturating_sub(1) {
            for &(from, to, weight) in &directed {
                tree.relax(from, to, weight);
            }
        }

        tree
    }
}
