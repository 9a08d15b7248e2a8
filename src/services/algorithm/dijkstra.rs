//! Dijkstra算法模块
//!
//! 带权无向图的单源最短路径，优先队列不支持 decrease-key，
//! 同一节点可能在队列中出现多次，出队时丢弃过期条目

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::types::{Distance, ShortestPath, ShortestPathTree};
use crate::core::{Graph, NodeId};

/// Dijkstra算法结构体
pub struct Dijkstra;

/// 节点距离结构体，用于优先队列
#[derive(Debug, Clone, Eq, PartialEq)]
struct NodeDistance {
    node: NodeId,
    distance: u64,
}

impl Ord for NodeDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        // 反转比较得到最小堆，距离相同时按节点标识出队，保证结果稳定
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for NodeDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ShortestPath for Dijkstra {
    fn run(graph: &Graph, source: &NodeId) -> ShortestPathTree {
        let mut tree = ShortestPathTree::init(graph, source);
        let mut frontier: BinaryHeap<NodeDistance> = BinaryHeap::new();

        frontier.push(NodeDistance {
            node: source.clone(),
            distance: 0,
        });

        while let Some(NodeDistance { node, distance }) = frontier.pop() {
            // 过期条目：该节点已经以更短距离出过队
            if Distance::Finite(distance) > tree.distance_to(node.as_str()) {
                continue;
            }

            for (neighbor, weight) in graph.neighbors(node.as_str()) {
                if let Some(new_distance) = tree.relax(&node, neighbor, weight) {
                    frontier.push(NodeDistance {
                        node: neighbor.clone(),
                        distance: new_distance,
                    });
                }
            }
        }

        tree
    }
}
