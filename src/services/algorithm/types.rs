//! 最短路径算法共享类型定义

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Graph, NodeId};

/// 到源节点的距离
///
/// 派生的排序保证任意有限距离都小于 `Unreachable`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Distance {
    Finite(u64),
    Unreachable,
}

impl Distance {
    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreachable => write!(f, "∞"),
        }
    }
}

/// 节点 -> 到源节点的距离
pub type DistanceMap = HashMap<NodeId, Distance>;

/// 节点 -> 最短路径树中指向源节点方向的前驱
pub type PredecessorMap = HashMap<NodeId, Option<NodeId>>;

/// 单源最短路径树
///
/// `distances` 与 `predecessors` 覆盖图中每一个节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    pub source: NodeId,
    pub distances: DistanceMap,
    pub predecessors: PredecessorMap,
}

impl ShortestPathTree {
    /// 所有节点不可达、没有前驱，源节点距离为 0
    pub fn init(graph: &Graph, source: &NodeId) -> Self {
        let mut distances = DistanceMap::with_capacity(graph.node_count());
        let mut predecessors = PredecessorMap::with_capacity(graph.node_count());
        for id in graph.node_ids() {
            distances.insert(id.clone(), Distance::Unreachable);
            predecessors.insert(id.clone(), None);
        }
        if let Some(d) = distances.get_mut(source.as_str()) {
            *d = Distance::Finite(0);
        }

        Self {
            source: source.clone(),
            distances,
            predecessors,
        }
    }

    pub fn distance_to(&self, id: &str) -> Distance {
        self.distances
            .get(id)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    pub fn predecessor_of(&self, id: &str) -> Option<&NodeId> {
        self.predecessors.get(id).and_then(Option::as_ref)
    }

    /// 松弛 `from -> to`
    ///
    /// 经由 `from` 的距离严格更短时更新距离和前驱，并返回新距离
    pub(crate) fn relax(&mut self, from: &NodeId, to: &NodeId, weight: u32) -> Option<u64> {
        let base = self.distance_to(from.as_str()).finite()?;
        let candidate = base + u64::from(weight);

        let current = self.distances.get_mut(to.as_str())?;
        if Distance::Finite(candidate) < *current {
            *current = Distance::Finite(candidate);
            self.predecessors.insert(to.clone(), Some(from.clone()));
            Some(candidate)
        } else {
            None
        }
    }
}

/// 单源最短路径算法的统一接口
pub trait ShortestPath {
    /// 计算从 `source` 出发到所有节点的距离与前驱
    ///
    /// `source` 应当是图中的节点；否则所有节点都不可达
    fn run(graph: &Graph, source: &NodeId) -> ShortestPathTree;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Edge, Node};

    #[test]
    fn test_distance_ordering() {
        assert!(Distance::Finite(u64::MAX) < Distance::Unreachable);
        assert!(Distance::Finite(3) < Distance::Finite(4));
        assert_eq!(Distance::Unreachable.to_string(), "∞");
    }

    #[test]
    fn test_init_and_relax() {
        let graph = Graph::from_parts(
            vec![Node::new("A"), Node::new("B")],
            vec![Edge::new("A", "B", 4)],
        )
        .expect("Graph should be valid in test");
        let a = NodeId::from("A");
        let b = NodeId::from("B");

        let mut tree = ShortestPathTree::init(&graph, &a);
        assert_eq!(tree.distance_to("A"), Distance::Finite(0));
        assert_eq!(tree.distance_to("B"), Distance::Unreachable);

        // 从不可达节点出发不会松弛
        assert_eq!(tree.relax(&b, &a, 1), None);
        assert_eq!(tree.relax(&a, &b, 4), Some(4));
        assert_eq!(tree.relax(&a, &b, 4), None);
        assert_eq!(tree.predecessor_of("B"), Some(&a));
        assert_eq!(tree.predecessor_of("A"), None);
    }

    #[test]
    fn test_init_with_foreign_source() {
        let graph = Graph::from_parts(vec![Node::new("A")], vec![])
            .expect("Graph should be valid in test");
        let tree = ShortestPathTree::init(&graph, &NodeId::from("Z"));
        assert_eq!(tree.distances.len(), 1);
        assert_eq!(tree.distance_to("A"), Distance::Unreachable);
    }
}
