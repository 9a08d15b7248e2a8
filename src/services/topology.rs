//! 网络拓扑生成模块
//!
//! 按节点数量分档选择连接概率，对每一对节点独立抽样决定是否连边，
//! 随机源由调用方注入，固定种子时生成结果可复现

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{Edge, Graph, Node, NodeId, ValidationError, MAX_EDGE_WEIGHT, MIN_EDGE_WEIGHT};

/// 根据节点数量选择两点之间的连接概率
///
/// 节点越多概率越低，使期望边数随规模增长放缓
pub fn connection_probability(node_count: usize) -> f64 {
    match node_count {
        n if n > 400 => 0.005,
        n if n > 200 => 0.01,
        n if n > 100 => 0.04,
        n if n > 50 => 0.08,
        n if n > 30 => 0.15,
        n if n > 10 => 0.3,
        _ => 0.5,
    }
}

/// 拓扑生成器
pub struct TopologyGenerator;

impl TopologyGenerator {
    /// 生成包含 `node_count` 个节点的随机拓扑
    ///
    /// # 参数
    /// - `node_count`: 节点数量，必须为正
    /// - `rng`: 随机源
    ///
    /// # 返回
    /// 节点命名为 `Node 0..Node n-1` 的图；图不保证连通
    pub fn generate<R: Rng>(node_count: i64, rng: &mut R) -> Result<Graph, ValidationError> {
        if node_count <= 0 {
            return Err(ValidationError::InvalidNodeCount(node_count));
        }
        let n = usize::try_from(node_count).map_err(|_| ValidationError::InvalidNodeCount(node_count))?;

        let probability = connection_probability(n);
        debug!("生成拓扑: 节点数 {}, 连接概率 {}", n, probability);

        let ids: Vec<NodeId> = (0..n).map(NodeId::indexed).collect();
        let mut edges = Vec::new();

        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen::<f64>() < probability {
                    let weight = rng.gen_range(MIN_EDGE_WEIGHT..=MAX_EDGE_WEIGHT);
                    edges.push(Edge::new(ids[i].clone(), ids[j].clone(), weight));
                }
            }
        }

        let nodes = ids.into_iter().map(Node::new).collect();
        let graph = Graph::from_parts(nodes, edges)?;
        info!(
            "拓扑生成完成: {} 个节点, {} 条边",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// 使用固定种子生成拓扑
    pub fn generate_seeded(node_count: i64, seed: u64) -> Result<Graph, ValidationError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(node_count, &mut rng)
    }
}

/// 拓扑统计信息
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// 没有任何边的节点数
    pub isolated_nodes: usize,
    pub average_degree: f64,
    /// 实际边数 / 完全图边数
    pub density: f64,
}

impl TopologyStats {
    pub fn from_graph(graph: &Graph) -> Self {
        let node_count = graph.node_count();
        let edge_count = graph.edge_count();
        let isolated_nodes = graph
            .node_ids()
            .filter(|id| graph.degree(id.as_str()) == 0)
            .count();

        let average_degree = if node_count == 0 {
            0.0
        } else {
            (2 * edge_count) as f64 / node_count as f64
        };
        let possible = node_count * node_count.saturating_sub(1) / 2;
        let density = if possible == 0 {
            0.0
        } else {
            edge_count as f64 / possible as f64
        };

        Self {
            node_count,
            edge_count,
            isolated_nodes,
            average_degree,
            density,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_probability_tiers() {
        assert_eq!(connection_probability(1), 0.5);
        assert_eq!(connection_probability(10), 0.5);
        assert_eq!(connection_probability(11), 0.3);
        assert_eq!(connection_probability(30), 0.3);
        assert_eq!(connection_probability(31), 0.15);
        assert_eq!(connection_probability(50), 0.15);
        assert_eq!(connection_probability(51), 0.08);
        assert_eq!(connection_probability(100), 0.08);
        assert_eq!(connection_probability(101), 0.04);
        assert_eq!(connection_probability(200), 0.04);
        assert_eq!(connection_probability(201), 0.01);
        assert_eq!(connection_probability(400), 0.01);
        assert_eq!(connection_probability(401), 0.005);
    }

    #[test]
    fn test_rejects_non_positive_count() {
        assert_eq!(
            TopologyGenerator::generate_seeded(0, 1).unwrap_err(),
            ValidationError::InvalidNodeCount(0)
        );
        assert_eq!(
            TopologyGenerator::generate_seeded(-3, 1).unwrap_err(),
            ValidationError::InvalidNodeCount(-3)
        );
    }

    #[test]
    fn test_generated_graph_invariants() {
        for &n in &[1i64, 2, 10, 25, 60] {
            let graph = TopologyGenerator::generate_seeded(n, 42).expect("Generation should succeed in test");
            assert_eq!(graph.node_count(), n as usize);

            let ids: HashSet<&str> = graph.node_ids().map(|id| id.as_str()).collect();
            assert_eq!(ids.len(), n as usize);
            assert!(ids.contains("Node 0"));

            let mut pairs = HashSet::new();
            for edge in graph.edges() {
                assert_ne!(edge.source, edge.target);
                assert!((1..=100).contains(&edge.weight));
                let key = if edge.source < edge.target {
                    (edge.source.clone(), edge.target.clone())
                } else {
                    (edge.target.clone(), edge.source.clone())
                };
                assert!(pairs.insert(key));
            }
        }
    }

    #[test]
    fn test_node_order_matches_generation_order() {
        let graph = TopologyGenerator::generate_seeded(5, 7).expect("Generation should succeed in test");
        let ids: Vec<String> = graph.node_ids().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["Node 0", "Node 1", "Node 2", "Node 3", "Node 4"]);
    }

    #[test]
    fn test_same_seed_same_topology() {
        let a = TopologyGenerator::generate_seeded(40, 2024).expect("Generation should succeed in test");
        let b = TopologyGenerator::generate_seeded(40, 2024).expect("Generation should succeed in test");
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn test_single_node_has_no_edges() {
        let graph = TopologyGenerator::generate_seeded(1, 3).expect("Generation should succeed in test");
        assert_eq!(graph.edge_count(), 0);
        let stats = TopologyStats::from_graph(&graph);
        assert_eq!(stats.isolated_nodes, 1);
        assert_eq!(stats.density, 0.0);
    }

    #[test]
    fn test_stats() {
        let graph = Graph::from_parts(
            vec![Node::new("A"), Node::new("B"), Node::new("C"), Node::new("D")],
            vec![Edge::new("A", "B", 1), Edge::new("B", "C", 1)],
        )
        .expect("Graph should be valid in test");
        let stats = TopologyStats::from_graph(&graph);
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.isolated_nodes, 1);
        assert_eq!(stats.average_degree, 1.0);
        assert!((stats.density - 2.0 / 6.0).abs() < 1e-9);
    }
}
