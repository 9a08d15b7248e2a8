//! 集成测试共享工具模块
//!
//! 提供手工构造的拓扑和断言辅助函数，供所有集成测试使用

#![allow(dead_code)]

use netroute::core::{Edge, Graph, Node, NodeId};
use netroute::services::RouteOutcome;

/// 测试使用的种子集合
pub const SEEDS: [u64; 6] = [1, 7, 42, 1234, 2024, 987_654_321];

/// 由节点名和 (起点, 终点, 权重) 列表构造图
pub fn graph_of(nodes: &[&str], edges: &[(&str, &str, u32)]) -> Graph {
    Graph::from_parts(
        nodes.iter().map(|&id| Node::new(id)).collect(),
        edges.iter().map(|&(s, t, w)| Edge::new(s, t, w)).collect(),
    )
    .expect("测试拓扑应当合法")
}

/// A -5- B -3- C，没有 A-C 边
pub fn abc_graph() -> Graph {
    graph_of(&["A", "B", "C"], &[("A", "B", 5), ("B", "C", 3)])
}

/// 两个互不连通的分量：{A, B} 和 {C, D}
pub fn split_graph() -> Graph {
    graph_of(&["A", "B", "C", "D"], &[("A", "B", 2), ("C", "D", 9)])
}

pub fn ids(names: &[&str]) -> Vec<NodeId> {
    names.iter().map(|&n| NodeId::from(n)).collect()
}

/// 断言找到路径，返回 (路径, 距离)
pub fn expect_found(outcome: &RouteOutcome) -> (Vec<NodeId>, u64) {
    let route = outcome.route().expect("应当找到路径");
    (route.path.clone(), route.distance)
}
