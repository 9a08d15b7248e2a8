//! 路由会话
//!
//! 持有当前拓扑、用户的三项选择以及最近一次路由结果。
//! 拓扑以 `Arc` 共享，生成新拓扑或返回首页时被丢弃

use std::sync::Arc;

use log::{info, warn};
use rand::Rng;

use super::algorithm::Algorithm;
use super::router::{compute_route, RouteOutcome, RouteRequest};
use super::topology::TopologyGenerator;
use crate::core::{Graph, NodeId, RoutingError, RoutingResult, ValidationError};

/// 会话所处阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// 等待输入节点数量
    Input,
    /// 已生成拓扑，可以选择节点和算法
    Topology,
}

#[derive(Debug, Default)]
pub struct RoutingSession {
    graph: Option<Arc<Graph>>,
    request: RouteRequest,
    last_outcome: Option<RouteOutcome>,
}

impl RoutingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SessionMode {
        if self.graph.is_some() {
            SessionMode::Topology
        } else {
            SessionMode::Input
        }
    }

    /// 生成新拓扑并替换当前拓扑，同时清空选择和结果
    ///
    /// 节点数量非法时会话保持不变
    pub fn generate_topology<R: Rng>(
        &mut self,
        node_count: i64,
        rng: &mut R,
    ) -> Result<Arc<Graph>, ValidationError> {
        let graph = TopologyGenerator::generate(node_count, rng).map_err(|e| {
            warn!("拓扑生成失败: {}", e);
            e
        })?;
        Ok(self.load_topology(graph))
    }

    /// 使用调用方提供的拓扑
    pub fn load_topology(&mut self, graph: Graph) -> Arc<Graph> {
        let graph = Arc::new(graph);
        self.reset();
        self.graph = Some(Arc::clone(&graph));
        graph
    }

    pub fn graph(&self) -> Option<&Arc<Graph>> {
        self.graph.as_ref()
    }

    /// 可供选择的节点，按生成顺序
    pub fn node_options(&self) -> Vec<NodeId> {
        self.graph
            .as_ref()
            .map(|g| g.node_ids().cloned().collect())
            .unwrap_or_default()
    }

    pub fn select_source(&mut self, id: impl Into<NodeId>) {
        self.request.source = Some(id.into());
    }

    pub fn select_destination(&mut self, id: impl Into<NodeId>) {
        self.request.destination = Some(id.into());
    }

    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.request.algorithm = Some(algorithm);
    }

    pub fn request(&self) -> &RouteRequest {
        &self.request
    }

    /// 使用当前选择计算路由
    ///
    /// 失败时保留上一次的结果
    pub fn run(&mut self) -> RoutingResult<&RouteOutcome> {
        let graph = self.graph.as_ref().ok_or(RoutingError::NoTopology)?;
        let outcome = compute_route(graph, &self.request)?;
        Ok(self.last_outcome.insert(outcome))
    }

    pub fn last_outcome(&self) -> Option<&RouteOutcome> {
        self.last_outcome.as_ref()
    }

    /// 只清空结果
    pub fn reset_outputs(&mut self) {
        self.last_outcome = None;
    }

    /// 清空选择和结果，保留拓扑
    pub fn reset(&mut self) {
        self.request = RouteRequest::default();
        self.reset_outputs();
    }

    /// 清空全部状态，回到输入阶段
    pub fn return_home(&mut self) {
        self.reset();
        if self.graph.take().is_some() {
            info!("已丢弃当前拓扑");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Edge, Node};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn abc_graph() -> Graph {
        Graph::from_parts(
            vec![Node::new("A"), Node::new("B"), Node::new("C")],
            vec![Edge::new("A", "B", 5), Edge::new("B", "C", 3)],
        )
        .expect("Graph should be valid in test")
    }

    #[test]
    fn test_run_without_topology() {
        let mut session = RoutingSession::new();
        assert_eq!(session.mode(), SessionMode::Input);
        assert_eq!(session.run().unwrap_err(), RoutingError::NoTopology);
    }

    #[test]
    fn test_generate_topology_replaces_state() {
        let mut session = RoutingSession::new();
        let mut rng = StdRng::seed_from_u64(11);
        session.generate_topology(8, &mut rng).expect("Generation should succeed in test");
        assert_eq!(session.mode(), SessionMode::Topology);
        assert_eq!(session.node_options().len(), 8);

        session.select_source("Node 0");
        session.generate_topology(4, &mut rng).expect("Generation should succeed in test");
        assert_eq!(session.node_options().len(), 4);
        assert_eq!(session.request(), &RouteRequest::default());
    }

    #[test]
    fn test_invalid_node_count_keeps_session() {
        let mut session = RoutingSession::new();
        session.load_topology(abc_graph());
        let mut rng = StdRng::seed_from_u64(1);

        let err = session.generate_topology(0, &mut rng).unwrap_err();
        assert_eq!(err, ValidationError::InvalidNodeCount(0));
        assert_eq!(session.node_options().len(), 3);
    }

    #[test]
    fn test_run_and_resets() {
        let mut session = RoutingSession::new();
        session.load_topology(abc_graph());
        session.select_source("A");
        session.select_destination("C");

        // 未选择算法
        assert!(matches!(
            session.run(),
            Err(RoutingError::Validation(ValidationError::MissingSelection(_)))
        ));

        session.select_algorithm(Algorithm::Dijkstra);
        let distance = session.run().expect("Route should compute in test").distance();
        assert_eq!(distance, Some(8));
        assert!(session.last_outcome().is_some());

        session.reset_outputs();
        assert!(session.last_outcome().is_none());
        assert_eq!(session.request().algorithm, Some(Algorithm::Dijkstra));

        session.reset();
        assert_eq!(session.request(), &RouteRequest::default());
        assert_eq!(session.mode(), SessionMode::Topology);

        session.return_home();
        assert_eq!(session.mode(), SessionMode::Input);
        assert!(session.node_options().is_empty());
    }

    #[test]
    fn test_failed_run_keeps_previous_outcome() {
        let mut session = RoutingSession::new();
        session.load_topology(abc_graph());
        session.select_source("A");
        session.select_destination("B");
        session.select_algorithm(Algorithm::BellmanFord);
        session.run().expect("Route should compute in test");

        session.select_destination("Z");
        assert!(matches!(session.run(), Err(RoutingError::UnknownNode { .. })));
        assert_eq!(session.last_outcome().and_then(RouteOutcome::distance), Some(5));
    }
}
