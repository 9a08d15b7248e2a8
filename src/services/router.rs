//! 路由计算服务
//!
//! 校验请求、计时执行所选算法、重建路径并组装路由结果。
//! 每次调用返回新的不可变结果，图只读共享

use std::time::Instant;

use log::{debug, info};
use serde::Serialize;

use super::algorithm::{reconstruct, Algorithm, ShortestPathTree};
use crate::core::{Graph, NodeId, NodeRole, RoutingError, RoutingResult, ValidationError};

/// 每单位距离对应的演示用传输时延（毫秒）
pub const DEFAULT_DELAY_PER_UNIT_MS: f64 = 20.0;

/// 路由请求
///
/// 三项选择都可能缺失，缺失时由 `compute_route` 统一报告
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRequest {
    pub source: Option<NodeId>,
    pub destination: Option<NodeId>,
    pub algorithm: Option<Algorithm>,
}

impl RouteRequest {
    pub fn new(source: impl Into<NodeId>, destination: impl Into<NodeId>, algorithm: Algorithm) -> Self {
        Self {
            source: Some(source.into()),
            destination: Some(destination.into()),
            algorithm: Some(algorithm),
        }
    }

    /// 检查三项选择是否齐全，空字符串视为未选择
    fn selections(&self) -> Result<(&NodeId, &NodeId, Algorithm), ValidationError> {
        fn picked(id: &Option<NodeId>) -> Option<&NodeId> {
            id.as_ref().filter(|id| !id.as_str().is_empty())
        }

        match (picked(&self.source), picked(&self.destination), self.algorithm) {
            (Some(source), Some(destination), Some(algorithm)) => Ok((source, destination, algorithm)),
            (source, destination, algorithm) => {
                let mut missing = Vec::new();
                if source.is_none() {
                    missing.push("source");
                }
                if destination.is_none() {
                    missing.push("destination");
                }
                if algorithm.is_none() {
                    missing.push("algorithm");
                }
                Err(ValidationError::MissingSelection(missing))
            }
        }
    }
}

/// 转发表条目：节点及其指向源节点方向的下一跳
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForwardingEntry {
    pub node: NodeId,
    pub predecessor: Option<NodeId>,
}

/// 成功的路由结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub algorithm: Algorithm,
    /// 源到目标的节点序列
    pub path: Vec<NodeId>,
    /// 路径总权重
    pub distance: u64,
    /// 整棵最短路径树，按图中节点顺序
    pub forwarding_table: Vec<ForwardingEntry>,
    /// 算法本身的执行耗时
    pub runtime_ms: f64,
}

impl RouteResult {
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// 演示用的传输时延：距离 × 每单位时延
    pub fn transmission_delay_ms(&self, delay_per_unit_ms: f64) -> f64 {
        self.distance as f64 * delay_per_unit_ms
    }

    pub fn next_hop_toward_source(&self, node: &str) -> Option<&NodeId> {
        self.forwarding_table
            .iter()
            .find(|entry| entry.node.as_str() == node)
            .and_then(|entry| entry.predecessor.as_ref())
    }
}

/// 目标不可达
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoPathFound {
    pub algorithm: Algorithm,
    pub source: NodeId,
    pub destination: NodeId,
    pub runtime_ms: f64,
}

/// 一次路由计算的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    Found(RouteResult),
    NoPath(NoPathFound),
}

impl RouteOutcome {
    pub fn route(&self) -> Option<&RouteResult> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::NoPath(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            RouteOutcome::Found(route) => route.algorithm,
            RouteOutcome::NoPath(miss) => miss.algorithm,
        }
    }

    pub fn runtime_ms(&self) -> f64 {
        match self {
            RouteOutcome::Found(route) => route.runtime_ms,
            RouteOutcome::NoPath(miss) => miss.runtime_ms,
        }
    }

    pub fn distance(&self) -> Option<u64> {
        self.route().map(|route| route.distance)
    }
}

/// 同一输入上两种算法的对比
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmComparison {
    pub dijkstra: RouteOutcome,
    pub bellman_ford: RouteOutcome,
}

impl AlgorithmComparison {
    /// 两种算法给出的距离（或同为不可达）是否一致
    pub fn distances_agree(&self) -> bool {
        self.dijkstra.distance() == self.bellman_ford.distance()
    }

    /// 执行更快的算法
    pub fn faster(&self) -> Algorithm {
        if self.dijkstra.runtime_ms() <= self.bellman_ford.runtime_ms() {
            Algorithm::Dijkstra
        } else {
            Algorithm::BellmanFord
        }
    }
}

/// 计算一条路由
///
/// # 参数
/// - `graph`: 当前拓扑
/// - `request`: 源、目标和算法的选择
///
/// # 返回
/// 找到路径时为 `RouteOutcome::Found`，不可达时为 `RouteOutcome::NoPath`；
/// 选择不全或节点不在图中时返回错误
pub fn compute_route(graph: &Graph, request: &RouteRequest) -> RoutingResult<RouteOutcome> {
    let (source, destination, algorithm) = request.selections()?;
    ensure_node(graph, NodeRole::Source, source)?;
    ensure_node(graph, NodeRole::Destination, destination)?;

    let (tree, runtime_ms) = timed_run(graph, source, algorithm);
    debug!(
        "{} 执行完成: 源 {}, 耗时 {:.3} ms",
        algorithm, source, runtime_ms
    );

    let outcome = match assemble(graph, &tree, destination, algorithm, runtime_ms) {
        Some(route) => {
            info!(
                "{} 路由 {} -> {}: 距离 {}, {} 跳",
                algorithm,
                source,
                destination,
                route.distance,
                route.hop_count()
            );
            RouteOutcome::Found(route)
        }
        None => {
            info!("{} 路由 {} -> {}: 不可达", algorithm, source, destination);
            RouteOutcome::NoPath(NoPathFound {
                algorithm,
                source: source.clone(),
                destination: destination.clone(),
                runtime_ms,
            })
        }
    };
    Ok(outcome)
}

/// 在同一图和同一端点上依次运行两种算法
pub fn compare_algorithms(
    graph: &Graph,
    source: &NodeId,
    destination: &NodeId,
) -> RoutingResult<AlgorithmComparison> {
    let run = |algorithm| {
        compute_route(
            graph,
            &RouteRequest::new(source.clone(), destination.clone(), algorithm),
        )
    };

    Ok(AlgorithmComparison {
        dijkstra: run(Algorithm::Dijkstra)?,
        bellman_ford: run(Algorithm::BellmanFord)?,
    })
}

fn ensure_node(graph: &Graph, role: NodeRole, id: &NodeId) -> RoutingResult<()> {
    if graph.contains(id.as_str()) {
        Ok(())
    } else {
        Err(RoutingError::UnknownNode {
            role,
            id: id.to_string(),
        })
    }
}

/// 计时只覆盖算法本身
fn timed_run(graph: &Graph, source: &NodeId, algorithm: Algorithm) -> (ShortestPathTree, f64) {
    let start = Instant::now();
    let tree = algorithm.run(graph, source);
    let runtime_ms = start.elapsed().as_secs_f64() * 1000.0;
    (tree, runtime_ms)
}

fn assemble(
    graph: &Graph,
    tree: &ShortestPathTree,
    destination: &NodeId,
    algorithm: Algorithm,
    runtime_ms: f64,
) -> Option<RouteResult> {
    let path = reconstruct(&tree.predecessors, &tree.source, destination)?;
    let distance = tree.distance_to(destination.as_str()).finite()?;

    let forwarding_table = graph
        .node_ids()
        .map(|id| ForwardingEntry {
            node: id.clone(),
            predecessor: tree.predecessor_of(id.as_str()).cloned(),
        })
        .collect();

    Some(RouteResult {
        algorithm,
        path,
        distance,
        forwarding_table,
        runtime_ms,
    })
}
