//! 网络拓扑图模型
//!
//! 节点按生成顺序保存，边为无向带权边。图在构造时完成全部校验，
//! 之后不可变，可以在多个路由计算之间共享。

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::error::ValidationError;

/// 边权下限（含）
pub const MIN_EDGE_WEIGHT: u32 = 1;
/// 边权上限（含）
pub const MAX_EDGE_WEIGHT: u32 = 100;

/// 节点标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    /// 生成器使用的命名方式：`Node {index}`
    pub fn indexed(index: usize) -> Self {
        NodeId(format!("Node {}", index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

/// 网络节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
}

impl Node {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self { id: id.into() }
    }
}

/// 无向带权边
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: u32,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, weight: u32) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// 返回边的另一个端点，`id` 不是端点时返回 None
    pub fn opposite(&self, id: &str) -> Option<&NodeId> {
        if self.source.as_str() == id {
            Some(&self.target)
        } else if self.target.as_str() == id {
            Some(&self.source)
        } else {
            None
        }
    }

    /// 无序端点对，用于去重
    fn unordered_key(&self) -> (NodeId, NodeId) {
        if self.source <= self.target {
            (self.source.clone(), self.target.clone())
        } else {
            (self.target.clone(), self.source.clone())
        }
    }
}

/// 序列化时的原始形态，也是可视化层消费的 JSON 结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// 网络拓扑
///
/// 不变量：
/// - 节点标识唯一
/// - 每条边的端点都在节点集合中
/// - 没有自环，同一无序端点对最多一条边
/// - 边权位于 `[MIN_EDGE_WEIGHT, MAX_EDGE_WEIGHT]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GraphData", into = "GraphData")]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// 节点标识 -> 关联边下标
    incidence: HashMap<NodeId, Vec<usize>>,
}

impl Graph {
    /// 由节点和边构造图，并校验所有不变量
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, ValidationError> {
        let mut incidence: HashMap<NodeId, Vec<usize>> = HashMap::with_capacity(nodes.len());
        for node in &nodes {
            if incidence.insert(node.id.clone(), Vec::new()).is_some() {
                return Err(ValidationError::DuplicateNode(node.id.to_string()));
            }
        }

        let mut seen_pairs: HashSet<(NodeId, NodeId)> = HashSet::with_capacity(edges.len());
        for (index, edge) in edges.iter().enumerate() {
            let invalid = |reason: &str| ValidationError::InvalidEdge {
                from: edge.source.to_string(),
                to: edge.target.to_string(),
                reason: reason.to_string(),
            };

            if edge.source == edge.target {
                return Err(invalid("自环边"));
            }
            if !(MIN_EDGE_WEIGHT..=MAX_EDGE_WEIGHT).contains(&edge.weight) {
                return Err(invalid(&format!(
                    "边权 {} 超出范围 [{}, {}]",
                    edge.weight, MIN_EDGE_WEIGHT, MAX_EDGE_WEIGHT
                )));
            }
            if !incidence.contains_key(&edge.source) || !incidence.contains_key(&edge.target) {
                return Err(invalid("端点不存在"));
            }
            if !seen_pairs.insert(edge.unordered_key()) {
                return Err(invalid("重复的边"));
            }

            for endpoint in [&edge.source, &edge.target] {
                if let Some(list) = incidence.get_mut(endpoint) {
                    list.push(index);
                }
            }
        }

        Ok(Self {
            nodes,
            edges,
            incidence,
        })
    }

    /// 空图
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            incidence: HashMap::new(),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter().map(|n| &n.id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.incidence.contains_key(id)
    }

    /// 节点的所有邻居及对应边权，边按无向处理
    pub fn neighbors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = (&'a NodeId, u32)> + 'a {
        self.incidence
            .get(id)
            .into_iter()
            .flatten()
            .filter_map(move |&i| {
                let edge = &self.edges[i];
                edge.opposite(id).map(|other| (other, edge.weight))
            })
    }

    pub fn degree(&self, id: &str) -> usize {
        self.incidence.get(id).map_or(0, Vec::len)
    }

    /// 两节点之间的边权，与端点顺序无关
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<u32> {
        self.neighbors(a)
            .find(|(other, _)| other.as_str() == b)
            .map(|(_, weight)| weight)
    }

    /// 沿路径累加边权；路径中任意相邻两点之间没有边时返回 None
    pub fn path_weight(&self, path: &[NodeId]) -> Option<u64> {
        path.windows(2).try_fold(0u64, |total, hop| {
            self.edge_weight(hop[0].as_str(), hop[1].as_str())
                .map(|w| total + u64::from(w))
        })
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<GraphData> for Graph {
    type Error = ValidationError;

    fn try_from(data: GraphData) -> Result<Self, Self::Error> {
        Graph::from_parts(data.nodes, data.edges)
    }
}

impl From<Graph> for GraphData {
    fn from(graph: Graph) -> Self {
        GraphData {
            nodes: graph.nodes,
            edges: graph.edges,
        }
    }
}
