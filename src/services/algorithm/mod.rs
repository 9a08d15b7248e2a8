//! 算法模块
//!
//! 包含单源最短路径算法实现以及算法选择

pub mod bellman_ford;
pub mod dijkstra;
pub mod path;
pub mod types;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Graph, NodeId, ValidationError};

// 重新导出常用算法结构体
pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;
pub use path::reconstruct;
pub use types::{Distance, DistanceMap, PredecessorMap, ShortestPath, ShortestPathTree};

/// 可选的最短路径算法
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::BellmanFord];

    /// 展示给用户的名称
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::BellmanFord => "Bellman Ford",
        }
    }

    /// 使用所选算法计算最短路径树
    pub fn run(self, graph: &Graph, source: &NodeId) -> ShortestPathTree {
        match self {
            Algorithm::Dijkstra => Dijkstra::run(graph, source),
            Algorithm::BellmanFord => BellmanFord::run(graph, source),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellmanford" => Ok(Algorithm::BellmanFord),
            _ => Err(ValidationError::UnknownAlgorithm(s.to_string())),
        }
    }
}
