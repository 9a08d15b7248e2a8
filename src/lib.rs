//! NetRoute - 随机网络拓扑生成与最短路径路由
//!
//! 按节点规模生成带权无向拓扑，并使用 Dijkstra 或 Bellman-Ford
//! 计算两点之间的最短路径、总距离、转发表和算法执行耗时。

pub mod config;
pub mod core;
pub mod services;
pub mod utils;

pub use crate::core::{Graph, NodeId, RoutingError, ValidationError};
pub use crate::services::{
    compute_route, Algorithm, RouteOutcome, RouteRequest, RouteResult, TopologyGenerator,
};
