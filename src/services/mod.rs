//! 服务层模块
//!
//! 拓扑生成、最短路径算法、路由计算和会话状态

pub mod algorithm;
pub mod router;
pub mod session;
pub mod topology;

// 重新导出常用服务
pub use algorithm::{Algorithm, BellmanFord, Dijkstra, Distance, ShortestPath, ShortestPathTree};
pub use router::{
    compare_algorithms, compute_route, AlgorithmComparison, ForwardingEntry, NoPathFound,
    RouteOutcome, RouteRequest, RouteResult, DEFAULT_DELAY_PER_UNIT_MS,
};
pub use session::{RoutingSession, SessionMode};
pub use topology::{connection_probability, TopologyGenerator, TopologyStats};
