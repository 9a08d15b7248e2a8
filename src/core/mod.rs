pub mod error;
pub mod graph;

// 错误和结果类型
pub use error::{ConfigError, NodeRole, RoutingError, RoutingResult, ValidationError};

// 核心数据类型
pub use graph::{Edge, Graph, GraphData, Node, NodeId, MAX_EDGE_WEIGHT, MIN_EDGE_WEIGHT};
