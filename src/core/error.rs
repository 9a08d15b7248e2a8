//! 统一错误处理 for NetRoute
//!
//! ## 设计理念
//!
//! 1. **校验错误与路由错误分层**：
//!    - `ValidationError` 描述调用方输入本身的问题（节点数、未选择的参数、非法边）
//!    - `RoutingError` 在其之上增加需要图上下文才能判断的问题（节点不存在、尚未生成拓扑）
//!
//! 2. **不可达不是错误**：目标节点不可达由 `RouteOutcome::NoPath` 表示，
//!    不会出现在这里的任何枚举中
//!
//! 3. **统一接口**：`RoutingResult<T>` 提供统一的返回类型，简化错误传播

use thiserror::Error;

/// 输入校验错误
///
/// 在运行任何算法之前立即返回给调用方，不会自动重试
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("节点数量必须为正整数，实际为 {0}")]
    InvalidNodeCount(i64),

    #[error("请同时选择源节点和目标节点，并选择一种算法 (缺少: {})", .0.join(", "))]
    MissingSelection(Vec<&'static str>),

    #[error("重复的节点标识: {0}")]
    DuplicateNode(String),

    #[error("非法的边 {from} -- {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },

    #[error("未知的算法: {0}")]
    UnknownAlgorithm(String),
}

/// 路由计算错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),

    #[error("{role}节点不在当前拓扑中: {id}")]
    UnknownNode { role: NodeRole, id: String },

    #[error("尚未生成网络拓扑")]
    NoTopology,
}

/// 节点在一次路由请求中的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Source,
    Destination,
}

impl std::fmt::Display for NodeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeRole::Source => write!(f, "源"),
            NodeRole::Destination => write!(f, "目标"),
        }
    }
}

/// 配置文件错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析错误: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("配置序列化错误: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 路由操作结果类型
pub type RoutingResult<T> = Result<T, RoutingError>;
