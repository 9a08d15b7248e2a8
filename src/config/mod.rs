use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::ConfigError;
use crate::services::algorithm::Algorithm;
use crate::services::router::DEFAULT_DELAY_PER_UNIT_MS;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub topology: TopologyConfig,
    pub routing: RoutingConfig,
    pub log: LogConfig,
}

/// 拓扑生成配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct TopologyConfig {
    /// 默认节点数量
    pub node_count: i64,
    /// 固定种子；未设置时每次运行使用随机种子
    pub seed: Option<u64>,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            node_count: 10,
            seed: None,
        }
    }
}

/// 路由计算配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RoutingConfig {
    pub algorithm: Algorithm,
    pub delay_per_unit_ms: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Dijkstra,
            delay_per_unit_ms: DEFAULT_DELAY_PER_UNIT_MS,
        }
    }
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// 为 false 时输出到 stderr
    pub to_file: bool,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            to_file: false,
            dir: "logs".to_string(),
            file: "netroute".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
