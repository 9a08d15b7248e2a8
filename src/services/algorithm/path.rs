//! 路径重建
//!
//! 从目标节点沿前驱回溯到没有前驱的节点，回溯终点不是源节点即为不可达

use super::types::PredecessorMap;
use crate::core::NodeId;

/// 重建从 `source` 到 `destination` 的路径
///
/// # 返回
/// 源到目标的节点序列；目标不可达时返回 None
pub fn reconstruct(
    predecessors: &PredecessorMap,
    source: &NodeId,
    destination: &NodeId,
) -> Option<Vec<NodeId>> {
    let mut path = vec![destination.clone()];
    let mut current = destination;

    while let Some(Some(predecessor)) = predecessors.get(current.as_str()) {
        path.push(predecessor.clone());
        // 前驱链成环时回溯长度会超过节点数
        if path.len() > predecessors.len() {
            return None;
        }
        current = predecessor;
    }

    path.reverse();
    if path.first() == Some(source) {
        Some(path)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> PredecessorMap {
        // A <- B <- C, D 孤立
        let mut map = PredecessorMap::new();
        map.insert("A".into(), None);
        map.insert("B".into(), Some("A".into()));
        map.insert("C".into(), Some("B".into()));
        map.insert("D".into(), None);
        map
    }

    #[test]
    fn test_reconstruct_path() {
        let path = reconstruct(&chain(), &"A".into(), &"C".into());
        let expected: Vec<NodeId> = vec!["A".into(), "B".into(), "C".into()];
        assert_eq!(path, Some(expected));
    }

    #[test]
    fn test_same_node() {
        let path = reconstruct(&chain(), &"A".into(), &"A".into());
        assert_eq!(path, Some(vec![NodeId::from("A")]));
    }

    #[test]
    fn test_unreachable_destination() {
        assert_eq!(reconstruct(&chain(), &"A".into(), &"D".into()), None);
    }

    #[test]
    fn test_chain_rooted_elsewhere() {
        // C 的前驱链终止于 A，不是请求的源 D
        assert_eq!(reconstruct(&chain(), &"D".into(), &"C".into()), None);
    }

    #[test]
    fn test_predecessor_cycle_is_rejected() {
        let mut map = PredecessorMap::new();
        map.insert("X".into(), Some("Y".into()));
        map.insert("Y".into(), Some("X".into()));
        assert_eq!(reconstruct(&map, &"X".into(), &"Y".into()), None);
    }
}
