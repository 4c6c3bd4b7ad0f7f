use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// 解析统计信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenplayProperties {
    pub scene_count: usize,
    /// 角色名(去除扩展) -> 角色元素下标
    pub characters: BTreeMap<String, Vec<usize>>,
    /// 地点名 -> 场景标题元素下标
    pub locations: BTreeMap<String, Vec<usize>>,
    pub dialogue_count: usize,
    pub action_count: usize,
    pub page_count: usize,
}

impl ScreenplayProperties {
    pub fn new() -> Self {
        Self::default()
    }
}
