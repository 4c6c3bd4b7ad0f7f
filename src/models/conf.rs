use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::ConvertResult;

/// 解析配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// 是否识别场景标题(关闭后同时关闭标题页识别)
    pub detect_scene_headings: bool,
    /// 是否识别角色名
    pub detect_character_names: bool,
    /// 是否附加转换元数据
    pub include_metadata: bool,
    /// 严格模式，收紧场景标题和角色名的判定
    pub strict_mode: bool,
    /// 保留排版，当前分类器不使用
    pub preserve_formatting: bool,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            detect_scene_headings: true,
            detect_character_names: true,
            include_metadata: true,
            strict_mode: false,
            preserve_formatting: true,
        }
    }
}

impl Conf {
    /// 从 JSON 读取配置，缺省字段使用默认值
    pub fn from_json_str(json: &str) -> ConvertResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> ConvertResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
