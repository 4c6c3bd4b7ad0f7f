use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};

/// 剧本元素类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    SceneHeading,
    Action,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
    PageBreak,
    Note,
    Section,
    Synopsis,
    TitlePage,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::SceneHeading => "scene_heading",
            ElementKind::Action => "action",
            ElementKind::Character => "character",
            ElementKind::Dialogue => "dialogue",
            ElementKind::Parenthetical => "parenthetical",
            ElementKind::Transition => "transition",
            ElementKind::PageBreak => "page_break",
            ElementKind::Note => "note",
            ElementKind::Section => "section",
            ElementKind::Synopsis => "synopsis",
            ElementKind::TitlePage => "title_page",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,   // 元素类型
    pub text: String,        // 去除首尾空白后的原始行文本
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>, // 额外属性(角色名、场景编号等)
}

impl Element {
    pub fn new(kind: ElementKind, text: &str) -> Self {
        Element {
            kind,
            text: text.trim().to_string(),
            attributes: None,
        }
    }

    // 分页符不携带文本
    pub fn page_break() -> Self {
        Element {
            kind: ElementKind::PageBreak,
            text: String::new(),
            attributes: None,
        }
    }

    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|attrs| attrs.get(key))
            .map(|v| v.as_str())
    }
}
