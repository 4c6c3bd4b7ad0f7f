use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};
use crate::models::element::Element;

/// 标题页字段，顺序即输出顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleField {
    Title,
    Credit,
    Author,
    Source,
    Draft,
    Date,
    Contact,
}

impl TitleField {
    pub const ALL: [TitleField; 7] = [
        TitleField::Title,
        TitleField::Credit,
        TitleField::Author,
        TitleField::Source,
        TitleField::Draft,
        TitleField::Date,
        TitleField::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TitleField::Title => "title",
            TitleField::Credit => "credit",
            TitleField::Author => "author",
            TitleField::Source => "source",
            TitleField::Draft => "draft",
            TitleField::Date => "date",
            TitleField::Contact => "contact",
        }
    }

    // 忽略大小写匹配字段名
    pub fn from_key(key: &str) -> Option<TitleField> {
        let key = key.trim().to_lowercase();
        TitleField::ALL.iter().copied().find(|f| f.as_str() == key)
    }

    /// 首字母大写的字段名，例如 `Title`
    pub fn label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for TitleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type TitlePage = BTreeMap<TitleField, String>;

/// 转换元数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub source_name: String,
    /// RFC 3339 格式的转换时间
    pub converted_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
}

impl DocumentMetadata {
    pub fn now(source_name: &str, page_count: Option<usize>) -> Self {
        DocumentMetadata {
            source_name: source_name.to_string(),
            converted_at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            page_count,
        }
    }
}

/// 解析得到的剧本文档
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub elements: Vec<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_page: Option<TitlePage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_field_labels() {
        assert_eq!(TitleField::Title.label(), "Title");
        assert_eq!(TitleField::Contact.label(), "Contact");
        assert_eq!(TitleField::from_key(" AUTHOR "), Some(TitleField::Author));
        assert_eq!(TitleField::from_key("notes"), None);
    }

    #[test]
    fn title_page_iterates_in_field_order() {
        let mut page = TitlePage::new();
        page.insert(TitleField::Date, "1999".to_string());
        page.insert(TitleField::Title, "BIG FISH".to_string());
        page.insert(TitleField::Author, "John August".to_string());
        let keys: Vec<_> = page.keys().copied().collect();
        assert_eq!(keys, vec![TitleField::Title, TitleField::Author, TitleField::Date]);
    }

    #[test]
    fn metadata_timestamp_is_rfc3339() {
        let meta = DocumentMetadata::now("script.pdf", Some(3));
        assert!(chrono::DateTime::parse_from_rfc3339(&meta.converted_at).is_ok());
        assert_eq!(meta.page_count, Some(3));
    }
}
