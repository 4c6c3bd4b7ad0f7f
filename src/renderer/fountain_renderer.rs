//! Fountain 文本输出
//!
//! 每个元素按类型转换为一行 Fountain 标记，元素之间的空行由
//! (当前类型, 上一个类型) 决定。

use crate::models::{Document, DocumentMetadata, Element, ElementKind, TitlePage};
use crate::utils::fountain_constants::SCENE_HEADING_REGEX;

/// 将文档输出为 Fountain 文本
///
/// 输出顺序为标题页、正文、元数据注解，块与块之间空一行。
/// 结果去除末尾空白后以单个换行结束，空文档输出 `"\n"`。
pub fn render_fountain(document: &Document) -> String {
    let mut blocks: Vec<String> = Vec::new();

    if let Some(title_page) = &document.title_page {
        let block = render_title_page(title_page);
        if !block.is_empty() {
            blocks.push(block);
        }
    }

    let body = render_body(&document.elements);
    if !body.trim().is_empty() {
        blocks.push(body);
    }

    if let Some(metadata) = &document.metadata {
        blocks.push(render_metadata_note(metadata));
    }

    let mut output = blocks.join("\n\n").trim_end().to_string();
    output.push('\n');
    output
}

fn render_body(elements: &[Element]) -> String {
    let mut buffer = String::new();
    let mut previous: Option<ElementKind> = None;
    for element in elements {
        buffer.push_str(element_separator(element.kind, previous));
        buffer.push_str(&format_element(element));
        previous = Some(element.kind);
    }
    buffer
}

/// 标题页：每个字段一行 `Key: value`
pub fn render_title_page(title_page: &TitlePage) -> String {
    title_page
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(field, value)| format!("{}: {}", field.label(), value.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 转换信息以注解形式放在文末
pub fn render_metadata_note(metadata: &DocumentMetadata) -> String {
    let mut note = format!(
        "[[Converted from: {} | Date: {}",
        metadata.source_name, metadata.converted_at
    );
    if let Some(page_count) = metadata.page_count {
        note.push_str(&format!(" | Pages: {}", page_count));
    }
    note.push_str("]]");
    note
}

/// 元素前的换行
pub fn element_separator(kind: ElementKind, previous: Option<ElementKind>) -> &'static str {
    use ElementKind::*;

    let previous = match previous {
        Some(previous) => previous,
        None => return "",
    };

    match (previous, kind) {
        (_, SceneHeading) => "\n\n",
        // 连续两个角色名之间不空行
        (Character, Character) => "\n",
        (_, Character) => "\n\n",
        (Character, Dialogue) | (_, Parenthetical) | (Parenthetical, Dialogue) => "\n",
        (_, Action) | (_, Transition) => "\n\n",
        (_, Dialogue) => "\n",
        _ => "\n\n",
    }
}

/// 单个元素的 Fountain 标记
pub fn format_element(element: &Element) -> String {
    let text = element.text.trim();
    match element.kind {
        ElementKind::SceneHeading => {
            // 非标准前缀的场景标题需要 "." 强制识别
            if SCENE_HEADING_REGEX.is_match(text) || text.starts_with('.') {
                text.to_string()
            } else {
                format!(".{}", text)
            }
        }
        ElementKind::Action | ElementKind::Dialogue | ElementKind::TitlePage => text.to_string(),
        ElementKind::Character => text.to_uppercase(),
        ElementKind::Parenthetical => {
            if text.starts_with('(') && text.ends_with(')') {
                text.to_string()
            } else {
                format!("({})", text)
            }
        }
        ElementKind::Transition => {
            let upper = text.to_uppercase();
            if upper.starts_with('>') {
                upper
            } else {
                format!("> {}", upper)
            }
        }
        ElementKind::PageBreak => "===".to_string(),
        ElementKind::Note => {
            if text.starts_with("[[") && text.ends_with("]]") {
                text.to_string()
            } else {
                format!("[[{}]]", text)
            }
        }
        ElementKind::Section => {
            if text.starts_with('#') {
                text.to_string()
            } else {
                format!("# {}", text)
            }
        }
        ElementKind::Synopsis => {
            if text.starts_with('=') {
                text.to_string()
            } else {
                format!("= {}", text)
            }
        }
    }
}
