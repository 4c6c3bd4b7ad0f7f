//! 标题页识别
//!
//! 解析开始时先缓存开头的行，直到遇到第一个场景标题或缓存超过上限。
//! 找到场景标题时缓存内容按标题页字段解析；否则由解析器把缓存当作正文处理。

use crate::models::{TitleField, TitlePage};
use crate::parser::line_classifier::is_page_number;
use crate::parser::screenplay_parser::SourceLine;
use crate::utils::fountain_constants::{
    TITLE_CONTACT_REGEX, TITLE_CREDIT_REGEX, TITLE_DATE_REGEX, TITLE_DRAFT_REGEX,
    TITLE_KEY_REGEX, TITLE_SOURCE_REGEX,
};
use crate::utils::FountainConstants;

/// 标题页缓存
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitlePageBuffer<'a> {
    entries: Vec<SourceLine<'a>>,
    text_lines: usize,
}

impl<'a> TitlePageBuffer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 缓存一行。分页符不计入行数上限
    pub fn push(&mut self, line: SourceLine<'a>) {
        if let SourceLine::Text(_) = line {
            self.text_lines += 1;
        }
        self.entries.push(line);
    }

    /// 是否已达到行数上限
    pub fn is_full(&self) -> bool {
        self.text_lines >= FountainConstants::TITLE_PAGE_MAX_LINES
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.text_lines
    }

    // 取出全部缓存并清空
    pub fn take(&mut self) -> Vec<SourceLine<'a>> {
        self.text_lines = 0;
        std::mem::take(&mut self.entries)
    }

    /// 确认标题页：取出缓存并解析字段
    ///
    /// 最后一个分页标记之后的行与第一个场景标题在同一页，属于正文，
    /// 作为第二个返回值交还给解析器；缓存中没有分页标记时全部作为标题页。
    pub fn commit(&mut self) -> (TitlePage, Vec<SourceLine<'a>>) {
        let mut entries = self.take();
        let body = match entries.iter().rposition(|entry| *entry == SourceLine::PageBreak) {
            Some(index) => {
                let body = entries.split_off(index + 1);
                entries.pop();
                body
            }
            None => Vec::new(),
        };

        let page = parse_title_page(entries.iter().filter_map(|entry| match entry {
            SourceLine::Text(text) => Some(*text),
            SourceLine::PageBreak => None,
        }));
        (page, body)
    }
}

/// 解析标题页字段
///
/// * `Key: value` 设置对应字段，值为空时后续无法识别的行续接到该字段
/// * `Written by` / `by` 等署名行写入 credit，下一行写入 author
/// * 含 draft 的行写入 draft，日期样式的行写入 date，含邮箱或电话的行写入 contact
/// * 其余行按空格拼接到 title
pub fn parse_title_page<'a, I>(lines: I) -> TitlePage
where
    I: IntoIterator<Item = &'a str>,
{
    let mut page = TitlePage::new();
    let mut current: Option<TitleField> = None;
    let mut pending_author = false;

    for raw in lines {
        let line = raw.trim();
        // 空行不影响字段
        if line.is_empty() || is_page_number(line) {
            continue;
        }

        if let Some(caps) = TITLE_KEY_REGEX.captures(line) {
            let field = caps.get(1).and_then(|m| TitleField::from_key(m.as_str()));
            let value = caps.get(2).map_or("", |m| m.as_str().trim());
            if let Some(field) = field {
                pending_author = false;
                if value.is_empty() {
                    current = Some(field);
                } else {
                    append_field(&mut page, field, value);
                    current = None;
                }
                continue;
            }
        }

        if TITLE_CREDIT_REGEX.is_match(line) {
            append_field(&mut page, TitleField::Credit, line);
            pending_author = true;
            current = None;
            continue;
        }

        if pending_author {
            append_field(&mut page, TitleField::Author, line);
            pending_author = false;
            continue;
        }

        if let Some(field) = current {
            append_field(&mut page, field, line);
            continue;
        }

        let field = if TITLE_SOURCE_REGEX.is_match(line) {
            TitleField::Source
        } else if TITLE_DRAFT_REGEX.is_match(line) {
            TitleField::Draft
        } else if TITLE_DATE_REGEX.is_match(line) {
            TitleField::Date
        } else if TITLE_CONTACT_REGEX.is_match(line) {
            TitleField::Contact
        } else {
            TitleField::Title
        };
        append_field(&mut page, field, line);
    }

    page.retain(|_, value| !value.trim().is_empty());
    page
}

// 已有内容时以单个空格拼接
fn append_field(page: &mut TitlePage, field: TitleField, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    let entry = page.entry(field).or_default();
    if !entry.is_empty() {
        entry.push(' ');
    }
    entry.push_str(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlabeled_lines_join_into_title() {
        let page = parse_title_page(vec!["THE LONG", "", "GOODBYE"]);
        assert_eq!(page.get(&TitleField::Title).map(String::as_str), Some("THE LONG GOODBYE"));
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn credit_line_routes_next_line_to_author() {
        let page = parse_title_page(vec![
            "BIG FISH",
            "Written by",
            "John August",
            "Based on the novel by Daniel Wallace",
            "Final Draft",
            "March 15, 2003",
            "agent@example.com",
        ]);
        assert_eq!(page[&TitleField::Title], "BIG FISH");
        assert_eq!(page[&TitleField::Credit], "Written by");
        assert_eq!(page[&TitleField::Author], "John August");
        assert_eq!(page[&TitleField::Source], "Based on the novel by Daniel Wallace");
        assert_eq!(page[&TitleField::Draft], "Final Draft");
        assert_eq!(page[&TitleField::Date], "March 15, 2003");
        assert_eq!(page[&TitleField::Contact], "agent@example.com");
    }

    #[test]
    fn labeled_fields_and_continuation() {
        let page = parse_title_page(vec![
            "Title: Brick & Steel",
            "Author: Stu Maschwitz",
            "Contact:",
            "Next Level Productions",
            "1588 Mission Dr.",
            "Date: 01/04/2012",
        ]);
        assert_eq!(page[&TitleField::Title], "Brick & Steel");
        assert_eq!(page[&TitleField::Author], "Stu Maschwitz");
        assert_eq!(page[&TitleField::Contact], "Next Level Productions 1588 Mission Dr.");
        assert_eq!(page[&TitleField::Date], "01/04/2012");
    }

    #[test]
    fn buffer_counts_text_lines_only() {
        let mut buffer = TitlePageBuffer::new();
        buffer.push(SourceLine::Text("TITLE"));
        buffer.push(SourceLine::PageBreak);
        buffer.push(SourceLine::Text(""));
        assert_eq!(buffer.len(), 2);
        for _ in 0..13 {
            assert!(!buffer.is_full());
            buffer.push(SourceLine::Text("line"));
        }
        assert!(buffer.is_full());
        assert_eq!(buffer.take().len(), 16);
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn commit_returns_lines_after_last_page_break() {
        let mut buffer = TitlePageBuffer::new();
        for line in [
            SourceLine::Text("MY SCRIPT"),
            SourceLine::Text("by"),
            SourceLine::Text("Ann Lee"),
            SourceLine::PageBreak,
            SourceLine::Text("1."),
            SourceLine::Text("FADE IN:"),
        ] {
            buffer.push(line);
        }
        let (page, body) = buffer.commit();
        assert_eq!(page[&TitleField::Title], "MY SCRIPT");
        assert_eq!(page[&TitleField::Author], "Ann Lee");
        assert_eq!(body, vec![SourceLine::Text("1."), SourceLine::Text("FADE IN:")]);
        assert!(buffer.is_empty());
    }

    #[test]
    fn commit_without_page_break_keeps_all_lines() {
        let mut buffer = TitlePageBuffer::new();
        buffer.push(SourceLine::Text("FADE IN:"));
        let (page, body) = buffer.commit();
        assert_eq!(page[&TitleField::Title], "FADE IN:");
        assert!(body.is_empty());
    }

    #[test]
    fn page_numbers_are_ignored() {
        let page = parse_title_page(vec!["1.", "MY SCRIPT"]);
        assert_eq!(page[&TitleField::Title], "MY SCRIPT");
    }
}
