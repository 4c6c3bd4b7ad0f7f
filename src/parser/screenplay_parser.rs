use std::time::Instant;
use log::{debug, info};
use crate::models::{
    Conf,
    Document,
    DocumentMetadata,
    Element,
    ElementKind,
    PdfPage,
    ScreenplayProperties,
    TitlePage,
};
use crate::parser::line_classifier::{
    clean_character_name,
    is_character_name,
    is_note,
    is_page_number,
    is_parenthetical,
    is_scene_heading,
    is_transition,
    parse_location,
};
use crate::parser::title_page::TitlePageBuffer;

/// 输入行：页面中的一行文本，或页与页之间插入的分页标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLine<'a> {
    Text(&'a str),
    PageBreak,
}

/// 单行处理模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    /// 正文的完整判定
    Full,
    /// 标题页回退重解析：不再判定注解和场景标题
    Reduced,
}

/// 解析状态，每次解析新建，解析结束即丢弃
#[derive(Debug, Clone, PartialEq)]
pub struct ParserState<'a> {
    /// 上一个输出的元素类型
    pub current_element_kind: Option<ElementKind>,
    /// 上一个角色名(已去除扩展)
    pub last_character_name: Option<String>,
    pub expecting_dialogue: bool,
    /// 是否仍在缓存标题页
    pub in_title_page: bool,
    pub title_page_lines: TitlePageBuffer<'a>,
    pub scene_count: usize,
    /// 当前行所在页码
    pub page_number: usize,
}

impl<'a> ParserState<'a> {
    pub fn new(conf: &Conf) -> Self {
        ParserState {
            current_element_kind: None,
            last_character_name: None,
            expecting_dialogue: false,
            in_title_page: conf.detect_scene_headings,
            title_page_lines: TitlePageBuffer::new(),
            scene_count: 0,
            page_number: 1,
        }
    }

    // 对白块结束
    fn end_dialogue(&mut self) {
        self.expecting_dialogue = false;
        self.last_character_name = None;
    }
}

/// 处理一行正文，返回该行产生的元素
///
/// 判定顺序固定：分页 > 空行 > 页码 > 注解 > 场景标题 > 转场 >
/// 括号注释(等待对白时) > 角色名 > 对白(等待对白时) > 动作
pub fn step(state: &mut ParserState<'_>, line: SourceLine<'_>, mode: StepMode, conf: &Conf) -> Option<Element> {
    let element = classify(state, line, mode, conf)?;
    state.current_element_kind = Some(element.kind);
    Some(element)
}

fn classify(state: &mut ParserState<'_>, line: SourceLine<'_>, mode: StepMode, conf: &Conf) -> Option<Element> {
    let raw = match line {
        SourceLine::PageBreak => return Some(Element::page_break()),
        SourceLine::Text(raw) => raw,
    };
    let text = raw.trim();
    let strict = conf.strict_mode;

    // 空行结束对白块，本身不产生元素
    if text.is_empty() {
        if state.expecting_dialogue {
            state.end_dialogue();
        }
        return None;
    }

    if is_page_number(text) {
        return None;
    }

    if mode == StepMode::Full {
        if is_note(text) {
            return Some(Element::new(ElementKind::Note, text));
        }

        if conf.detect_scene_headings && is_scene_heading(text, strict) {
            state.scene_count += 1;
            state.expecting_dialogue = false;
            return Some(scene_heading_element(text, state.scene_count, state.page_number));
        }
    }

    if is_transition(text, strict) {
        state.expecting_dialogue = false;
        return Some(Element::new(ElementKind::Transition, text));
    }

    if state.expecting_dialogue && is_parenthetical(text) {
        return Some(Element::new(ElementKind::Parenthetical, text));
    }

    if conf.detect_character_names && is_character_name(text, strict, state.current_element_kind) {
        let name = clean_character_name(text);
        state.expecting_dialogue = true;
        let element = Element::new(ElementKind::Character, text).with_attribute("name", &name);
        state.last_character_name = Some(name);
        return Some(element);
    }

    if state.expecting_dialogue {
        return Some(Element::new(ElementKind::Dialogue, text));
    }

    Some(Element::new(ElementKind::Action, text))
}

// 场景标题附带编号、页码和位置信息
fn scene_heading_element(text: &str, number: usize, page: usize) -> Element {
    let mut element = Element::new(ElementKind::SceneHeading, text)
        .with_attribute("number", &number.to_string())
        .with_attribute("page", &page.to_string());
    if let Some(location) = parse_location(text) {
        element = element
            .with_attribute("int_ext", &location.int_ext)
            .with_attribute("location", &location.name)
            .with_attribute("time", &location.time_of_day);
    }
    element
}

/// 按页顺序展开所有行，相邻两页之间插入一个分页标记
pub fn source_lines(pages: &[PdfPage]) -> impl Iterator<Item = (usize, SourceLine<'_>)> + '_ {
    pages.iter().enumerate().flat_map(|(index, page)| {
        let page_break = if index > 0 {
            Some((page.page_number, SourceLine::PageBreak))
        } else {
            None
        };
        page_break.into_iter().chain(
            page.lines
                .iter()
                .map(move |line| (page.page_number, SourceLine::Text(line.as_str()))),
        )
    })
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ParseOutput {
    pub document: Document,
    pub properties: ScreenplayProperties,
    /// 解析耗时(毫秒)
    pub parse_time: u64,
}

pub struct ScreenplayParser {
    conf: Conf,
}

impl ScreenplayParser {
    pub fn new(conf: Conf) -> Self {
        ScreenplayParser { conf }
    }

    pub fn conf(&self) -> &Conf {
        &self.conf
    }

    /// 解析 PDF 页面
    ///
    /// # Arguments
    ///
    /// * `pages` - 按页码排列的页面
    /// * `source_name` - 来源文件名，写入元数据
    ///
    /// # Returns
    ///
    /// 解析结果对象
    pub fn parse(&self, pages: &[PdfPage], source_name: &str) -> ParseOutput {
        let started = Instant::now();
        let conf = &self.conf;
        let mut state = ParserState::new(conf);
        let mut elements: Vec<Element> = Vec::new();
        let mut title_page: Option<TitlePage> = None;

        for (page_number, line) in source_lines(pages) {
            state.page_number = page_number;

            if state.in_title_page {
                match line {
                    SourceLine::Text(text) if is_scene_heading(text, conf.strict_mode) => {
                        // 找到第一个场景标题，缓存内容作为标题页
                        let buffered = state.title_page_lines.len();
                        let (page, body) = state.title_page_lines.commit();
                        debug!("标题页结束于第{}页，缓存{}行，字段{}个，{}行归入正文",
                               page_number, buffered, page.len(), body.len());
                        title_page = Some(page);
                        state.in_title_page = false;
                        for line in body {
                            if let Some(element) = step(&mut state, line, StepMode::Full, conf) {
                                elements.push(element);
                            }
                        }
                    }
                    _ => {
                        state.title_page_lines.push(line);
                        if state.title_page_lines.is_full() {
                            debug!("标题页缓存达到上限，按动作输出");
                            flush_as_action(&mut state, &mut elements);
                        }
                        continue;
                    }
                }
            }

            if let Some(element) = step(&mut state, line, StepMode::Full, conf) {
                elements.push(element);
            }
        }

        // 没有找到场景标题，缓存内容回退为正文
        if state.in_title_page {
            let buffered = state.title_page_lines.take();
            state.in_title_page = false;
            debug!("未找到场景标题，{}行标题页缓存按正文重新解析", buffered.len());
            for line in buffered {
                if let Some(element) = step(&mut state, line, StepMode::Reduced, conf) {
                    elements.push(element);
                }
            }
        }

        let mut document = Document::new();
        document.elements = elements;
        document.title_page = title_page.filter(|page| state.scene_count > 0 && !page.is_empty());
        if conf.include_metadata {
            document.metadata = Some(DocumentMetadata::now(source_name, Some(pages.len())));
        }

        let mut properties = collect_properties(&document.elements);
        properties.page_count = pages.len();

        info!("解析完成: {}页, {}个元素, {}个场景, {}个角色",
              pages.len(), document.elements.len(), properties.scene_count, properties.characters.len());

        ParseOutput {
            document,
            properties,
            parse_time: started.elapsed().as_millis() as u64,
        }
    }

    /// 解析单页的行，便于直接处理已拆分好的文本
    pub fn parse_lines<S: AsRef<str>>(&self, lines: &[S], source_name: &str) -> ParseOutput {
        let lines: Vec<String> = lines.iter().map(|l| l.as_ref().trim_end().to_string()).collect();
        let page = PdfPage::new(1, lines.join("\n"), lines);
        self.parse(std::slice::from_ref(&page), source_name)
    }
}

impl Default for ScreenplayParser {
    fn default() -> Self {
        Self::new(Conf::default())
    }
}

// 缓存达到上限：每个有内容的行输出为动作，分页标记原位保留
fn flush_as_action(state: &mut ParserState<'_>, elements: &mut Vec<Element>) {
    for line in state.title_page_lines.take() {
        let element = match line {
            SourceLine::PageBreak => Element::page_break(),
            SourceLine::Text(text) => {
                let text = text.trim();
                if text.is_empty() || is_page_number(text) {
                    continue;
                }
                Element::new(ElementKind::Action, text)
            }
        };
        state.current_element_kind = Some(element.kind);
        elements.push(element);
    }
    state.in_title_page = false;
}

// 统计角色、地点和各类元素数量
fn collect_properties(elements: &[Element]) -> ScreenplayProperties {
    let mut properties = ScreenplayProperties::new();
    for (index, element) in elements.iter().enumerate() {
        match element.kind {
            ElementKind::SceneHeading => {
                properties.scene_count += 1;
                if let Some(location) = element.attribute("location") {
                    properties.locations.entry(location.to_string()).or_default().push(index);
                }
            }
            ElementKind::Character => {
                let name = element
                    .attribute("name")
                    .map(str::to_string)
                    .unwrap_or_else(|| clean_character_name(&element.text));
                properties.characters.entry(name).or_default().push(index);
            }
            ElementKind::Dialogue => properties.dialogue_count += 1,
            ElementKind::Action => properties.action_count += 1,
            _ => {}
        }
    }
    properties
}
