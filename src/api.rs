//! 转换入口
//!
//! 解析和输出本身不会失败；这里负责把输入为空、提取失败等情况
//! 转换为结构化的结果，并附上提示性的警告。

use std::path::Path;
use log::{info, warn};
use serde::Serialize;
use crate::error::{ConvertError, ConvertResult};
use crate::models::{Conf, Document, PdfPage, ScreenplayProperties};
use crate::parser::{ParseOutput, ScreenplayParser};
use crate::pdf::PageExtractor;
use crate::renderer::render_fountain;

/// 转换结果
///
/// 成功时包含文档、Fountain 文本和警告；失败时只包含错误，不返回部分文档。
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    pub success: bool,
    pub document: Option<Document>,
    pub fountain: Option<String>,
    pub properties: Option<ScreenplayProperties>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ConversionResult {
    fn succeeded(output: ParseOutput) -> Self {
        let warnings = collect_warnings(&output.properties);
        let fountain = render_fountain(&output.document);
        ConversionResult {
            success: true,
            document: Some(output.document),
            fountain: Some(fountain),
            properties: Some(output.properties),
            warnings,
            errors: Vec::new(),
        }
    }

    fn failed(error: ConvertError) -> Self {
        ConversionResult {
            success: false,
            document: None,
            fountain: None,
            properties: None,
            warnings: Vec::new(),
            errors: vec![error.to_string()],
        }
    }
}

/// 解析页面，页面为空或没有任何文本时返回错误
pub fn parse_pages(pages: &[PdfPage], source_name: &str, conf: &Conf) -> ConvertResult<ParseOutput> {
    if pages.is_empty() || !pages.iter().any(PdfPage::has_text) {
        return Err(ConvertError::EmptyInput);
    }
    let parser = ScreenplayParser::new(conf.clone());
    Ok(parser.parse(pages, source_name))
}

/// 转换已提取的页面
pub fn convert_pages(pages: &[PdfPage], source_name: &str, conf: &Conf) -> ConversionResult {
    match parse_pages(pages, source_name, conf) {
        Ok(output) => ConversionResult::succeeded(output),
        Err(e) => {
            warn!("转换失败 {}: {}", source_name, e);
            ConversionResult::failed(e)
        }
    }
}

/// 提取并转换一个文件
pub async fn convert_file<E: PageExtractor>(extractor: &E, path: &Path, conf: &Conf) -> ConversionResult {
    let source_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let pages = match extractor.extract_pages(path).await {
        Ok(pages) => pages,
        Err(e) => {
            warn!("提取失败 {}: {}", source_name, e);
            return ConversionResult::failed(e);
        }
    };
    info!("开始转换 {}，共{}页", source_name, pages.len());
    convert_pages(&pages, &source_name, conf)
}

/// 提示性警告，不影响转换成功
pub fn collect_warnings(properties: &ScreenplayProperties) -> Vec<String> {
    let mut warnings = Vec::new();
    if properties.scene_count == 0 {
        warnings.push("未识别到场景标题".to_string());
    }
    if properties.characters.is_empty() {
        warnings.push("未识别到角色".to_string());
    }
    if properties.dialogue_count == 0 {
        warnings.push("未识别到对白".to_string());
    }
    for warning in &warnings {
        warn!("{}", warning);
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(lines: &[&str]) -> PdfPage {
        let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        PdfPage::new(1, lines.join("\n"), lines)
    }

    #[test]
    fn empty_input_fails_without_document() {
        let result = convert_pages(&[], "empty.pdf", &Conf::default());
        assert!(!result.success);
        assert!(result.document.is_none());
        assert!(result.fountain.is_none());
        assert_eq!(result.errors, vec!["没有可提取的文本".to_string()]);

        let blank = page(&["", "   "]);
        let result = convert_pages(&[blank], "blank.pdf", &Conf::default());
        assert!(!result.success);
        assert!(result.document.is_none());
    }

    #[test]
    fn warnings_do_not_block_success() {
        let result = convert_pages(&[page(&["Just some prose."])], "prose.pdf", &Conf::default());
        assert!(result.success);
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 3);
        assert!(result.document.is_some());
    }

    #[test]
    fn full_scene_has_no_warnings() {
        let result = convert_pages(
            &[page(&["INT. ROOM - DAY", "", "JOHN", "Hi."])],
            "scene.pdf",
            &Conf::default(),
        );
        assert!(result.success);
        assert!(result.warnings.is_empty());
        let fountain = result.fountain.unwrap();
        assert!(fountain.starts_with("INT. ROOM - DAY\n\nJOHN\nHi.\n\n[[Converted from: scene.pdf"));
    }
}
