pub mod models;
pub mod utils;
pub mod parser;
pub mod renderer;
pub mod pdf;
pub mod api;
pub mod error;

pub use models::{
    Element,
    ElementKind,
    Document,
    DocumentMetadata,
    TitleField,
    TitlePage,
    Location,
    ScreenplayProperties,
    Conf,
    PdfPage
};

pub use parser::{
    ScreenplayParser,
    ParseOutput,
    ParserState,
    SourceLine,
    StepMode
};

pub use renderer::render_fountain;

pub use pdf::{Liner, PageExtractor, TextPageExtractor};

pub use api::{
    ConversionResult,
    parse_pages,
    convert_pages,
    convert_file,
    collect_warnings
};

pub use error::{ConvertError, ConvertResult};

/// 解析已提取的页面
///
/// # Arguments
///
/// * `pages` - 按页码排列的页面
/// * `source_name` - 来源文件名
/// * `config` - 配置对象
///
/// # Returns
///
/// 解析结果对象
pub fn parse(pages: &[PdfPage], source_name: &str, config: &Conf) -> ParseOutput {
    let parser = ScreenplayParser::new(config.clone());
    parser.parse(pages, source_name)
}

/// 解析并输出为 Fountain 文本
pub fn to_fountain(pages: &[PdfPage], source_name: &str, config: &Conf) -> String {
    render_fountain(&parse(pages, source_name, config).document)
}
