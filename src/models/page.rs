use serde::{Deserialize, Serialize};

/// PDF 提取出的一页文本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfPage {
    /// 页码，从 1 开始
    pub page_number: usize,
    /// 整页文本
    pub text: String,
    /// 按行拆分后的文本，行尾空白已去除，行首空白保留
    pub lines: Vec<String>,
}

impl PdfPage {
    pub fn new(page_number: usize, text: String, lines: Vec<String>) -> Self {
        PdfPage { page_number, text, lines }
    }

    /// 整页文本或任一行含有非空白内容
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty() || self.lines.iter().any(|line| !line.trim().is_empty())
    }
}
