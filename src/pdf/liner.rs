use crate::models::PdfPage;
use crate::utils::trim_line_end;

/// 分页符，pdftotext 等工具在每页末尾输出
pub const FORM_FEED: char = '\u{000C}';

/// 行处理器：把提取出的文本拆分为页和行
#[derive(Debug, Clone)]
pub struct Liner {
    /// 制表符替换成的空格数
    pub tab_width: usize,
}

impl Default for Liner {
    fn default() -> Self {
        Self::new(4)
    }
}

impl Liner {
    /// 创建新的行处理器
    pub fn new(tab_width: usize) -> Self {
        Self { tab_width }
    }

    /// 拆分一页文本为行，去除行尾空白，保留行首缩进
    pub fn split_lines(&self, text: &str) -> Vec<String> {
        let tab = " ".repeat(self.tab_width);
        text.split('\n')
            .map(|line| trim_line_end(&line.replace('\t', &tab)).to_string())
            .collect()
    }

    /// 按分页符拆分整份文本
    ///
    /// 文本末尾的分页符不会产生额外的空页
    pub fn split_pages(&self, text: &str) -> Vec<PdfPage> {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut chunks: Vec<&str> = text.split(FORM_FEED).collect();
        if chunks.len() > 1 && chunks.last().map_or(false, |last| last.trim().is_empty()) {
            chunks.pop();
        }

        chunks
            .into_iter()
            .enumerate()
            .map(|(index, chunk)| {
                let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
                PdfPage::new(index + 1, chunk.to_string(), self.split_lines(chunk))
            })
            .collect()
    }
}
