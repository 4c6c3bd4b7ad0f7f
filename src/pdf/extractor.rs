use std::future::Future;
use std::path::{Path, PathBuf};
use log::debug;
use crate::error::{ConvertError, ConvertResult};
use crate::models::PdfPage;
use crate::pdf::liner::Liner;

/// 页面提取接口
///
/// PDF 字节解析由外部实现，解析器只消费提取好的页面。
pub trait PageExtractor {
    fn extract_pages(&self, path: &Path) -> impl Future<Output = ConvertResult<Vec<PdfPage>>> + Send;
}

/// 读取从 PDF 导出的纯文本文件，页与页之间以分页符分隔
#[derive(Debug, Clone, Default)]
pub struct TextPageExtractor {
    liner: Liner,
}

impl TextPageExtractor {
    pub fn new(liner: Liner) -> Self {
        Self { liner }
    }
}

impl PageExtractor for TextPageExtractor {
    fn extract_pages(&self, path: &Path) -> impl Future<Output = ConvertResult<Vec<PdfPage>>> + Send {
        let path: PathBuf = path.to_path_buf();
        let liner = self.liner.clone();
        async move {
            let bytes = tokio::fs::read(&path).await.map_err(|e| {
                ConvertError::Extraction(format!("无法读取文件 {}: {}", path.display(), e))
            })?;
            let text = String::from_utf8(bytes).map_err(|_| {
                ConvertError::Extraction(format!("文件不是有效的 UTF-8 文本: {}", path.display()))
            })?;
            let pages = liner.split_pages(&text);
            debug!("从 {} 读取{}页", path.display(), pages.len());
            Ok(pages)
        }
    }
}
