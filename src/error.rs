use thiserror::Error;

/// 转换错误类型
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("没有可提取的文本")]
    EmptyInput,

    #[error("{0}")]
    Extraction(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("无效的配置: {0}")]
    Config(#[from] serde_json::Error),
}

/// 转换结果
pub type ConvertResult<T> = Result<T, ConvertError>;
