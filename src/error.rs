//! 错误类型模块
//!
//! 所有对外暴露的库函数都返回 [`Result`]，AWS SDK 的错误会在这里被展开成完整的错误链文本。

use aws_sdk_s3::error::DisplayErrorContext;

/// 库内统一的错误类型
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("Rekognition 调用失败: {0}")]
    Rekognition(String),

    #[error("Polly 调用失败: {0}")]
    Polly(String),

    #[error("S3 调用失败: {0}")]
    S3(String),

    #[error("读取响应流失败: {0}")]
    ByteStream(String),

    #[error("无效的 S3 事件: {0}")]
    InvalidEvent(String),

    #[error("对象 {key} 不是有效的 UTF-8 文本: {source}")]
    InvalidText {
        key: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl TaskError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_event(message: impl Into<String>) -> Self {
        Self::InvalidEvent(message.into())
    }

    /// 将 Rekognition SDK 错误转换为 [`TaskError::Rekognition`]，保留完整错误链
    pub fn rekognition<E: std::error::Error>(err: E) -> Self {
        Self::Rekognition(DisplayErrorContext(err).to_string())
    }

    pub fn polly<E: std::error::Error>(err: E) -> Self {
        Self::Polly(DisplayErrorContext(err).to_string())
    }

    pub fn s3<E: std::error::Error>(err: E) -> Self {
        Self::S3(DisplayErrorContext(err).to_string())
    }

    pub fn byte_stream<E: std::error::Error>(err: E) -> Self {
        Self::ByteStream(DisplayErrorContext(err).to_string())
    }
}

/// 便捷的 Result 别名
pub type Result<T> = std::result::Result<T, TaskError>;
