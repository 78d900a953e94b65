//! 云端 AI 任务库
//!
//! 这里包含两个互不相关的流程，都只是对托管 AI 服务的薄封装：
//! - 自定义标签检测：调用 Rekognition 自定义标签模型分析 S3 中的图片，并打印检测到的标签
//! - 文本转语音：由 S3 事件触发，读取 `text/` 下的文本，用 Polly 合成语音并写回 `audio/`

pub mod config;
pub mod error;
pub mod labels;
pub mod speech;
pub mod utils;

pub use error::{Result, TaskError};
