//! 自定义标签检测模块
//!
//! 该模块负责调用 Rekognition 自定义标签模型，并把检测结果输出为控制台文本。

pub mod detector;
pub mod report;

pub use detector::{DetectedLabel, DetectionRequest, LabelDetector};
pub use report::analyze_with_custom_model;
