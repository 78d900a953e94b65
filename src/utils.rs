//! 工具函数模块
//!
//! 此模块包含了两个流程共用的工具函数：
//! - 对象键处理工具（文件名、斜杠拼接、事件键解码）
//! - 日志初始化

pub mod logging;
pub mod path;
