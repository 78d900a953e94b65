//! 日志初始化

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;

/// 默认日志级别，`RUST_LOG` 未设置或无法解析时使用
const DEFAULT_FILTER: &str = "info";

/// 初始化全局 tracing 订阅器
///
/// 日志写到标准错误输出，时间戳使用本地时间的 RFC 3339 格式。
///
/// # 参数
///
/// * `ansi` - 是否输出终端颜色。Lambda 环境下应关闭，否则 CloudWatch 中会出现转义字符。
pub fn init_tracing(ansi: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // 重复初始化时忽略错误
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::rfc_3339())
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .try_init();
}
