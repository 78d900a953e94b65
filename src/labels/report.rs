use super::detector::{DetectedLabel, DetectionRequest, LabelDetector};
use std::io::{self, Write};

/// 标签缺少名称时的显示文本
const UNNAMED_LABEL: &str = "<unnamed>";

/// 分析一张图片并把结果写到 `out`。
///
/// 检测失败时不会向上返回服务错误，而是输出错误信息和排查提示，
/// 只有写入 `out` 失败才会返回错误。
///
/// # 参数
///
/// * `detector` - 标签检测服务
/// * `request` - 检测参数
/// * `out` - 输出目标，通常是标准输出
///
/// # 返回值
///
/// 检测成功时返回标签数量，检测失败时返回 `None`。
pub async fn analyze_with_custom_model<D, W>(
    detector: &D,
    request: &DetectionRequest,
    out: &mut W,
) -> io::Result<Option<usize>>
where
    D: LabelDetector + ?Sized,
    W: Write,
{
    writeln!(
        out,
        "Analyzing {} with custom model {}...",
        request.photo, request.model_arn
    )?;

    let labels = match detector.detect(request).await {
        Ok(labels) => labels,
        Err(e) => {
            tracing::error!(error = %e, "自定义标签检测失败");
            write_failure(out, request, &e)?;
            return Ok(None);
        }
    };

    writeln!(out, "Found {} custom labels:", labels.len())?;

    if labels.is_empty() {
        writeln!(
            out,
            "No custom labels detected, even with a low confidence threshold."
        )?;
        return Ok(Some(0));
    }

    for label in &labels {
        writeln!(out, "{}", format_label(label))?;
    }

    Ok(Some(labels.len()))
}

/// 将单个标签格式化为一行输出
pub fn format_label(label: &DetectedLabel) -> String {
    format!(
        "- Label: {}, Confidence: {:.2}%",
        label.name.as_deref().unwrap_or(UNNAMED_LABEL),
        label.confidence.unwrap_or_default()
    )
}

fn write_failure<W: Write>(
    out: &mut W,
    request: &DetectionRequest,
    error: &dyn std::fmt::Display,
) -> io::Result<()> {
    writeln!(out, "An error occurred: {error}")?;
    writeln!(out)?;
    writeln!(out, "Please check the following:")?;
    writeln!(
        out,
        "- Is your model '{}' currently running? (Status should be 'Running').",
        request.model_arn
    )?;
    writeln!(out, "- Does the bucket '{}' exist?", request.bucket)?;
    writeln!(
        out,
        "- Does the file '{}' exist in the bucket?",
        request.photo
    )?;
    writeln!(out, "- Are your AWS credentials correct?")
}
