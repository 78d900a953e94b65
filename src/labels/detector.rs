use crate::error::{Result, TaskError};
use async_trait::async_trait;
use aws_sdk_rekognition::Client;
use aws_sdk_rekognition::types::{Image, S3Object};

/// 一次检测请求的参数
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionRequest {
    /// 模型版本 ARN
    pub model_arn: String,
    pub bucket: String,
    /// 图片对象名
    pub photo: String,
    pub min_confidence: f32,
}

/// 模型返回的单个标签
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLabel {
    pub name: Option<String>,
    pub confidence: Option<f32>,
}

impl DetectedLabel {
    pub fn new(name: impl Into<String>, confidence: f32) -> Self {
        Self {
            name: Some(name.into()),
            confidence: Some(confidence),
        }
    }
}

/// 标签检测服务的抽象，便于在测试中替换真实的 Rekognition 客户端。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LabelDetector: Send + Sync {
    /// 发起一次检测请求，按服务返回的顺序给出标签。
    async fn detect(&self, request: &DetectionRequest) -> Result<Vec<DetectedLabel>>;
}

#[async_trait]
impl LabelDetector for Client {
    #[tracing::instrument(skip(self), fields(model = %request.model_arn))]
    async fn detect(&self, request: &DetectionRequest) -> Result<Vec<DetectedLabel>> {
        let image = Image::builder()
            .s3_object(
                S3Object::builder()
                    .bucket(&request.bucket)
                    .name(&request.photo)
                    .build(),
            )
            .build();

        let output = self
            .detect_custom_labels()
            .project_version_arn(&request.model_arn)
            .image(image)
            .min_confidence(request.min_confidence)
            .send()
            .await
            .map_err(TaskError::rekognition)?;

        let labels = output
            .custom_labels()
            .iter()
            .map(|label| DetectedLabel {
                name: label.name().map(str::to_string),
                confidence: label.confidence(),
            })
            .collect::<Vec<_>>();

        tracing::debug!(count = labels.len(), "收到检测结果");
        Ok(labels)
    }
}
