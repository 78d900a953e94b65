use super::event::{ObjectRef, audio_key_for, is_convertible_key};
use super::store::ObjectStore;
use super::synth::{AUDIO_CONTENT_TYPE, SpeechSynthesizer};
use crate::config::SpeechConfig;
use crate::error::{Result, TaskError};
use aws_config::SdkConfig;
use aws_lambda_events::event::s3::S3Event;
use serde::{Deserialize, Serialize};

/// 转换成功时返回的消息
pub const SUCCESS_MESSAGE: &str = "File converted successfully!";

/// 返回给 Lambda 调用方的结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    pub status_code: u16,
    pub body: String,
}

impl ConversionResponse {
    pub fn success() -> Self {
        Self {
            status_code: 200,
            body: SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// 文本转语音处理器
///
/// 持有存储和语音合成客户端，冷启动时创建一次，之后每次调用复用。
pub struct TextToSpeech<S, P> {
    store: S,
    synthesizer: P,
    config: SpeechConfig,
}

impl TextToSpeech<aws_sdk_s3::Client, aws_sdk_polly::Client> {
    /// 使用同一份 SDK 配置创建 S3 和 Polly 客户端。
    pub fn from_sdk_config(sdk_config: &SdkConfig, config: SpeechConfig) -> Self {
        Self::new(
            aws_sdk_s3::Client::new(sdk_config),
            aws_sdk_polly::Client::new(sdk_config),
            config,
        )
    }
}

impl<S, P> TextToSpeech<S, P>
where
    S: ObjectStore,
    P: SpeechSynthesizer,
{
    pub fn new(store: S, synthesizer: P, config: SpeechConfig) -> Self {
        Self {
            store,
            synthesizer,
            config,
        }
    }

    /// 处理一次 S3 事件。
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(_))` - 已写入音频
    /// * `Ok(None)` - 对象不符合命名约定，未做任何读写
    ///
    /// # Errors
    ///
    /// 事件无效，或读取、合成、写入任一步失败时返回错误，错误会先记录到日志。
    pub async fn handle(&self, event: &S3Event) -> Result<Option<ConversionResponse>> {
        let object = ObjectRef::from_event(event)?;
        self.convert(&object).await
    }

    /// 转换单个对象，规则同 [`TextToSpeech::handle`]。
    pub async fn convert(&self, object: &ObjectRef) -> Result<Option<ConversionResponse>> {
        if !is_convertible_key(&object.key, &self.config.input_prefix) {
            tracing::info!(
                "File {} is not a valid text file in the '{}' folder. Exiting.",
                object.key,
                self.config.input_prefix
            );
            return Ok(None);
        }

        tracing::info!(
            "Processing file: {} from bucket: {}",
            object.key,
            object.bucket
        );

        match self.synthesize_object(object).await {
            Ok(audio_key) => {
                tracing::info!("Successfully converted {} to {}", object.key, audio_key);
                Ok(Some(ConversionResponse::success()))
            }
            Err(e) => {
                tracing::error!("Error processing file: {e}");
                Err(e)
            }
        }
    }

    /// 读取文本、合成语音并写回，返回音频对象键
    async fn synthesize_object(&self, object: &ObjectRef) -> Result<String> {
        let bytes = self.store.get_bytes(&object.bucket, &object.key).await?;
        let text = String::from_utf8(bytes).map_err(|source| TaskError::InvalidText {
            key: object.key.clone(),
            source,
        })?;

        let audio = self
            .synthesizer
            .synthesize(&text, &self.config.voice_id)
            .await?;

        let audio_key = audio_key_for(&object.key, &self.config.output_prefix);
        self.store
            .put_bytes(&object.bucket, &audio_key, audio, AUDIO_CONTENT_TYPE)
            .await?;

        Ok(audio_key)
    }
}
