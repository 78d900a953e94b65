use crate::error::{Result, TaskError};
use async_trait::async_trait;
use aws_sdk_polly::Client;
use aws_sdk_polly::types::{OutputFormat, VoiceId};

/// 合成音频的 MIME 类型
pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// 语音合成服务的抽象，真实实现为 Polly 客户端。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// 使用指定语音把文本合成为 MP3 音频
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>>;
}

#[async_trait]
impl SpeechSynthesizer for Client {
    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>> {
        let output = self
            .synthesize_speech()
            .text(text)
            .output_format(OutputFormat::Mp3)
            .voice_id(VoiceId::from(voice_id))
            .send()
            .await
            .map_err(TaskError::polly)?;

        let audio = output
            .audio_stream
            .collect()
            .await
            .map_err(TaskError::byte_stream)?;
        Ok(audio.into_bytes().to_vec())
    }
}
