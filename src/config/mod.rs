//! 配置模块。
//!
//! 该模块负责从命令行参数、环境变量和 `.env` 文件加载配置，并构建 AWS SDK 共享配置。

use crate::error::{Result, TaskError};
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_s3::config::Credentials;
use clap::Parser;
use std::env;

/// 未配置区域时使用的默认区域
pub const DEFAULT_REGION: &str = "us-east-1";

/// 标签检测的默认最低置信度
pub const DEFAULT_MIN_CONFIDENCE: f32 = 10.0;

/// 文本对象所在的默认前缀
pub const DEFAULT_INPUT_PREFIX: &str = "text/";

/// 音频对象写入的默认前缀
pub const DEFAULT_OUTPUT_PREFIX: &str = "audio/";

/// 默认的 Polly 语音
pub const DEFAULT_VOICE_ID: &str = "Joanna";

/// 未填写凭据时残留在源文件或 `.env` 中的占位符
pub const CREDENTIAL_PLACEHOLDER: &str = "PASTE_YOUR";

/// 静态凭据的来源名称
const STATIC_PROVIDER_NAME: &str = "detect-labels-static";

/// 自定义标签检测的命令行参数。
///
/// 每个参数都可以用对应的环境变量代替。
#[derive(Debug, Clone, Parser)]
#[command(
    name = "detect-labels",
    about = "使用 Rekognition 自定义标签模型分析 S3 中的图片"
)]
pub struct DetectionArgs {
    /// 已训练模型版本的 ARN
    #[arg(long, env = "REKOGNITION_MODEL_ARN")]
    pub model_arn: String,

    /// 图片所在的存储桶
    #[arg(long, env = "REKOGNITION_BUCKET")]
    pub bucket: String,

    /// 要分析的图片对象名
    #[arg(long, env = "REKOGNITION_PHOTO")]
    pub photo: String,

    /// 最低置信度（百分比）
    #[arg(long, env = "REKOGNITION_MIN_CONFIDENCE", default_value_t = DEFAULT_MIN_CONFIDENCE)]
    pub min_confidence: f32,

    /// AWS 区域
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub access_key_id: Option<String>,

    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: Option<String>,
}

impl DetectionArgs {
    /// 凭据中是否仍含有占位符。
    pub fn has_placeholder_credentials(&self) -> bool {
        [&self.access_key_id, &self.secret_access_key]
            .into_iter()
            .flatten()
            .any(|value| value.contains(CREDENTIAL_PLACEHOLDER))
    }

    /// 只有访问密钥和秘密密钥同时给出时才返回静态凭据，否则交给默认凭据链。
    pub fn static_credentials(&self) -> Option<Credentials> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(access_key), Some(secret_key)) => Some(Credentials::new(
                access_key.clone(),
                secret_key.clone(),
                None,
                None,
                STATIC_PROVIDER_NAME,
            )),
            _ => None,
        }
    }
}

/// 文本转语音处理器的配置。
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechConfig {
    /// 只处理该前缀下的 `.txt` 对象
    pub input_prefix: String,
    /// 音频写入的前缀
    pub output_prefix: String,
    /// Polly 语音 ID
    pub voice_id: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            input_prefix: DEFAULT_INPUT_PREFIX.to_string(),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
        }
    }
}

impl SpeechConfig {
    /// 从环境变量读取配置，未设置的项使用默认值。
    ///
    /// # 环境变量
    ///
    /// * `TTS_INPUT_PREFIX` - 输入前缀（默认：`text/`）
    /// * `TTS_OUTPUT_PREFIX` - 输出前缀（默认：`audio/`）
    /// * `TTS_VOICE_ID` - 语音 ID（默认：`Joanna`）
    ///
    /// # Errors
    ///
    /// 当某个变量被设置为空字符串时返回 [`TaskError::Config`]。
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            input_prefix: read_env_or("TTS_INPUT_PREFIX", defaults.input_prefix)?,
            output_prefix: read_env_or("TTS_OUTPUT_PREFIX", defaults.output_prefix)?,
            voice_id: read_env_or("TTS_VOICE_ID", defaults.voice_id)?,
        })
    }
}

fn read_env_or(name: &str, default: String) -> Result<String> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => {
            Err(TaskError::config(format!("环境变量 {name} 不能为空")))
        }
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(TaskError::config(format!("无法读取环境变量 {name}: {e}"))),
    }
}

/// 构建 AWS SDK 共享配置。
///
/// 区域按以下顺序确定：显式传入的区域、环境中的默认区域、`us-east-1`。
///
/// # 参数
///
/// * `region` - 显式指定的区域
/// * `credentials` - 静态凭据，`None` 时使用默认凭据链
///
/// # 返回值
///
/// 可用于创建任意服务客户端的 `SdkConfig`。
pub async fn load_sdk_config(
    region: Option<String>,
    credentials: Option<Credentials>,
) -> SdkConfig {
    let region_provider = RegionProviderChain::first_try(region.map(Region::new))
        .or_default_provider()
        .or_else(Region::new(DEFAULT_REGION));

    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
    if let Some(credentials) = credentials {
        loader = loader.credentials_provider(credentials);
    }

    loader.load().await
}
