use crate::error::{Result, TaskError};
use crate::utils::path::{decode_event_key, file_stem, join_slash};
use aws_lambda_events::event::s3::S3Event;

/// 输入文件必须使用的后缀
pub const TEXT_SUFFIX: &str = ".txt";

/// 输出音频的扩展名
pub const AUDIO_EXTENSION: &str = "mp3";

/// 触发处理的存储对象
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub bucket: String,
    /// 已解码的对象键
    pub key: String,
}

impl ObjectRef {
    /// 从 S3 事件的第一条记录中取出存储桶和对象键。
    ///
    /// # Errors
    ///
    /// 事件中没有记录，或记录缺少存储桶名称、对象键时返回 [`TaskError::InvalidEvent`]。
    pub fn from_event(event: &S3Event) -> Result<Self> {
        let record = event
            .records
            .first()
            .ok_or_else(|| TaskError::invalid_event("事件中没有记录"))?;

        let bucket = record
            .s3
            .bucket
            .name
            .clone()
            .ok_or_else(|| TaskError::invalid_event("记录缺少存储桶名称"))?;

        let key = record
            .s3
            .object
            .key
            .as_deref()
            .map(decode_event_key)
            .ok_or_else(|| TaskError::invalid_event("记录缺少对象键"))?;

        Ok(Self { bucket, key })
    }
}

/// 判断对象键是否位于输入前缀下且以 `.txt` 结尾
pub fn is_convertible_key(key: &str, input_prefix: &str) -> bool {
    key.starts_with(input_prefix) && key.ends_with(TEXT_SUFFIX)
}

/// 计算输出音频的对象键
///
/// 取输入键最后一段的文件名，去掉扩展名后加上 `.mp3`，放在输出前缀下。
///
/// # 示例
///
/// ```
/// use cloud_ai_tasks::speech::audio_key_for;
///
/// assert_eq!(audio_key_for("text/hello.txt", "audio/"), "audio/hello.mp3");
/// assert_eq!(audio_key_for("text/a/b/notes.txt", "audio/"), "audio/notes.mp3");
/// ```
pub fn audio_key_for(key: &str, output_prefix: &str) -> String {
    let file_name = format!("{}.{}", file_stem(key), AUDIO_EXTENSION);
    join_slash(&[output_prefix, &file_name])
}


/// 构造一个与 S3 实际推送格式一致的 `ObjectCreated:Put` 事件
#[cfg(test)]
pub(crate) fn sample_event_json(bucket: &str, key: &str) -> serde_json::Value {
    serde_json::json!({
        "Records": [{
            "eventVersion": "2.1",
            "eventSource": "aws:s3",
            "awsRegion": "us-east-1",
            "eventTime": "2025-08-01T18:24:43.000Z",
            "eventName": "ObjectCreated:Put",
            "userIdentity": { "principalId": "EXAMPLE" },
            "requestParameters": { "sourceIPAddress": "127.0.0.1" },
            "responseElements": {
                "x-amz-request-id": "EXAMPLE123456789",
                "x-amz-id-2": "EXAMPLE123/5678abcdefghijklambdaisawesome/mnopqrstuvwxyzABCDEFGH"
            },
            "s3": {
                "s3SchemaVersion": "1.0",
                "configurationId": "text-to-speech",
                "bucket": {
                    "name": bucket,
                    "ownerIdentity": { "principalId": "EXAMPLE" },
                    "arn": format!("arn:aws:s3:::{bucket}")
                },
                "object": {
                    "key": key,
                    "size": 1024,
                    "eTag": "0123456789abcdef0123456789abcdef",
                    "sequencer": "0A1B2C3D4E5F678901"
                }
            }
        }]
    })
}

#[cfg(test)]
pub(crate) fn sample_event(bucket: &str, key: &str) -> S3Event {
    serde_json::from_value(sample_event_json(bucket, key)).unwrap()
}
