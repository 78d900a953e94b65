//! 集成测试共用的客户端构造函数
//!
//! 所有客户端都指向本地 wiremock 服务器，使用固定的测试凭据并关闭重试。

#![allow(dead_code)]

use wiremock::MockServer;

const TEST_REGION: &str = "us-east-1";

pub fn rekognition_client(server: &MockServer) -> aws_sdk_rekognition::Client {
    use aws_sdk_rekognition::config::retry::RetryConfig;
    use aws_sdk_rekognition::config::{BehaviorVersion, Credentials, Region};

    let config = aws_sdk_rekognition::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(TEST_REGION))
        .credentials_provider(Credentials::new("test", "test", None, None, "test"))
        .endpoint_url(server.uri())
        .retry_config(RetryConfig::disabled())
        .build();
    aws_sdk_rekognition::Client::from_conf(config)
}

pub fn polly_client(server: &MockServer) -> aws_sdk_polly::Client {
    use aws_sdk_polly::config::retry::RetryConfig;
    use aws_sdk_polly::config::{BehaviorVersion, Credentials, Region};

    let config = aws_sdk_polly::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(TEST_REGION))
        .credentials_provider(Credentials::new("test", "test", None, None, "test"))
        .endpoint_url(server.uri())
        .retry_config(RetryConfig::disabled())
        .build();
    aws_sdk_polly::Client::from_conf(config)
}

pub fn s3_client(server: &MockServer) -> aws_sdk_s3::Client {
    use aws_sdk_s3::config::retry::RetryConfig;
    use aws_sdk_s3::config::{
        BehaviorVersion, Credentials, Region, RequestChecksumCalculation,
        ResponseChecksumValidation,
    };

    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(TEST_REGION))
        .credentials_provider(Credentials::new("test", "test", None, None, "test"))
        .endpoint_url(server.uri())
        .force_path_style(true)
        .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
        .response_checksum_validation(ResponseChecksumValidation::WhenRequired)
        .retry_config(RetryConfig::disabled())
        .build();
    aws_sdk_s3::Client::from_conf(config)
}

/// 构造一个 S3 `ObjectCreated:Put` 事件
pub fn s3_event(bucket: &str, key: &str) -> aws_lambda_events::event::s3::S3Event {
    let json = serde_json::json!({
        "Records": [{
            "eventVersion": "2.1",
            "eventSource": "aws:s3",
            "awsRegion": TEST_REGION,
            "eventTime": "2025-08-01T18:24:43.000Z",
            "eventName": "ObjectCreated:Put",
            "userIdentity": { "principalId": "EXAMPLE" },
            "requestParameters": { "sourceIPAddress": "127.0.0.1" },
            "responseElements": {
                "x-amz-request-id": "EXAMPLE123456789",
                "x-amz-id-2": "EXAMPLE123/abcdefghijklmnopqrstuvwxyz"
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
                    "size": 11,
                    "eTag": "0123456789abcdef0123456789abcdef",
                    "sequencer": "0A1B2C3D4E5F678901"
                }
            }
        }]
    });
    serde_json::from_value(json).expect("sample S3 event should deserialize")
}
