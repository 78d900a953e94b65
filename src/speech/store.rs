use crate::error::{Result, TaskError};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;

/// 对象存储的抽象，真实实现为 S3 客户端。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// 读取对象的全部内容
    async fn get_bytes(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;

    /// 写入对象，已存在时覆盖
    async fn put_bytes(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()>;
}

#[async_trait]
impl ObjectStore for Client {
    #[tracing::instrument(skip(self))]
    async fn get_bytes(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let output = self
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(TaskError::s3)?;

        let data = output.body.collect().await.map_err(TaskError::byte_stream)?;
        Ok(data.into_bytes().to_vec())
    }

    #[tracing::instrument(skip(self, body), fields(size = body.len()))]
    async fn put_bytes(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        self.put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(TaskError::s3)?;

        Ok(())
    }
}
