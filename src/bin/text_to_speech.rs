use aws_lambda_events::event::s3::S3Event;
use cloud_ai_tasks::config::{SpeechConfig, load_sdk_config};
use cloud_ai_tasks::speech::TextToSpeech;
use cloud_ai_tasks::utils::logging::init_tracing;
use lambda_runtime::{Error, LambdaEvent, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    init_tracing(false);

    let config = SpeechConfig::from_env()?;
    let sdk_config = load_sdk_config(None, None).await;

    // 客户端在冷启动时创建，之后的调用共用
    let tts = TextToSpeech::from_sdk_config(&sdk_config, config);
    let tts = &tts;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<S3Event>| async move {
        tts.handle(&event.payload).await.map_err(Error::from)
    }))
    .await
}
