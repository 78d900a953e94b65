use anyhow::Result;
use clap::Parser;
use cloud_ai_tasks::config::{DetectionArgs, load_sdk_config};
use cloud_ai_tasks::labels::{DetectionRequest, analyze_with_custom_model};
use cloud_ai_tasks::utils::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载 .env 文件
    dotenvy::dotenv().ok();
    init_tracing(true);

    let args = DetectionArgs::parse();

    if args.has_placeholder_credentials() {
        println!(
            "Please open the script and paste your AWS Access Key and Secret Key into the variables."
        );
        return Ok(());
    }

    let sdk_config = load_sdk_config(args.region.clone(), args.static_credentials()).await;
    let client = aws_sdk_rekognition::Client::new(&sdk_config);

    let request = DetectionRequest {
        model_arn: args.model_arn,
        bucket: args.bucket,
        photo: args.photo,
        min_confidence: args.min_confidence,
    };

    let mut stdout = std::io::stdout().lock();
    analyze_with_custom_model(&client, &request, &mut stdout).await?;

    Ok(())
}
