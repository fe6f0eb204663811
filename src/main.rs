use roomstyle::together::image_client::DEFAULT_MODEL;
use roomstyle::{runner, ImageClient, TogetherClient, TogetherConfig, INPUT_IMAGE_URL};
use std::env;
use std::path::Path;
use std::process;

fn print_usage() {
    println!("Usage: roomstyle [model|batch]");
    println!();
    println!("Example: roomstyle {}", DEFAULT_MODEL);
    println!("Use 'roomstyle batch' to run every supported model in sequence.");
    println!("Make sure to set the TOGETHER_API_KEY environment variable.");
    println!();
    println!("This tool uses Together AI to transform room images with beautiful furniture and design.");
    println!("Available models:");
    for (id, name, provider) in ImageClient::supported_models() {
        println!("  {} - {} ({})", id, name, provider);
    }
    println!();
    println!("Fixed input image: {}", INPUT_IMAGE_URL);
}

#[tokio::main]
async fn main() {
    if let Err(e) = roomstyle::logger::init_with_config(
        roomstyle::logger::LoggerConfig::development().with_level(roomstyle::logger::LogLevel::Info),
    ) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let arg = env::args().nth(1);

    if matches!(arg.as_deref(), Some("--help") | Some("-h")) {
        print_usage();
        return;
    }

    if env::var("TOGETHER_API_KEY").is_err() {
        log::error!("Please set the TOGETHER_API_KEY environment variable");
        log::error!("You can get an API key from https://together.ai");
        process::exit(1);
    }

    let config = TogetherConfig::from_env();
    let client = match TogetherClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to initialize Together client: {}", e);
            process::exit(1);
        }
    };

    let out_dir = Path::new(".");

    match arg.as_deref() {
        Some("batch") => {
            let models = ImageClient::supported_models();
            let model_ids: Vec<&str> = models.iter().map(|(id, _, _)| *id).collect();

            let records = runner::run_batch(client.image(), &model_ids, out_dir).await;
            runner::print_summary(&records);
        }
        other => {
            let model_id = other.unwrap_or(DEFAULT_MODEL);

            match runner::process_model(client.image(), model_id, out_dir).await {
                Ok(filename) => log::info!("📁 Saved to: {}", filename),
                Err(e) => {
                    log::error!("❌ Error generating image: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}
