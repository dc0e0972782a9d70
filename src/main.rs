use anyhow::{Context, Result};
use post_translator::{config::Config, translator::TranslationService};
use std::io::BufRead;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so stdout stays machine-readable)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("post_translator=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let service = TranslationService::from_config(&config);

    // Arguments form a single post; otherwise each stdin line is one post
    let args: Vec<String> = std::env::args().skip(1).collect();
    let posts = if args.is_empty() {
        read_stdin_posts()?
    } else {
        vec![args.join(" ")]
    };

    info!("Translating {} post(s) with {}", posts.len(), config.openai_model);

    for post in &posts {
        let result = service.translate_content(post).await;
        println!(
            "{}",
            serde_json::to_string(&result).context("Failed to serialize result")?
        );
    }

    Ok(())
}

fn read_stdin_posts() -> Result<Vec<String>> {
    let mut posts = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if !line.trim().is_empty() {
            posts.push(line);
        }
    }
    Ok(posts)
}
