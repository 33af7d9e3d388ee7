use anyhow::{Context, Result};
use clap::Parser;
use converter_skill::kernel::config::{ConfigArgs, SkillConfig};
use converter_skill::services::http;
use converter_skill::Skill;
use std::sync::Arc;

/// HTTPS endpoint for the unit converter skill (run behind a TLS proxy)
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Address to bind
    #[clap(long, env = "SKILL_HOST", default_value = "127.0.0.1")]
    host: String,
    /// Port to bind
    #[clap(long, env = "SKILL_PORT", default_value_t = 3000)]
    port: u16,
    #[clap(flatten)]
    config: ConfigArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    converter_skill::init_tracing("info", false);
    tracing::info!("Converter skill booting...");

    let config = SkillConfig::from(cli.config);
    tracing::info!(
        "Fallback language: {}, user agent: {:?}",
        config.fallback_language,
        config.user_agent
    );
    let skill = Arc::new(Skill::new(config));

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, http::router(skill))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await
        .context("serve skill endpoint")?;
    Ok(())
}
