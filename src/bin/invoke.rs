use anyhow::{Context, Result};
use clap::Parser;
use converter_skill::kernel::config::{ConfigArgs, SkillConfig};
use converter_skill::platform::RequestEnvelope;
use converter_skill::Skill;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};

/// Run request envelopes through the skill locally and print the responses
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Envelope file. Reads stdin when omitted
    file: Option<PathBuf>,
    /// Treat stdin as newline-delimited envelopes, one response per line
    #[clap(long)]
    lines: bool,
    #[clap(flatten)]
    config: ConfigArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    // stdout carries the responses
    converter_skill::init_tracing("warn", true);

    let skill = Skill::new(SkillConfig::from(cli.config));

    if cli.lines {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.context("read stdin")? {
            if line.trim().is_empty() {
                continue;
            }
            // Malformed lines get the apology so output stays line-for-line.
            let response = skill.handle_json(&line);
            println!("{}", serde_json::to_string(&response)?);
        }
        return Ok(());
    }

    let raw = match &cli.file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("read stdin")?;
            buf
        }
    };
    let envelope: RequestEnvelope = serde_json::from_str(&raw).context("parse request envelope")?;
    let response = skill.handle_envelope(&envelope);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
