use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use visionrelay_core::answer::{extract_answer_with_kind, ExtractedAnswer, LineKind};

#[derive(Debug, clap::Args)]
pub struct ExtractOptions {
    /// File holding a model reply (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ExtractOptions, global: crate::Global) -> Result<()> {
    let reply = match &options.file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| f!("Failed to read '{}'", path.display()))?,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read stdin")?;
            buffer
        }
    };

    if global.verbose {
        eprintln!("Reply: {} lines, {} bytes", reply.lines().count(), reply.len());
    }

    let extracted = answer_for(&reply)?;
    println!("{}", render(&extracted, options.json)?);

    Ok(())
}

/// The answer line of `reply`, or an error when it has no non-blank line.
pub fn answer_for(reply: &str) -> Result<ExtractedAnswer> {
    extract_answer_with_kind(reply).ok_or_eyre("The reply has no non-blank line")
}

pub fn render(extracted: &ExtractedAnswer, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(extracted)?)
    } else {
        Ok(colorize(extracted).to_string())
    }
}

fn colorize(extracted: &ExtractedAnswer) -> colored::ColoredString {
    let answer = extracted.answer.as_str();
    match extracted.kind {
        LineKind::CanonicalAnswer => answer.green().bold(),
        LineKind::NotConfident => answer.yellow(),
        LineKind::Illegible => answer.red(),
        LineKind::Unrecognized => answer.normal(),
    }
}
