//! Shared helpers for CLI commands.

use std::time::Duration;

use anyhow::Context as _;
use retouch::{Client, InlineImage, ENV_API_KEY};

use crate::Cli;

/// Builds the shared API client from CLI flags and the environment.
pub(crate) fn create_client(cli: &Cli) -> anyhow::Result<Client> {
    let api_key = match &cli.api_key {
        Some(key) => key.clone(),
        None => std::env::var(ENV_API_KEY)
            .with_context(|| format!("no --api-key given and {ENV_API_KEY} is not set"))?,
    };

    let mut builder = Client::builder(api_key);
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    // --model overrides whichever path the subcommand takes.
    if let Some(model) = &cli.model {
        builder = builder
            .edit_model(model.clone())
            .text_model(model.clone())
            .synthesis_model(model.clone());
    }
    Ok(builder.build()?)
}

/// Writes the decoded image to the output file.
pub(crate) fn write_image(cli: &Cli, image: &InlineImage) -> anyhow::Result<()> {
    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| format!("edited.{}", extension_for(&image.mime_type)));
    std::fs::write(&path, image.decode()?)
        .with_context(|| format!("cannot write {path}"))?;
    println!("wrote {path}");
    Ok(())
}

fn extension_for(mime_type: &str) -> &str {
    match mime_type {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "bin",
    }
}

pub(crate) fn print_verbose(cli: &Cli, message: &str) {
    if cli.verbose {
        eprintln!("{message}");
    }
}
