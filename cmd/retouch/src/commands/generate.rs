//! Text-to-image generation command.

use clap::Args;

use super::{create_client, print_verbose, write_image};
use crate::Cli;

/// Generate one square PNG image from a text prompt.
#[derive(Args)]
pub struct GenerateCommand {
    /// Generation prompt, e.g. "a red bicycle"
    prompt: String,
}

impl GenerateCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let client = create_client(cli)?;

        print_verbose(cli, &format!("generating image for \"{}\"", self.prompt));

        let image = client.edits().generate(&self.prompt).await?;
        write_image(cli, &image)
    }
}
