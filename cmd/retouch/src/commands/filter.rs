//! Stylistic filter command.

use clap::Args;

use retouch::ImageResource;

use super::{create_client, print_verbose, write_image};
use crate::Cli;

/// Apply a stylistic filter to the entire image.
#[derive(Args)]
pub struct FilterCommand {
    /// Input image file
    image: String,

    /// Filter request, e.g. "1970s film look"
    prompt: String,
}

impl FilterCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let client = create_client(cli)?;
        let image = ImageResource::from_path(&self.image);

        print_verbose(cli, &format!("applying filter to {}", self.image));

        let edited = client.edits().apply_filter(&image, &self.prompt).await?;
        write_image(cli, &edited)
    }
}
