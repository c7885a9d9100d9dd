//! Global adjustment command.

use clap::Args;

use retouch::ImageResource;

use super::{create_client, print_verbose, write_image};
use crate::Cli;

/// Apply a global, photorealistic adjustment.
#[derive(Args)]
pub struct AdjustCommand {
    /// Input image file
    image: String,

    /// Adjustment request, e.g. "brighten the shadows"
    prompt: String,
}

impl AdjustCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let client = create_client(cli)?;
        let image = ImageResource::from_path(&self.image);

        print_verbose(cli, &format!("adjusting {}", self.image));

        let edited = client.edits().apply_adjustment(&image, &self.prompt).await?;
        write_image(cli, &edited)
    }
}
