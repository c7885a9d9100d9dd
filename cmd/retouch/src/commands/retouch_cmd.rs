//! Localized retouch command.

use clap::Args;

use retouch::{Hotspot, ImageResource};

use super::{create_client, print_verbose, write_image};
use crate::Cli;

/// Localized retouch around a pixel coordinate.
#[derive(Args)]
pub struct RetouchCommand {
    /// Input image file
    image: String,

    /// Edit request, e.g. "remove the lamp post"
    prompt: String,

    /// Hotspot x coordinate (pixels)
    #[arg(short = 'x', long)]
    x: u32,

    /// Hotspot y coordinate (pixels)
    #[arg(short = 'y', long)]
    y: u32,
}

impl RetouchCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let client = create_client(cli)?;
        let image = ImageResource::from_path(&self.image);

        print_verbose(
            cli,
            &format!("retouching {} at ({}, {})", self.image, self.x, self.y),
        );

        let edited = client
            .edits()
            .retouch(&image, &self.prompt, Hotspot::new(self.x, self.y))
            .await?;

        write_image(cli, &edited)
    }
}
