//! Background removal command.

use clap::Args;

use retouch::ImageResource;

use super::{create_client, print_verbose, write_image};
use crate::Cli;

/// Cut out the main subject onto a transparent PNG canvas.
#[derive(Args)]
pub struct BackgroundCommand {
    /// Input image file
    image: String,
}

impl BackgroundCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let client = create_client(cli)?;
        let image = ImageResource::from_path(&self.image);

        print_verbose(cli, &format!("removing background of {}", self.image));

        let edited = client.edits().remove_background(&image).await?;
        write_image(cli, &edited)
    }
}
