//! Image description command.

use clap::Args;

use retouch::ImageResource;

use super::{create_client, print_verbose};
use crate::Cli;

/// Describe the image as one generator-ready paragraph.
#[derive(Args)]
pub struct DescribeCommand {
    /// Input image file
    image: String,
}

impl DescribeCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let client = create_client(cli)?;
        let image = ImageResource::from_path(&self.image);

        print_verbose(cli, &format!("describing {}", self.image));

        let description = client.edits().describe(&image).await?;

        match &cli.output {
            Some(path) => {
                std::fs::write(path, &description)?;
                println!("wrote {path}");
            }
            None => println!("{description}"),
        }
        Ok(())
    }
}
