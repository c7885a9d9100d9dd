//! Text replacement command.

use clap::Args;

use retouch::{ImageResource, TextStyle};

use super::{create_client, print_verbose, write_image};
use crate::Cli;

/// Replace text appearing in the image.
///
/// Without style flags the replacement matches the original text's
/// appearance exactly; each style flag overrides one attribute.
#[derive(Args)]
pub struct ReplaceTextCommand {
    /// Input image file
    image: String,

    /// Text to find in the image
    find: String,

    /// Replacement text
    replace: String,

    /// Font family hint, e.g. "serif"
    #[arg(long)]
    font: Option<String>,

    /// Size hint, e.g. "large"
    #[arg(long)]
    size: Option<String>,

    /// Color hint, e.g. "red" or "#ff0000"
    #[arg(long)]
    color: Option<String>,

    /// Render the replacement in bold
    #[arg(long)]
    bold: bool,

    /// Render the replacement in italics
    #[arg(long)]
    italic: bool,
}

impl ReplaceTextCommand {
    fn style(&self) -> TextStyle {
        let mut style = TextStyle {
            font: self.font.clone(),
            size: self.size.clone(),
            color: self.color.clone(),
            ..Default::default()
        };
        if self.bold {
            style.bold = Some(true);
        }
        if self.italic {
            style.italic = Some(true);
        }
        style
    }

    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let client = create_client(cli)?;
        let image = ImageResource::from_path(&self.image);

        print_verbose(
            cli,
            &format!("replacing \"{}\" with \"{}\"", self.find, self.replace),
        );

        let edited = client
            .edits()
            .replace_text(&image, &self.find, &self.replace, &self.style())
            .await?;

        write_image(cli, &edited)
    }
}
