use anyhow::{Context, bail};
use clap::Args;
use epubmeta::{ExtractedImage, Extractor};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CoverCommand {
    /// An EPUB file or directory containing the contents of an unzipped EPUB
    pub ebook_path: PathBuf,

    /// Where to write the cover image.
    /// Defaults to the file name of the cover within the EPUB.
    #[arg(short, long, conflicts_with = "data_uri")]
    output: Option<PathBuf>,

    /// Print the cover as a `data:` URI instead of writing a file
    #[arg(long)]
    data_uri: bool,
}

impl CoverCommand {
    pub fn cover(&self) -> anyhow::Result<()> {
        let result = Extractor::default()
            .extract_path(&self.ebook_path)
            .with_context(|| format!("Failed to read `{}`", self.ebook_path.display()))?;

        let Some((href, image)) = result.cover() else {
            bail!("`{}` contains no images", self.ebook_path.display());
        };

        if self.data_uri {
            println!("{}", image.data_uri());
            return Ok(());
        }

        let output = self.output_path(href);
        write_image(&output, image)?;
        tracing::info!(href, output = %output.display(), "wrote cover image");
        Ok(())
    }

    fn output_path(&self, href: &str) -> PathBuf {
        self.output.clone().unwrap_or_else(|| default_file_name(href))
    }
}

/// The last path segment of the cover href, percent-encoding left intact.
fn default_file_name(href: &str) -> PathBuf {
    let name = href.rsplit('/').next().filter(|name| !name.is_empty());
    PathBuf::from(name.unwrap_or("cover"))
}

fn write_image(output: &Path, image: &ExtractedImage) -> anyhow::Result<()> {
    let bytes = image
        .decode()
        .context("Cover image data is not valid base64")?;

    fs::write(output, bytes).with_context(|| format!("Failed to write `{}`", output.display()))
}
