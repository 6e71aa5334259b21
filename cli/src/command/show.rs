use anyhow::Context;
use clap::Args;
use epubmeta::{ExtractOptions, ExtractionResult, Extractor};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// An EPUB file or directory containing the contents of an unzipped EPUB
    pub ebook_path: PathBuf,

    /// Print the full extraction result as JSON (images as base64)
    #[arg(long)]
    json: bool,

    /// Skip reading manifest images
    #[arg(long)]
    no_images: bool,
}

impl ShowCommand {
    pub fn show(&self) -> anyhow::Result<()> {
        let extractor = Extractor::new(ExtractOptions::builder().images(!self.no_images));
        let result = extractor
            .extract_path(&self.ebook_path)
            .with_context(|| format!("Failed to read `{}`", self.ebook_path.display()))?;

        let mut stdout = io::stdout().lock();
        if self.json {
            serde_json::to_writer_pretty(&mut stdout, &result)?;
            writeln!(stdout)?;
        } else {
            write_summary(&mut stdout, &result)?;
        }
        Ok(())
    }
}

pub(crate) fn write_summary(out: &mut impl Write, result: &ExtractionResult) -> io::Result<()> {
    writeln!(out, "Package: {}", result.package_path())?;
    writeln!(out)?;
    writeln!(out, "Metadata")?;
    for (name, value) in result.metadata() {
        writeln!(out, "  {name}: {}", value.as_deref().unwrap_or_default())?;
    }

    if !result.images().is_empty() {
        writeln!(out)?;
        writeln!(out, "Images")?;
        for (href, image) in result.images() {
            let cover = if result.cover_href() == Some(href.as_str()) {
                " [cover]"
            } else {
                ""
            };
            // Decoded size from the padded base64 length
            let data = image.data();
            let size = data.len() / 4 * 3 - data.bytes().rev().take_while(|b| *b == b'=').count();
            writeln!(out, "  {href} ({}, {size} bytes){cover}", image.media_type())?;
        }
    }
    Ok(())
}
