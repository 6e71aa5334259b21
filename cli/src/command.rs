use clap::Subcommand;

mod cover;
mod show;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the metadata and images of an EPUB.
    Show(show::ShowCommand),
    /// Write out or print the cover image of an EPUB.
    Cover(cover::CoverCommand),
}

#[cfg(test)]
pub(crate) mod fixture {
    use std::fs;
    use tempfile::TempDir;

    const CONTAINER: &str =
        r#"<container><rootfiles><rootfile full-path="content.opf"/></rootfiles></container>"#;
    const PACKAGE: &str = r#"<package>
        <metadata><dc:title>Foo</dc:title><dc:creator>Bar</dc:creator></metadata>
        <manifest>
          <item id="plate" href="images/plate.gif" media-type="image/gif"/>
          <item id="cover" href="images/cover.png" media-type="image/png" properties="cover-image"/>
        </manifest>
    </package>"#;

    /// A directory holding the contents of an unzipped EPUB.
    pub(crate) fn unzipped_epub() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join("META-INF")).unwrap();
        fs::create_dir_all(root.join("images")).unwrap();
        fs::write(root.join("META-INF/container.xml"), CONTAINER).unwrap();
        fs::write(root.join("content.opf"), PACKAGE).unwrap();
        fs::write(root.join("images/cover.png"), b"\x89PNG").unwrap();
        fs::write(root.join("images/plate.gif"), b"GIF89a").unwrap();
        dir
    }
}
