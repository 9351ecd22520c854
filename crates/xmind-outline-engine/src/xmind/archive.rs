use std::io::{Cursor, Write};

use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::error::{CompileError, PackagingError};
use crate::models::OutlineNode;

use super::{
    documents::{CONTENT_PATH, MANIFEST_PATH, MANIFEST_XML, STYLES_PATH, STYLES_XML, content_xml},
    ids::TopicIds,
};

/// Builds a complete `.xmind` archive for the tree under `root`.
///
/// Entries are always `content.xml`, `styles.xml` and
/// `META-INF/manifest.xml`, in that order.
pub fn assemble(root: &OutlineNode) -> Result<Vec<u8>, CompileError> {
    let mut ids = TopicIds::new();
    let content = content_xml(root, &mut ids)?;

    let bytes = package(&[
        (CONTENT_PATH, content.as_str()),
        (STYLES_PATH, STYLES_XML),
        (MANIFEST_PATH, MANIFEST_XML),
    ])?;

    log::debug!(
        "assembled archive: {} topic id(s), {} bytes",
        ids.issued(),
        bytes.len()
    );
    Ok(bytes)
}

/// Deflates each `(path, text)` entry into an in-memory zip.
pub fn package(entries: &[(&str, &str)]) -> Result<Vec<u8>, PackagingError> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    for (path, text) in entries {
        zip.start_file(*path, options)?;
        zip.write_all(text.as_bytes())?;
    }

    Ok(zip.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Read;
    use zip::ZipArchive;

    fn entry_names(bytes: &[u8]) -> Vec<String> {
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    #[test]
    fn test_package_round_trip() {
        let bytes = package(&[("a.txt", "hello"), ("dir/b.txt", "world")]).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut text = String::new();
        archive
            .by_name("dir/b.txt")
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "world");
    }

    #[test]
    fn test_entries_are_deflated() {
        let bytes = package(&[("a.txt", "aaaaaaaaaaaaaaaaaaaaaaaaaaaa")]).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let file = archive.by_index(0).unwrap();
        assert_eq!(file.compression(), CompressionMethod::Deflated);
    }

    #[test]
    fn test_assemble_writes_three_fixed_entries() {
        let bytes = assemble(&OutlineNode::new("Root")).unwrap();

        let mut names = entry_names(&bytes);
        names.sort();
        assert_eq!(
            names,
            vec!["META-INF/manifest.xml", "content.xml", "styles.xml"]
        );
    }
}
