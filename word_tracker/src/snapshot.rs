//! Persists the tracked words between runs.
//!
//! A snapshot file is the 4-byte magic `WTRK`, a version byte, and then the
//! encoded [`BSTree`] of [`WordEntry`] values (see [`bstree::codec`]).

use std::fs;
use std::io;
use std::path::Path;

use bstree::BSTree;
use bstree::codec::{Decode, Encode};

use crate::entry::WordEntry;
use crate::error::{SnapshotError, TrackerError};

const MAGIC: &[u8; 4] = b"WTRK";
const VERSION: u8 = 1;

/// Where the snapshot lives unless configured otherwise
pub const DEFAULT_PATH: &str = "repository.bst";

/// Encodes a tree together with the snapshot header
pub fn encode(tree: &BSTree<WordEntry>) -> Result<Vec<u8>, SnapshotError> {
    let mut bytes = MAGIC.to_vec();
    bytes.push(VERSION);
    tree.encode(&mut bytes)?;
    Ok(bytes)
}

/// Decodes a whole snapshot, header included
pub fn decode(bytes: &[u8]) -> Result<BSTree<WordEntry>, SnapshotError> {
    let body = bytes.strip_prefix(&MAGIC[..]).ok_or(SnapshotError::BadMagic)?;
    let (&version, body) = body.split_first().ok_or(SnapshotError::Truncated)?;
    if version != VERSION {
        return Err(SnapshotError::UnsupportedVersion(version));
    }

    Ok(BSTree::get_decoded(body)?)
}

/// Loads the snapshot at `path`, or returns `None` if there is no file there
pub fn load(path: &Path) -> Result<Option<BSTree<WordEntry>>, TrackerError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("no snapshot at {}, starting empty", path.display());
            return Ok(None);
        },
        Err(source) => return Err(TrackerError::Io {path: path.to_owned(), source}),
    };

    let tree = decode(&bytes).map_err(|source| TrackerError::Snapshot {path: path.to_owned(), source})?;
    log::info!("loaded {} words from {}", tree.size(), path.display());
    Ok(Some(tree))
}

/// Writes `tree` to `path`, replacing any previous snapshot
pub fn save(path: &Path, tree: &BSTree<WordEntry>) -> Result<(), TrackerError> {
    let bytes = encode(tree).map_err(|source| TrackerError::Snapshot {path: path.to_owned(), source})?;
    fs::write(path, &bytes).map_err(|source| TrackerError::Io {path: path.to_owned(), source})?;

    log::info!("saved {} words ({} bytes) to {}", tree.size(), bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use bstree::CodecError;

    fn sample() -> BSTree<WordEntry> {
        let mut tree = BSTree::new();
        tree.add(WordEntry::new("m", "a.txt", 1));
        tree.add(WordEntry::new("c", "a.txt", 2));
        tree.add(WordEntry::new("t", "b.txt", 3));
        if let Some(node) = tree.search_mut("c") {
            node.element_mut().add_occurrence("b.txt", 8);
        }
        tree
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("word_tracker-{}-{}", std::process::id(), name))
    }

    #[test]
    fn header() {
        let bytes = encode(&BSTree::new()).unwrap();
        assert_eq!(bytes, b"WTRK\x01\x00");
        assert!(decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn decode_keeps_shape_and_occurrences() {
        let tree = sample();
        let decoded = decode(&encode(&tree).unwrap()).unwrap();

        let words: Vec<_> = decoded.iter_preorder().map(WordEntry::word).collect();
        assert_eq!(words, ["m", "c", "t"]);

        let c = decoded.search("c").unwrap().element();
        assert_eq!(c.count(), 2);
        assert_eq!(c.files(), tree.search("c").unwrap().element().files());
    }

    #[test]
    fn rejects_bad_header() {
        assert!(matches!(decode(b"NOPE\x01\x00"), Err(SnapshotError::BadMagic)));
        assert!(matches!(decode(b"WT"), Err(SnapshotError::BadMagic)));
        assert!(matches!(decode(b"WTRK"), Err(SnapshotError::Truncated)));
        assert!(matches!(decode(b"WTRK\x02\x00"), Err(SnapshotError::UnsupportedVersion(2))));
    }

    #[test]
    fn rejects_corrupt_body() {
        let mut bytes = encode(&sample()).unwrap();
        bytes.push(0);
        assert!(matches!(decode(&bytes), Err(SnapshotError::Codec(CodecError::TrailingBytes(1)))));

        let bytes = encode(&sample()).unwrap();
        assert!(matches!(decode(&bytes[..bytes.len() - 3]), Err(SnapshotError::Codec(CodecError::Io(_)))));
    }

    #[test]
    fn load_missing_file() {
        let path = temp_path("missing.bst");
        let _ = fs::remove_file(&path);
        assert!(load(&path).unwrap().is_none());
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("save_then_load.bst");

        save(&path, &sample()).unwrap();
        let loaded = load(&path).unwrap().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, sample());
        assert!(loaded.iter_preorder().eq(sample().iter_preorder()));
    }

    #[test]
    fn load_corrupt_file() {
        let path = temp_path("corrupt.bst");
        fs::write(&path, b"garbage").unwrap();

        let result = load(&path);
        fs::remove_file(&path).unwrap();

        match result {
            Err(TrackerError::Snapshot {path: failed, source: SnapshotError::BadMagic}) => assert_eq!(failed, path),
            other => panic!("expected a snapshot error, got {:?}", other),
        }
    }
}
