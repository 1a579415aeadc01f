use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use bstree::BSTree;

use crate::entry::WordEntry;
use crate::error::TrackerError;
use crate::format::Format;
use crate::tokenize;

/// Collects every word seen in a set of files, keyed and sorted by the word
#[derive(Debug, Default)]
pub struct WordTracker {
    tree: BSTree<WordEntry>,
}

impl WordTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continues tracking on top of previously collected words
    pub fn from_tree(tree: BSTree<WordEntry>) -> Self {
        Self {tree}
    }

    pub fn tree(&self) -> &BSTree<WordEntry> {
        &self.tree
    }

    pub fn into_tree(self) -> BSTree<WordEntry> {
        self.tree
    }

    /// Records one occurrence of `word`
    ///
    /// An existing entry is updated in place; otherwise a new entry is
    /// added. Returns `true` if the word had not been seen before.
    pub fn add_word(&mut self, word: &str, file: &str, line: u32) -> bool {
        // The tree keeps the first entry for a word and never merges, so look it up first
        if let Some(node) = self.tree.search_mut(word) {
            node.element_mut().add_occurrence(file, line);
            false
        } else {
            self.tree.add(WordEntry::new(word, file, line))
        }
    }

    /// Reads every line of `reader`, recording each word under `file_name`
    ///
    /// Lines are numbered from 1. Returns the number of lines read.
    pub fn ingest_reader<R: BufRead>(&mut self, reader: R, file_name: &str) -> io::Result<u32> {
        let mut line_count: u32 = 0;

        for line in reader.lines() {
            let line = line?;
            line_count = next_line_number(line_count)?;

            for word in tokenize::words(&line) {
                if self.add_word(&word, file_name, line_count) {
                    log::trace!("new word {:?} on {}:{}", word, file_name, line_count);
                }
            }
        }

        log::debug!("read {} lines from {}", line_count, file_name);
        Ok(line_count)
    }

    /// Reads the file at `path`, recording each word under the path as given
    pub fn ingest_file(&mut self, path: &Path) -> Result<u32, TrackerError> {
        let io_error = |source: io::Error| TrackerError::Io {path: path.to_owned(), source};

        let file = File::open(path).map_err(io_error)?;
        let file_name = path.to_string_lossy();
        self.ingest_reader(BufReader::new(file), &file_name).map_err(io_error)
    }

    /// Writes one line per tracked word, in ascending order of the words
    pub fn write_entries<W: Write>(&self, mut writer: W, format: Format) -> io::Result<()> {
        for entry in self.tree.iter_inorder() {
            writeln!(writer, "{}", entry.display(format))?;
        }

        writer.flush()
    }

    /// Writes every tracked word to a newly created (or truncated) file
    pub fn write_to_file(&self, path: &Path, format: Format) -> Result<(), TrackerError> {
        let io_error = |source: io::Error| TrackerError::Io {path: path.to_owned(), source};

        let file = File::create(path).map_err(io_error)?;
        self.write_entries(BufWriter::new(file), format).map_err(io_error)
    }
}

fn next_line_number(line: u32) -> io::Result<u32> {
    line.checked_add(1).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidData, "too many lines to number")
    })
}
