use std::cmp::Ordering;
use std::borrow::Borrow;
use std::io::Cursor;

use bstree::codec::{Decode, Encode};
use bstree::CodecError;

/// The lines of a single file that a word was found on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOccurrences {
    file: String,
    lines: Vec<u32>,
}

impl FileOccurrences {
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Line numbers (starting at 1) in the order they were recorded
    pub fn lines(&self) -> &[u32] {
        &self.lines
    }
}

/// A tracked word and every place it was seen
///
/// Entries are ordered and compared by their word alone, so a tree of
/// entries can be searched with a plain `&str`.
#[derive(Debug, Clone)]
pub struct WordEntry {
    word: String,
    count: u64,
    /// Ordered by first occurrence
    files: Vec<FileOccurrences>,
}

impl WordEntry {
    /// Creates an entry for a word that was just seen for the first time
    pub fn new(word: impl Into<String>, file: &str, line: u32) -> Self {
        Self {
            word: word.into(),
            count: 1,
            files: vec![FileOccurrences {
                file: file.to_owned(),
                lines: vec![line],
            }],
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Total number of occurrences across all files
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn files(&self) -> &[FileOccurrences] {
        &self.files
    }

    /// Records another occurrence of this word
    ///
    /// A file seen for the first time is added after every file already
    /// recorded.
    pub fn add_occurrence(&mut self, file: &str, line: u32) {
        match self.files.iter_mut().find(|occurrences| occurrences.file == file) {
            Some(occurrences) => occurrences.lines.push(line),
            None => self.files.push(FileOccurrences {
                file: file.to_owned(),
                lines: vec![line],
            }),
        }

        self.count += 1;
    }
}

impl PartialEq for WordEntry {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for WordEntry {}

impl PartialOrd for WordEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.word.cmp(&other.word)
    }
}

impl Borrow<str> for WordEntry {
    fn borrow(&self) -> &str {
        &self.word
    }
}

impl Encode for FileOccurrences {
    fn encode(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        self.file.encode(bytes)?;
        self.lines.encode(bytes)
    }
}

impl Decode for FileOccurrences {
    fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let file = String::decode(bytes)?;
        let lines: Vec<u32> = Vec::decode(bytes)?;
        if lines.is_empty() {
            return Err(CodecError::Inconsistent("file recorded without any lines"));
        }

        Ok(Self {file, lines})
    }
}

impl Encode for WordEntry {
    fn encode(&self, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        self.word.encode(bytes)?;
        self.count.encode(bytes)?;
        self.files.encode(bytes)
    }
}

impl Decode for WordEntry {
    /// Every entry comes from at least one occurrence, and `count` is the
    /// number of recorded lines across all files
    fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let word = String::decode(bytes)?;
        let count = u64::decode(bytes)?;
        let files: Vec<FileOccurrences> = Vec::decode(bytes)?;

        if files.is_empty() {
            return Err(CodecError::Inconsistent("word recorded without any files"));
        }
        let lines: u64 = files.iter().map(|occurrences| occurrences.lines.len() as u64).sum();
        if lines != count {
            return Err(CodecError::Inconsistent("occurrence count does not match recorded lines"));
        }

        Ok(Self {word, count, files})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occurrences_keep_file_order() {
        let mut entry = WordEntry::new("cat", "b.txt", 3);
        entry.add_occurrence("a.txt", 1);
        entry.add_occurrence("b.txt", 7);
        entry.add_occurrence("b.txt", 7);

        assert_eq!(entry.count(), 4);

        let files: Vec<_> = entry.files().iter().map(FileOccurrences::file).collect();
        assert_eq!(files, ["b.txt", "a.txt"]);
        assert_eq!(entry.files()[0].lines(), [3, 7, 7]);
        assert_eq!(entry.files()[1].lines(), [1]);
    }

    #[test]
    fn ordered_by_word_only() {
        let mut cat = WordEntry::new("cat", "a.txt", 1);
        cat.add_occurrence("a.txt", 2);

        assert_eq!(cat, WordEntry::new("cat", "z.txt", 90));
        assert!(WordEntry::new("apple", "z.txt", 1) < cat);
        // Plain byte-wise string comparison
        assert!(WordEntry::new("Zebra", "a.txt", 1) < WordEntry::new("apple", "a.txt", 1));

        let word: &str = cat.borrow();
        assert_eq!(word, "cat");
    }

    #[test]
    fn codec_preserves_occurrences() {
        let mut entry = WordEntry::new("dog", "one.txt", 4);
        entry.add_occurrence("two.txt", 1);
        entry.add_occurrence("one.txt", 9);

        let bytes = entry.get_encoded().unwrap();
        let decoded = WordEntry::get_decoded(&bytes).unwrap();

        assert_eq!(decoded.word(), "dog");
        assert_eq!(decoded.count(), 3);
        assert_eq!(decoded.files(), entry.files());
    }

    #[test]
    fn decode_rejects_inconsistent_entries() {
        let mut wrong_count = WordEntry::new("dog", "one.txt", 4);
        wrong_count.count = 2;

        let mut no_files = WordEntry::new("dog", "one.txt", 4);
        no_files.files.clear();
        no_files.count = 0;

        let mut no_lines = WordEntry::new("dog", "one.txt", 4);
        no_lines.files[0].lines.clear();
        no_lines.count = 0;

        for entry in &[wrong_count, no_files, no_lines] {
            let bytes = entry.get_encoded().unwrap();
            assert!(matches!(WordEntry::get_decoded(&bytes), Err(CodecError::Inconsistent(_))));
        }
    }
}
