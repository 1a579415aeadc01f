use std::fmt;
use std::str::FromStr;

use crate::entry::WordEntry;
use crate::error::ArgsError;

/// How much detail to print for each tracked word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The word and the files it appears in (`-pf`)
    Files,
    /// The word, its files, and the lines in each file (`-pl`)
    FilesLines,
    /// Everything `FilesLines` prints plus the total number of occurrences (`-po`)
    Full,
}

impl Format {
    /// The command line flag that selects this format
    pub fn flag(self) -> &'static str {
        match self {
            Format::Files => "-pf",
            Format::FilesLines => "-pl",
            Format::Full => "-po",
        }
    }
}

impl FromStr for Format {
    type Err = ArgsError;

    /// Flags are matched case-insensitively
    fn from_str(flag: &str) -> Result<Self, Self::Err> {
        match flag.to_ascii_lowercase().as_str() {
            "-pf" => Ok(Format::Files),
            "-pl" => Ok(Format::FilesLines),
            "-po" => Ok(Format::Full),
            _ => Err(ArgsError::UnknownFormat(flag.to_owned())),
        }
    }
}

impl WordEntry {
    /// Returns a value that prints this entry on one line in the given format
    pub fn display(&self, format: Format) -> Rendered<'_> {
        Rendered {entry: self, format}
    }
}

/// One [`WordEntry`] rendered in a [`Format`]
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    entry: &'a WordEntry,
    format: Format,
}

impl<'a> fmt::Display for Rendered<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.entry;

        write!(f, "Word: ==={}=== ", entry.word())?;
        if self.format == Format::Full {
            write!(f, "number of entries: {}, ", entry.count())?;
        }
        f.write_str("found in file(s): ")?;

        for occurrences in entry.files() {
            match self.format {
                Format::Files => write!(f, "{}, ", occurrences.file())?,

                Format::FilesLines | Format::Full => {
                    write!(f, "{} on lines: ", occurrences.file())?;
                    for line in occurrences.lines() {
                        write!(f, "{}, ", line)?;
                    }
                },
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordEntry {
        let mut entry = WordEntry::new("cat", "a.txt", 1);
        entry.add_occurrence("a.txt", 4);
        entry.add_occurrence("b.txt", 2);
        entry
    }

    #[test]
    fn parse_flags() {
        assert_eq!("-pf".parse::<Format>(), Ok(Format::Files));
        assert_eq!("-PL".parse::<Format>(), Ok(Format::FilesLines));
        assert_eq!("-Po".parse::<Format>(), Ok(Format::Full));
        assert_eq!("-px".parse::<Format>(), Err(ArgsError::UnknownFormat("-px".to_string())));

        for &format in &[Format::Files, Format::FilesLines, Format::Full] {
            assert_eq!(format.flag().parse::<Format>(), Ok(format));
        }
    }

    #[test]
    fn files_format() {
        assert_eq!(
            sample().display(Format::Files).to_string(),
            "Word: ===cat=== found in file(s): a.txt, b.txt, ",
        );
    }

    #[test]
    fn files_lines_format() {
        assert_eq!(
            sample().display(Format::FilesLines).to_string(),
            "Word: ===cat=== found in file(s): a.txt on lines: 1, 4, b.txt on lines: 2, ",
        );
    }

    #[test]
    fn full_format() {
        assert_eq!(
            sample().display(Format::Full).to_string(),
            "Word: ===cat=== number of entries: 3, found in file(s): a.txt on lines: 1, 4, b.txt on lines: 2, ",
        );
    }
}
