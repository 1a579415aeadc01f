use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::error::ArgsError;
use crate::format::Format;
use crate::snapshot;

/// Overrides where the snapshot of tracked words is kept
pub const REPOSITORY_ENV: &str = "WORDTRACKER_REPOSITORY";

pub const USAGE: &str = "usage: wordtracker <input-file> -pf|-pl|-po [-f<output-file>]";

/// Everything a single run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File to read words from
    pub input: PathBuf,
    pub format: Format,
    /// Where to write the report, or `None` for stdout
    pub output: Option<PathBuf>,
    /// Snapshot file carried over between runs
    pub repository: PathBuf,
}

impl Config {
    /// Parses the arguments that follow the program name
    ///
    /// Paths are taken as given, so they do not have to be valid Unicode.
    pub fn from_args<I, S>(args: I) -> Result<Self, ArgsError>
        where I: IntoIterator<Item=S>,
              S: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        let (input, flag, output) = match args.as_slice() {
            [input, flag] => (input, flag, None),
            [input, flag, output] => (input, flag, Some(output)),
            _ => return Err(ArgsError::WrongCount(args.len())),
        };

        let format = match flag.to_str() {
            Some(flag) => flag.parse::<Format>()?,
            None => return Err(ArgsError::UnknownFormat(flag.to_string_lossy().into_owned())),
        };
        let output = match output {
            Some(output) => match output_path(output) {
                Some(path) => Some(path),
                None => return Err(ArgsError::BadOutput(output.to_string_lossy().into_owned())),
            },
            None => None,
        };

        Ok(Self {
            input: PathBuf::from(input),
            format,
            output,
            repository: PathBuf::from(snapshot::DEFAULT_PATH),
        })
    }

    /// Reads the process arguments and environment
    pub fn from_env() -> Result<Self, ArgsError> {
        let mut config = Self::from_args(env::args_os().skip(1))?;
        if let Some(repository) = env::var_os(REPOSITORY_ENV) {
            config.repository = PathBuf::from(repository);
        }
        Ok(config)
    }
}

/// The path in a `-f<path>` argument, if it has that form
#[cfg(unix)]
fn output_path(arg: &OsStr) -> Option<PathBuf> {
    use std::os::unix::ffi::OsStrExt;

    match arg.as_bytes().strip_prefix(&b"-f"[..]) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(OsStr::from_bytes(path))),
        _ => None,
    }
}

/// The path in a `-f<path>` argument, if it has that form
#[cfg(not(unix))]
fn output_path(arg: &OsStr) -> Option<PathBuf> {
    match arg.to_str()?.strip_prefix("-f") {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdout_report() {
        let config = Config::from_args(vec!["notes.txt", "-PL"]).unwrap();
        assert_eq!(config, Config {
            input: PathBuf::from("notes.txt"),
            format: Format::FilesLines,
            output: None,
            repository: PathBuf::from("repository.bst"),
        });
    }

    #[test]
    fn file_report() {
        let config = Config::from_args(vec!["notes.txt", "-po", "-fout/report.txt"]).unwrap();
        assert_eq!(config.format, Format::Full);
        assert_eq!(config.output, Some(PathBuf::from("out/report.txt")));
    }

    #[test]
    fn wrong_count() {
        assert_eq!(Config::from_args(Vec::<String>::new()), Err(ArgsError::WrongCount(0)));
        assert_eq!(Config::from_args(vec!["notes.txt"]), Err(ArgsError::WrongCount(1)));
        assert_eq!(Config::from_args(vec!["a", "-pf", "-fb", "c"]), Err(ArgsError::WrongCount(4)));
    }

    #[test]
    fn bad_flags() {
        assert_eq!(Config::from_args(vec!["notes.txt", "-px"]), Err(ArgsError::UnknownFormat("-px".to_owned())));
        assert_eq!(Config::from_args(vec!["notes.txt", "-pf", "-f"]), Err(ArgsError::BadOutput("-f".to_owned())));
        assert_eq!(Config::from_args(vec!["notes.txt", "-pf", "out.txt"]), Err(ArgsError::BadOutput("out.txt".to_owned())));
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_paths() {
        use std::os::unix::ffi::OsStrExt;

        let input = OsStr::from_bytes(b"caf\xe9.txt");
        let output = OsStr::from_bytes(b"-fout\xff.txt");
        let config = Config::from_args(vec![input, OsStr::new("-pf"), output]).unwrap();

        assert_eq!(config.input.as_os_str(), input);
        assert_eq!(config.output.unwrap().as_os_str(), OsStr::from_bytes(b"out\xff.txt"));

        let flag = OsStr::from_bytes(b"-p\xff");
        assert!(matches!(
            Config::from_args(vec![input, flag]),
            Err(ArgsError::UnknownFormat(_))
        ));
    }
}
