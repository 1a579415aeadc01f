use std::fs;
use std::path::{Path, PathBuf};

use word_tracker::{snapshot, Format, WordEntry, WordTracker};

/// A scratch directory removed when dropped
struct TempDir(PathBuf);

impl TempDir {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("word_tracker-it-{}-{}", std::process::id(), name));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        TempDir(path)
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.0.join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

/// Does what a single invocation of the binary does
fn run_once(input: &Path, repository: &Path) -> WordTracker {
    let tree = snapshot::load(repository).unwrap().unwrap_or_default();
    let mut tracker = WordTracker::from_tree(tree);
    tracker.ingest_file(input).unwrap();
    snapshot::save(repository, tracker.tree()).unwrap();
    tracker
}

#[test]
fn words_accumulate_across_runs() {
    let dir = TempDir::new("accumulate");
    let repository = dir.0.join("repository.bst");
    let first = dir.write("first.txt", "It was the best of times,\nit was the worst of times.\n");
    let second = dir.write("second.txt", "Times change.\n");

    let tracker = run_once(&first, &repository);
    assert_eq!(tracker.tree().size(), 7);

    let tracker = run_once(&second, &repository);
    let words: Vec<_> = tracker.tree().iter_inorder().map(WordEntry::word).collect();
    assert_eq!(words, ["best", "change", "it", "of", "the", "times", "was", "worst"]);

    let times = tracker.tree().search("times").unwrap().element();
    assert_eq!(times.count(), 3);
    assert_eq!(times.files().len(), 2);
    assert_eq!(times.files()[0].file(), first.to_string_lossy());
    assert_eq!(times.files()[0].lines(), [1, 2]);
    assert_eq!(times.files()[1].file(), second.to_string_lossy());
    assert_eq!(times.files()[1].lines(), [1]);

    // A fresh load sees exactly what the last run saved
    let reloaded = snapshot::load(&repository).unwrap().unwrap();
    assert_eq!(&reloaded, tracker.tree());
}

#[test]
fn report_written_to_file() {
    let dir = TempDir::new("report");
    let repository = dir.0.join("repository.bst");
    let input = dir.write("in.txt", "b a\na\n");
    let report = dir.0.join("report.txt");

    let tracker = run_once(&input, &repository);
    tracker.write_to_file(&report, Format::FilesLines).unwrap();

    let name = input.to_string_lossy();
    let expected = format!(
        "Word: ===a=== found in file(s): {0} on lines: 1, 2, \nWord: ===b=== found in file(s): {0} on lines: 1, \n",
        name,
    );
    assert_eq!(fs::read_to_string(&report).unwrap(), expected);
}

#[test]
fn same_file_twice_records_lines_twice() {
    let dir = TempDir::new("twice");
    let repository = dir.0.join("repository.bst");
    let input = dir.write("in.txt", "echo\n");

    run_once(&input, &repository);
    let tracker = run_once(&input, &repository);

    let echo = tracker.tree().search("echo").unwrap().element();
    assert_eq!(echo.count(), 2);
    assert_eq!(echo.files().len(), 1);
    assert_eq!(echo.files()[0].lines(), [1, 1]);
}
