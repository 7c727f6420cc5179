//! Short-code records and the input directory scanner.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::builder::BuildError;

/// One short code and the URL it redirects to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    /// The input file's name, verbatim (extensions included)
    pub code: String,
    /// First line of the input file, without its line terminator
    pub url: String,
}

impl UrlRecord {
    /// Read a record from a URL file.
    pub fn from_file(path: &Path) -> Result<Self, BuildError> {
        let code = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let read_error = |source| BuildError::ReadError {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_error)?;
        let url = first_line(BufReader::new(file)).map_err(read_error)?;

        Ok(Self { code, url })
    }
}

/// Read the first line, dropping `\n` or `\r\n`. Nothing else is trimmed.
fn first_line(mut reader: impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}

/// Lazy sequence of records for the regular files in a URLs directory.
///
/// Created by [`scan`]. Subdirectories are skipped; the first failure to read
/// an entry ends the build, so callers should stop at the first `Err`.
pub struct UrlRecords {
    dir: PathBuf,
    first: Option<walkdir::DirEntry>,
    entries: walkdir::IntoIter,
}

/// Start enumerating a URLs directory (non-recursive).
///
/// Fails if the path is not a readable directory or has no entries at all.
pub fn scan(dir: &Path) -> Result<UrlRecords, BuildError> {
    let mut entries = WalkDir::new(dir)
        .max_depth(1)
        .follow_links(true)
        .into_iter();
    let read_dir_error = |source| BuildError::ReadDirError {
        path: dir.to_path_buf(),
        source,
    };

    // The root comes first, at depth 0.
    match entries.next() {
        Some(Ok(root)) if root.file_type().is_dir() => {}
        Some(Err(source)) => return Err(read_dir_error(source)),
        _ => return Err(BuildError::NotADirError(dir.to_path_buf())),
    }

    let first = match entries.next() {
        None => return Err(BuildError::EmptyDirError(dir.to_path_buf())),
        Some(Err(source)) => return Err(read_dir_error(source)),
        Some(Ok(entry)) => entry,
    };

    Ok(UrlRecords {
        dir: dir.to_path_buf(),
        first: Some(first),
        entries,
    })
}

impl Iterator for UrlRecords {
    type Item = Result<UrlRecord, BuildError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.first.take() {
                Some(entry) => entry,
                None => match self.entries.next()? {
                    Ok(entry) => entry,
                    Err(source) => {
                        return Some(Err(BuildError::ReadDirError {
                            path: self.dir.clone(),
                            source,
                        }))
                    }
                },
            };

            if !entry.file_type().is_file() {
                tracing::debug!("Skipping {}", entry.path().display());
                continue;
            }

            return Some(UrlRecord::from_file(entry.path()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn collect(dir: &Path) -> Vec<UrlRecord> {
        let mut records: Vec<UrlRecord> = scan(dir)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        records.sort_by(|a, b| a.code.cmp(&b.code));
        records
    }

    #[test]
    fn reads_code_and_url() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("abc"), "https://example.com/\n").unwrap();

        let records = collect(temp.path());

        assert_eq!(
            records,
            vec![UrlRecord {
                code: "abc".to_string(),
                url: "https://example.com/".to_string(),
            }]
        );
    }

    #[test]
    fn skips_subdirectories() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a"), "https://a.test").unwrap();
        fs::write(temp.path().join("b"), "https://b.test").unwrap();
        fs::create_dir(temp.path().join("c")).unwrap();
        fs::write(temp.path().join("c").join("nested"), "https://nested.test").unwrap();

        let codes: Vec<String> = collect(temp.path()).into_iter().map(|r| r.code).collect();

        assert_eq!(codes, vec!["a", "b"]);
    }

    #[test]
    fn keeps_extension_in_code() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("abc.txt"), "https://example.com/").unwrap();

        let records = collect(temp.path());

        assert_eq!(records[0].code, "abc.txt");
    }

    #[test]
    fn only_first_line_is_used() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("x"),
            "https://x.test/path  \r\nhttps://ignored.test\n",
        )
        .unwrap();

        let records = collect(temp.path());

        assert_eq!(records[0].url, "https://x.test/path  ");
    }

    #[test]
    fn empty_file_yields_empty_url() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("blank"), "").unwrap();

        let records = collect(temp.path());

        assert_eq!(records[0].url, "");
    }

    #[test]
    fn errors_on_empty_directory() {
        let temp = tempdir().unwrap();

        let result = scan(temp.path());

        assert!(matches!(result, Err(BuildError::EmptyDirError(_))));
    }

    #[test]
    fn errors_on_missing_directory() {
        let temp = tempdir().unwrap();

        let result = scan(&temp.path().join("urls"));

        assert!(matches!(result, Err(BuildError::ReadDirError { .. })));
    }

    #[test]
    fn errors_when_path_is_a_file() {
        let temp = tempdir().unwrap();
        let urls = temp.path().join("urls");
        fs::write(&urls, "https://example.com/").unwrap();

        let err = scan(&urls).err().unwrap();

        assert!(matches!(err, BuildError::NotADirError(_)));
        assert!(err.to_string().starts_with("Cannot read URLs directory"));
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinked_files() {
        use std::os::unix::fs::symlink;

        let temp = tempdir().unwrap();
        let urls = temp.path().join("urls");
        fs::create_dir(&urls).unwrap();
        fs::write(temp.path().join("target"), "https://linked.test\n").unwrap();
        symlink(temp.path().join("target"), urls.join("lnk")).unwrap();

        let records = collect(&urls);

        assert_eq!(
            records,
            vec![UrlRecord {
                code: "lnk".to_string(),
                url: "https://linked.test".to_string(),
            }]
        );
    }

    #[cfg(unix)]
    #[test]
    fn skips_symlinked_directories() {
        use std::os::unix::fs::symlink;

        let temp = tempdir().unwrap();
        let urls = temp.path().join("urls");
        fs::create_dir_all(urls.join("realdir")).unwrap();
        fs::write(urls.join("a"), "https://a.test").unwrap();
        symlink(urls.join("realdir"), urls.join("dirlnk")).unwrap();

        let codes: Vec<String> = collect(&urls).into_iter().map(|r| r.code).collect();

        assert_eq!(codes, vec!["a"]);
    }

    #[cfg(unix)]
    #[test]
    fn errors_on_dangling_symlink() {
        use std::os::unix::fs::symlink;

        let temp = tempdir().unwrap();
        let urls = temp.path().join("urls");
        fs::create_dir(&urls).unwrap();
        fs::write(urls.join("a"), "https://a.test").unwrap();
        symlink(temp.path().join("missing"), urls.join("dangling")).unwrap();

        let result: Result<Vec<UrlRecord>, BuildError> =
            scan(&urls).and_then(|records| records.collect());

        assert!(matches!(result, Err(BuildError::ReadDirError { .. })));
    }

    #[test]
    fn errors_on_invalid_utf8() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("bad"), [0xff, 0xfe, b'\n']).unwrap();

        let mut records = scan(temp.path()).unwrap();

        assert!(matches!(
            records.next(),
            Some(Err(BuildError::ReadError { .. }))
        ));
    }
}
