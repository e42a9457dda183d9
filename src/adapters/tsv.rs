use crate::domain::ports::{RecordSource, SourceProvider};
use crate::utils::error::{RegistrarError, Result};
use csv::{ReaderBuilder, StringRecordsIntoIter};
use std::fs::File;
use std::path::{Path, PathBuf};

pub const STUDENTS_FILE: &str = "students.txt";
pub const INSTRUCTORS_FILE: &str = "instructors.txt";
pub const GRADES_FILE: &str = "grades.txt";
pub const MAJORS_FILE: &str = "majors.txt";

/// Line tokenizer over one tab-separated file.
///
/// Lazy and single-pass; every yielded record has exactly `expected` fields
/// or the whole load fails with the offending 1-based line number.
pub struct TsvSource {
    path: String,
    expected: usize,
    records: StringRecordsIntoIter<File>,
}

impl std::fmt::Debug for TsvSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TsvSource")
            .field("path", &self.path)
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}

impl TsvSource {
    /// Opens `path` expecting `expected` fields per line. With `header` set
    /// the first line is discarded silently.
    pub fn open(path: impl AsRef<Path>, expected: usize, header: bool) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let file =
            File::open(path.as_ref()).map_err(|source| RegistrarError::SourceUnavailable {
                path: path_str.clone(),
                source,
            })?;

        let reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(header)
            .quoting(false)
            // arity is checked here so the error can carry line numbers
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            path: path_str,
            expected,
            records: reader.into_records(),
        })
    }
}

impl RecordSource for TsvSource {
    fn field_count(&self) -> usize {
        self.expected
    }

    fn next_record(&mut self) -> Option<Result<Vec<String>>> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };

        if record.len() != self.expected {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Some(Err(RegistrarError::MalformedRecord {
                path: self.path.clone(),
                line,
                expected: self.expected,
                found: record.len(),
            }));
        }

        Some(Ok(record.iter().map(str::to_string).collect()))
    }
}

/// Source provider over a directory holding the four conventional files.
#[derive(Debug, Clone)]
pub struct TsvDirectory {
    base_dir: PathBuf,
    header: bool,
}

impl TsvDirectory {
    pub fn new(base_dir: impl Into<PathBuf>, header: bool) -> Self {
        Self {
            base_dir: base_dir.into(),
            header,
        }
    }

    fn source(&self, file: &str, expected: usize) -> Result<Box<dyn RecordSource>> {
        Ok(Box::new(TsvSource::open(
            self.base_dir.join(file),
            expected,
            self.header,
        )?))
    }
}

impl SourceProvider for TsvDirectory {
    fn students(&self) -> Result<Box<dyn RecordSource>> {
        self.source(STUDENTS_FILE, 3)
    }

    fn instructors(&self) -> Result<Box<dyn RecordSource>> {
        self.source(INSTRUCTORS_FILE, 3)
    }

    fn grades(&self) -> Result<Box<dyn RecordSource>> {
        self.source(GRADES_FILE, 4)
    }

    fn majors(&self) -> Result<Box<dyn RecordSource>> {
        self.source(MAJORS_FILE, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn tsv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn drain(source: &mut TsvSource) -> Result<Vec<Vec<String>>> {
        let mut records = Vec::new();
        while let Some(record) = source.next_record() {
            records.push(record?);
        }
        Ok(records)
    }

    #[test]
    fn test_tokenizes_fixed_arity_lines() {
        let file = tsv_file("1\tAlice\tCS\n2\tBev\tEE\n");
        let mut source = TsvSource::open(file.path(), 3, false).unwrap();

        let records = drain(&mut source).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], vec!["1", "Alice", "CS"]);
        assert_eq!(records[1], vec!["2", "Bev", "EE"]);
    }

    #[test]
    fn test_header_line_is_discarded() {
        let file = tsv_file("CWID\tName\tMajor\n1\tAlice\tCS\n");
        let mut source = TsvSource::open(file.path(), 3, true).unwrap();

        let records = drain(&mut source).unwrap();
        assert_eq!(records, vec![vec!["1", "Alice", "CS"]]);
    }

    #[test]
    fn test_malformed_line_reports_one_based_line_number() {
        let file = tsv_file("1\tAlice\tCS\n2\tBev\n3\tCarol\tME\n");
        let mut source = TsvSource::open(file.path(), 3, false).unwrap();

        assert!(source.next_record().unwrap().is_ok());
        let err = source.next_record().unwrap().unwrap_err();
        match err {
            RegistrarError::MalformedRecord {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_too_many_fields_is_malformed_too() {
        let file = tsv_file("1\tAlice\tCS\textra\n");
        let mut source = TsvSource::open(file.path(), 3, false).unwrap();

        let err = source.next_record().unwrap().unwrap_err();
        assert!(matches!(
            err,
            RegistrarError::MalformedRecord {
                line: 1,
                found: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let err = TsvSource::open("/nonexistent/students.txt", 3, false).unwrap_err();
        match err {
            RegistrarError::SourceUnavailable { path, .. } => {
                assert!(path.contains("students.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
