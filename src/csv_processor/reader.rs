use crate::utils::{MbtiDataError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Header-aware CSV reader. Rows may be shorter or longer than the header.
pub struct CsvStreamReader {
    path: PathBuf,
    headers: Option<StringRecord>,
}

impl CsvStreamReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            headers: None,
        }
    }

    fn open(&self) -> Result<csv::Reader<File>> {
        if !self.path.exists() {
            return Err(MbtiDataError::FileNotFound(self.path.display().to_string()));
        }
        let file = File::open(&self.path)?;
        Ok(ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file))
    }

    pub fn read_headers(&mut self) -> Result<StringRecord> {
        let mut reader = self.open()?;
        let headers = reader.headers()?.clone();
        self.headers = Some(headers.clone());
        Ok(headers)
    }

    pub fn headers(&self) -> Option<&StringRecord> {
        self.headers.as_ref()
    }

    /// Yields data rows in file order; blank lines are skipped by the parser.
    pub fn iter_records(&mut self) -> Result<CsvRecordIterator> {
        let mut reader = self.open()?;
        self.headers = Some(reader.headers()?.clone());
        Ok(CsvRecordIterator {
            reader,
            current_index: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub struct CsvRecordIterator {
    reader: csv::Reader<File>,
    current_index: usize,
}

impl Iterator for CsvRecordIterator {
    type Item = Result<(usize, StringRecord)>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.records().next() {
            Some(Ok(record)) => {
                let index = self.current_index;
                self.current_index += 1;
                Some(Ok((index, record)))
            }
            Some(Err(e)) => Some(Err(MbtiDataError::CsvError(e))),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_ragged_rows_after_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        std::fs::write(&path, "a,b,c\n1,2,3\n4\n\n5,6,7,8\n").unwrap();

        let mut reader = CsvStreamReader::new(&path);
        let headers = reader.read_headers().unwrap();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);

        let rows: Vec<Vec<String>> = reader
            .iter_records()
            .unwrap()
            .map(|r| r.unwrap().1.iter().map(String::from).collect())
            .collect();
        assert_eq!(
            rows,
            vec![
                vec!["1", "2", "3"],
                vec!["4"],
                vec!["5", "6", "7", "8"],
            ]
        );
    }

    #[test]
    fn missing_file_is_not_found() {
        let mut reader = CsvStreamReader::new("no/such/file.csv");
        assert!(matches!(
            reader.read_headers(),
            Err(MbtiDataError::FileNotFound(_))
        ));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.csv");
        std::fs::write(&path, b"name\n\xe9t\xe9\n").unwrap();

        let mut reader = CsvStreamReader::new(&path);
        let result: Result<Vec<_>> = reader.iter_records().unwrap().collect();
        assert!(matches!(result, Err(MbtiDataError::CsvError(_))));
    }
}
