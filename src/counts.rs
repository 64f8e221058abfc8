use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Citation count per country name, as read from the input file.
/// Names must match the dataset exactly; no normalization happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryCountTable {
    counts: HashMap<String, i64>,
}

impl CountryCountTable {
    /// Count for `name`, or `None` if the input never mentioned it
    pub fn get(&self, name: &str) -> Option<i64> {
        self.counts.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (name, count) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.counts.iter().map(|(name, &count)| (name.as_str(), count))
    }
}

impl FromIterator<(String, i64)> for CountryCountTable {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Load the count table from a text file of `Name,Count` lines
pub fn load_counts(path: &Path) -> Result<CountryCountTable> {
    let file = File::open(path).map_err(|source| Error::InputIo {
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_counts(BufReader::new(file)).map_err(|e| match e {
        Error::InputRead(source) => Error::InputIo {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    info!("Loaded {} country counts from {:?}", table.len(), path);
    Ok(table)
}

/// Parse `Name,Count` lines. Lines starting with `#` are comments.
/// Any other malformed line, including one that is not UTF-8, fails the whole parse.
pub fn parse_counts<R: BufRead>(reader: R) -> Result<CountryCountTable> {
    let mut counts = HashMap::new();

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let mut raw = raw.map_err(Error::InputRead)?;
        let line_no = idx + 1;

        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let line = String::from_utf8(raw).map_err(|e| Error::InputParse {
            line_no,
            line: String::from_utf8_lossy(e.as_bytes()).into_owned(),
            reason: "line is not valid UTF-8".to_string(),
        })?;

        if line.starts_with('#') {
            continue;
        }

        let (name, count) = parse_line(&line, line_no)?;
        if let Some(previous) = counts.insert(name, count) {
            debug!("line {}: replaces earlier count {}", line_no, previous);
        }
    }

    Ok(CountryCountTable { counts })
}

fn parse_line(line: &str, line_no: usize) -> Result<(String, i64)> {
    let malformed = |reason: &str| Error::InputParse {
        line_no,
        line: line.to_string(),
        reason: reason.to_string(),
    };

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 2 {
        return Err(malformed("expected exactly two comma-separated fields"));
    }

    let name = fields[0].trim();
    let count = fields[1]
        .trim()
        .parse::<i64>()
        .map_err(|_| malformed("count is not an integer"))?;

    Ok((name.to_string(), count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(text: &str) -> Result<CountryCountTable> {
        parse_counts(text.as_bytes())
    }

    #[test]
    fn test_comments_skipped() {
        let table = parse("# comment\nFrance,60\nGermany,8\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("France"), Some(60));
        assert_eq!(table.get("Germany"), Some(8));
        assert_eq!(table.get("# comment"), None);
    }

    #[test]
    fn test_names_and_counts_trimmed() {
        let table = parse("  United States of America , 12 \r\n").unwrap();
        assert_eq!(table.get("United States of America"), Some(12));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let table = parse("Chile,3\nChile,40\n").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Chile"), Some(40));
    }

    #[test]
    fn test_empty_input() {
        let table = parse("").unwrap();
        assert!(table.is_empty());

        let table = parse("# only a comment\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_non_integer_count() {
        let err = parse("France,60\nJapan,abc\n").unwrap_err();
        match err {
            Error::InputParse { line_no, line, .. } => {
                assert_eq!(line_no, 2);
                assert_eq!(line, "Japan,abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_field_count() {
        assert!(matches!(
            parse("Bosnia, and Herzegovina,4\n"),
            Err(Error::InputParse { line_no: 1, .. })
        ));
        assert!(matches!(parse("Peru\n"), Err(Error::InputParse { .. })));
        // Blank lines are not comments
        assert!(matches!(
            parse("Peru,1\n\nChile,2\n"),
            Err(Error::InputParse { line_no: 2, .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_names_the_line() {
        let err = parse_counts(&b"France,60\nS\xe3o Tom\xe9,3\n"[..]).unwrap_err();
        match err {
            Error::InputParse { line_no, line, reason } => {
                assert_eq!(line_no, 2);
                assert!(line.ends_with(",3"));
                assert!(reason.contains("UTF-8"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_in_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Chile,2\n\xff\xfe,1\n").unwrap();
        assert!(matches!(
            load_counts(file.path()),
            Err(Error::InputParse { line_no: 2, .. })
        ));
    }

    #[test]
    fn test_indented_hash_is_not_a_comment() {
        assert!(matches!(parse("  # x\n"), Err(Error::InputParse { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# header").unwrap();
        writeln!(file, "Brazil,51").unwrap();
        let table = load_counts(file.path()).unwrap();
        assert_eq!(table.get("Brazil"), Some(51));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        match load_counts(&path) {
            Err(Error::InputIo { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
