//! Domain list loading.

use std::path::Path;

use csv::ReaderBuilder;
use log::{debug, info};

use crate::config::DOMAIN_COLUMN;
use crate::error_handling::InputError;

/// Reads the domain list at `path`.
///
/// A CSV whose header row contains a `domain` column (in any position) is
/// read by that column. Anything else is treated as plain text with one
/// domain per line, taking the first comma-separated field. Values are
/// trimmed and blanks dropped; order is preserved and duplicates are kept.
///
/// # Errors
///
/// Returns `InputError` if the file is missing, unreadable, malformed, or
/// yields no domains.
pub fn load_domains(path: &Path) -> Result<Vec<String>, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let domains = match domain_column_index(&content) {
        Some(column) => {
            debug!("Reading '{DOMAIN_COLUMN}' column {column} of {}", path.display());
            read_csv_column(&content, column).map_err(|source| InputError::Malformed {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => {
            debug!("No '{DOMAIN_COLUMN}' header in {}, reading as plain text", path.display());
            read_plain_lines(&content)
        }
    };

    if domains.is_empty() {
        return Err(InputError::Empty(path.to_path_buf()));
    }
    info!("Loaded {} domains from {}", domains.len(), path.display());
    Ok(domains)
}

/// Position of the `domain` column if the first line is a header holding it.
///
/// A first line with a dotted field is a data row of a headerless list,
/// even if another of its fields reads `domain`.
fn domain_column_index(content: &str) -> Option<usize> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());
    let headers = reader.headers().ok()?;
    if headers.iter().any(|h| h.contains('.')) {
        return None;
    }
    headers
        .iter()
        .position(|h| h.trim().trim_start_matches('\u{feff}').eq_ignore_ascii_case(DOMAIN_COLUMN))
}

fn read_csv_column(content: &str, column: usize) -> Result<Vec<String>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut domains = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(value) = record.get(column).map(str::trim) {
            if !value.is_empty() {
                domains.push(value.to_string());
            }
        }
    }
    Ok(domains)
}

/// First comma-separated field of every non-blank line.
pub(crate) fn read_plain_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split(',').next())
        .map(str::trim)
        .filter(|domain| !domain.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_csv_domain_column_any_position() {
        let file = file_with("rank,domain,category\n1, a.example ,x\n2,b.example,y\n3,,z\n");
        let domains = load_domains(file.path()).expect("load");
        assert_eq!(domains, vec!["a.example", "b.example"]);
    }

    #[test]
    fn test_plain_text_first_field() {
        let file = file_with("a.example, some note\n\n  b.example  \n# comment\nc.example,\n");
        let domains = load_domains(file.path()).expect("load");
        assert_eq!(domains, vec!["a.example", "b.example", "c.example"]);
    }

    #[test]
    fn test_headerless_list_with_domain_in_later_field() {
        let file = file_with("example.com,domain\nfoo.com,bar\nbaz.com\n");
        let domains = load_domains(file.path()).expect("load");
        assert_eq!(domains, vec!["example.com", "foo.com", "baz.com"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let file = file_with("domain\na.example\na.example\n");
        assert_eq!(load_domains(file.path()).expect("load").len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = load_domains(Path::new("/nonexistent/domains.csv")).expect_err("missing");
        assert!(matches!(err, InputError::NotFound(_)));
    }

    #[test]
    fn test_header_only_is_empty() {
        let file = file_with("domain\n");
        let err = load_domains(file.path()).expect_err("empty");
        assert!(matches!(err, InputError::Empty(_)));
    }

    #[test]
    fn test_blank_file_is_empty() {
        let file = file_with("\n   \n");
        assert!(matches!(
            load_domains(file.path()).expect_err("empty"),
            InputError::Empty(_)
        ));
    }
}
