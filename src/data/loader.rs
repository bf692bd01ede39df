use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use super::model::{Table, TableError};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a tabular file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` – comma-separated, header row naming the columns
/// * `.tsv` – tab-separated, same layout
pub fn load_table(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let delimiter = match ext.as_str() {
        "csv" => b',',
        "tsv" => b'\t',
        other => return Err(TableError::UnsupportedFileType(other.to_string()).into()),
    };

    read_delimited(path, delimiter)
}

fn read_delimited(path: &Path, delimiter: u8) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("reading header row of {}", path.display()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("row {row_no} of {}", path.display()))?;
        for (col_idx, field) in record.iter().enumerate() {
            columns[col_idx].push(field.to_string());
        }
    }

    let table = Table::new(path.to_path_buf(), headers, columns);
    debug!(
        "loaded {} ({} rows, {} columns)",
        path.display(),
        table.len(),
        table.headers().len()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_csv_with_header() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "run.csv", "epoch,loss\n1,0.9\n2,0.5\n");

        let table = load_table(&path).unwrap();
        assert_eq!(table.label(), "run");
        assert_eq!(table.headers(), ["epoch", "loss"]);
        assert_eq!(table.column("loss").unwrap(), ["0.9", "0.5"]);
    }

    #[test]
    fn loads_tsv_with_tab_delimiter() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "run.tsv", "epoch\tloss\n1\t0.9\n");

        let table = load_table(&path).unwrap();
        assert_eq!(table.column("epoch").unwrap(), ["1"]);
    }

    #[test]
    fn unsupported_extension_names_the_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "run.parquet", "epoch,loss\n1,0.9\n");

        let err = load_table(&path).unwrap_err();
        assert!(err.to_string().contains(".parquet"), "{err}");
    }

    #[test]
    fn ragged_row_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "run.csv", "epoch,loss\n1,0.9\n2\n");

        assert!(load_table(&path).is_err());
    }
}
