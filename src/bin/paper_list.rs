//! Paper list formatter: groups a CSV export (one or more rows per paper)
//! into records and prints them as plain text or an HTML ordered list.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "paper_list",
    about = "Generate HTML or plain text output of paper listings from a CSV file"
)]
struct Args {
    /// Path to the CSV file containing the paper data
    file_path: PathBuf,

    /// Output format
    #[arg(long = "stdout", value_enum, default_value_t = OutputFormat::Text)]
    stdout: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Html,
    Text,
}

// ---------------------------------------------------------------------------
// Paper records
// ---------------------------------------------------------------------------

/// One grouped paper entry assembled from one or more source rows.
#[derive(Debug, Clone, PartialEq)]
struct Paper {
    id: String,
    title: String,
    authors: Vec<String>,
}

/// Papers keyed by identifier, preserving first-seen insertion order.
/// A duplicate identifier replaces the stored record in place.
#[derive(Debug, Default)]
struct PaperSet {
    papers: Vec<Paper>,
    index: HashMap<String, usize>,
}

impl PaperSet {
    fn insert(&mut self, paper: Paper) {
        match self.index.get(&paper.id) {
            Some(&pos) => self.papers[pos] = paper,
            None => {
                self.index.insert(paper.id.clone(), self.papers.len());
                self.papers.push(paper);
            }
        }
    }

    fn iter(&self) -> impl Iterator<Item = &Paper> {
        self.papers.iter()
    }

    fn len(&self) -> usize {
        self.papers.len()
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// `"first last (affiliation)"` from fields 2, 3, and 4 of a row.
fn author_entry(record: &csv::StringRecord, row: usize) -> Result<String> {
    let field = |i: usize| {
        record
            .get(i)
            .with_context(|| format!("row {row}: missing field {i}"))
    };
    Ok(format!("{} {} ({})", field(2)?, field(3)?, field(4)?))
}

fn extract_papers<R: Read>(input: R) -> Result<PaperSet> {
    // The first row is always treated as a header and skipped. `flexible`
    // lets short rows through the parser so they fail at field access
    // instead of being dropped by a record-length check.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);

    let mut papers = PaperSet::default();
    let mut current: Option<Paper> = None;

    for (row, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("reading row {row}"))?;
        let id = record
            .get(0)
            .with_context(|| format!("row {row}: missing field 0"))?
            .trim();

        if !id.is_empty() {
            if let Some(done) = current.take() {
                papers.insert(done);
            }
            let title = record
                .get(1)
                .with_context(|| format!("row {row}: missing field 1"))?
                .trim_matches('"')
                .to_string();
            current = Some(Paper {
                id: id.to_string(),
                title,
                authors: vec![author_entry(&record, row)?],
            });
        } else {
            // Continuation row: one more author for the open record. A
            // continuation before any record is dropped, but its fields are
            // still accessed so a short row stays fatal.
            let author = author_entry(&record, row)?;
            if let Some(open) = current.as_mut() {
                open.authors.push(author);
            }
        }
    }

    if let Some(done) = current.take() {
        papers.insert(done);
    }
    Ok(papers)
}

fn extract_papers_from_path(path: &Path) -> Result<PaperSet> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    extract_papers(file)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn render_text(papers: &PaperSet) -> String {
    let mut out = String::new();
    for paper in papers.iter() {
        let _ = writeln!(out, "{}: {}", paper.id, paper.title);
        for author in &paper.authors {
            let _ = writeln!(out, "  - {author}");
        }
        let _ = writeln!(out);
    }
    out
}

/// One `<ol>` document; titles and authors are emitted verbatim, unescaped.
fn render_html(papers: &PaperSet) -> String {
    let mut out = String::new();
    out.push_str("<html><body><ol>\n");
    for paper in papers.iter() {
        let _ = writeln!(out, "<li><strong>{}</strong><br>", paper.title);
        let _ = writeln!(out, "{}", paper.authors.join(", "));
        let _ = writeln!(out, "<p></p></li>");
    }
    out.push_str("</ol></body></html>\n");
    out
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let papers = extract_papers_from_path(&args.file_path)?;
    log::debug!("grouped {} paper(s)", papers.len());

    match args.stdout {
        OutputFormat::Html => print!("{}", render_html(&papers)),
        OutputFormat::Text => print!("{}", render_text(&papers)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = "\
id,title,first,last,affiliation
1,\"Title A\",Jane,Doe,MIT
,,John,Smith,CMU
2,\"Title B\",Ann,Lee,UW
";

    #[test]
    fn groups_continuation_rows_under_the_open_record() {
        let papers = extract_papers(SAMPLE.as_bytes()).unwrap();
        assert_eq!(papers.len(), 2);

        let first = papers.iter().next().unwrap();
        assert_eq!(first.id, "1");
        assert_eq!(first.title, "Title A");
        assert_eq!(first.authors, ["Jane Doe (MIT)", "John Smith (CMU)"]);

        let second = papers.iter().nth(1).unwrap();
        assert_eq!(second.id, "2");
        assert_eq!(second.title, "Title B");
        assert_eq!(second.authors, ["Ann Lee (UW)"]);
    }

    #[test]
    fn text_output_matches_the_grouped_listing() {
        let papers = extract_papers(SAMPLE.as_bytes()).unwrap();
        let expected = "\
1: Title A
  - Jane Doe (MIT)
  - John Smith (CMU)

2: Title B
  - Ann Lee (UW)

";
        assert_eq!(render_text(&papers), expected);
    }

    #[test]
    fn html_output_is_one_ordered_list() {
        let papers = extract_papers(SAMPLE.as_bytes()).unwrap();
        let html = render_html(&papers);

        assert_eq!(html.matches("<ol>").count(), 1);
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("<li><strong>Title A</strong><br>"));
        assert!(html.contains("Jane Doe (MIT), John Smith (CMU)"));
        assert!(html.contains("<li><strong>Title B</strong><br>"));
        assert!(html.contains("Ann Lee (UW)"));
        assert!(html.starts_with("<html><body><ol>"));
        assert!(html.trim_end().ends_with("</ol></body></html>"));
    }

    #[test]
    fn embedded_quotes_around_the_title_are_stripped() {
        let csv = "id,title,first,last,affiliation\n1,\"\"\"Quoted\"\"\",Jane,Doe,MIT\n";
        let papers = extract_papers(csv.as_bytes()).unwrap();
        assert_eq!(papers.iter().next().unwrap().title, "Quoted");
    }

    #[test]
    fn short_row_fails_at_field_access() {
        let csv = "id,title,first,last,affiliation\n1,\"Title A\",Jane\n";
        let err = extract_papers(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing field 3"), "{err}");
    }

    #[test]
    fn short_continuation_row_is_also_fatal() {
        let csv = "id,title,first,last,affiliation\n1,\"Title A\",Jane,Doe,MIT\n,,John\n";
        let err = extract_papers(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing field 3"), "{err}");
    }

    #[test]
    fn duplicate_identifier_replaces_the_record_in_place() {
        let csv = "\
id,title,first,last,affiliation
1,\"Old\",Jane,Doe,MIT
2,\"Other\",Ann,Lee,UW
1,\"New\",John,Smith,CMU
";
        let papers = extract_papers(csv.as_bytes()).unwrap();
        assert_eq!(papers.len(), 2);

        let first = papers.iter().next().unwrap();
        assert_eq!(first.id, "1");
        assert_eq!(first.title, "New");
        assert_eq!(first.authors, ["John Smith (CMU)"]);
        assert_eq!(papers.iter().nth(1).unwrap().id, "2");
    }

    #[test]
    fn continuation_before_any_record_is_dropped() {
        let csv = "id,title,first,last,affiliation\n,,John,Smith,CMU\n1,\"Title A\",Jane,Doe,MIT\n";
        let papers = extract_papers(csv.as_bytes()).unwrap();
        assert_eq!(papers.len(), 1);
        assert_eq!(papers.iter().next().unwrap().authors, ["Jane Doe (MIT)"]);
    }

    #[test]
    fn reads_from_a_file_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("papers.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let papers = extract_papers_from_path(&path).unwrap();
        assert_eq!(papers.len(), 2);
    }
}
