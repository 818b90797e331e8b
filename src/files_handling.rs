
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use ndarray::Array2;
use ndarray_npy::write_npy;
use tracing::debug;
use crate::error::{AnalysisError, Result};
use crate::similarity::shared_words;


/// A document-term matrix together with its row labels and column terms.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentTerms {
    pub matrix: Array2<f64>,
    pub labels: Vec<String>,
    pub terms: Vec<String>
}

// anything that can hand over a parsed document-term matrix
pub trait DocumentTermSource {
    fn load(&self) -> Result<DocumentTerms>;
}

impl DocumentTermSource for DocumentTerms {
    fn load(&self) -> Result<DocumentTerms> {
        Ok(self.clone())
    }
}

/// Documents named `music12` and `music3` share the label `music`.
pub fn label_from_document_name(document_name: &str) -> String {
    document_name.trim_end_matches(|c: char| c.is_ascii_digit()).to_owned()
}

/// Reads a CSV whose header row holds the terms (after an index column) and
/// whose records hold a document name followed by its counts.
pub struct CsvDocumentTerms {
    path: PathBuf
}

impl CsvDocumentTerms {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl DocumentTermSource for CsvDocumentTerms {
    fn load(&self) -> Result<DocumentTerms> {

        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(&self.path)?;
        let terms: Vec<String> = rdr.headers()?.iter().skip(1).map(|t| t.to_owned()).collect();

        let mut labels: Vec<String> = Vec::new();
        let mut values: Vec<f64> = Vec::new();
        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            let document_name = record.get(0).ok_or_else(|| AnalysisError::Parse(format!("row {} has no document name", row)))?;
            if record.len() != terms.len() + 1 {
                return Err(AnalysisError::DimensionMismatch { expected: terms.len() + 1, found: record.len() });
            }

            for cell in record.iter().skip(1) {
                let count = cell.trim().parse::<f64>()
                .map_err(|e| AnalysisError::Parse(format!("row {} ({}): {}", row, document_name, e)))?;
                values.push(count);
            }
            labels.push(label_from_document_name(document_name));
        }

        let matrix = Array2::from_shape_vec((labels.len(), terms.len()), values)
        .map_err(|e| AnalysisError::Parse(e.to_string()))?;
        debug!(rows = matrix.nrows(), cols = matrix.ncols(), path = %self.path.display(), "loaded document-term matrix");

        Ok(DocumentTerms { matrix, labels, terms })
    }
}


pub fn read_lines<P: AsRef<Path>>(file_path: P) -> Result<Vec<String>> {
    let f = BufReader::new(File::open(file_path)?);
    let lines = f.lines().collect::<std::io::Result<Vec<String>>>()?;
    Ok(lines)
}

/// Read a text file fully, its lines joined by a single space.
pub fn read_text_file<P: AsRef<Path>>(file_path: P) -> Result<String> {
    Ok(read_lines(file_path)?.join(" "))
}

/// Words appearing in both files, case folded.
pub fn shared_words_from_filenames<P: AsRef<Path>>(filename1: P, filename2: P) -> Result<BTreeSet<String>> {
    let content_1 = read_text_file(filename1)?;
    let content_2 = read_text_file(filename2)?;
    Ok(shared_words(&content_1, &content_2))
}


pub fn save_output<S: SaveFile>(output_dir: &str, file_name: &str, item: &S) -> Result<()> {

    // create output folder
    fs::create_dir_all(output_dir)?;
    item.save_file(output_dir, file_name)
}

pub trait SaveFile {
    fn save_file(&self, output_dir: &str, file_name: &str) -> Result<()>;
}

impl SaveFile for Array2<f64> {
    fn save_file(&self, output_dir: &str, file_name: &str) -> Result<()> {
        let out = Path::new(output_dir).join(format!("{}.npy", file_name));
        write_npy(out, self)?;
        Ok(())
    }
}

impl SaveFile for Array2<u8> {
    fn save_file(&self, output_dir: &str, file_name: &str) -> Result<()> {
        let out = Path::new(output_dir).join(format!("{}.npy", file_name));
        write_npy(out, self)?;
        Ok(())
    }
}

impl SaveFile for Vec<String> {
    fn save_file(&self, output_dir: &str, file_name: &str) -> Result<()> {
        let out = Path::new(output_dir).join(format!("{}.json", file_name));
        let f = BufWriter::new(File::create(out)?);
        serde_json::to_writer(f, self)?;
        Ok(())
    }
}
