
use std::collections::{BTreeSet, HashSet};
use ndarray::prelude::*;
use crate::error::{AnalysisError, Result};
use crate::tokenize::tokenize;


/// Euclidean norm of `a - b`.
pub fn euclidean_distance(a: ArrayView1<f64>, b: ArrayView1<f64>) -> Result<f64> {
    if a.len() != b.len() {
        return Err(AnalysisError::DimensionMismatch { expected: a.len(), found: b.len() });
    }
    let diff = &a - &b;
    Ok(diff.mapv(|x| x.powi(2)).sum().sqrt())
}

/// Calculate a NxN distance matrix given a document-term matrix with N rows.
///
/// Cell (i, j) is the Euclidean distance between rows i and j. Only the upper
/// triangle is computed and mirrored, so the result is exactly symmetric and
/// its diagonal is exactly zero.
pub fn distance_matrix(document_term_matrix: ArrayView2<f64>) -> Result<Array2<f64>> {

    let n = document_term_matrix.nrows();
    if n == 0 {
        return Err(AnalysisError::EmptyInput("document-term matrix has no rows"));
    }

    let mut trix: Array2<f64> = Array2::zeros((n, n));
    for i in 0..n {
        let x = document_term_matrix.row(i);
        for j in i+1..n {
            let d = euclidean_distance(x, document_term_matrix.row(j))?;
            trix[[i, j]] = d;
            trix[[j, i]] = d;
        }
    }
    Ok(trix)
}

// |x && y| / |x || y| over nonzero entries, two empty rows are identical
fn jaccard_rows(x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    let mut inter = 0usize;
    let mut uni = 0usize;
    ndarray::Zip::from(&x).and(&y).for_each(|a, b| {
        let (a, b) = (*a != 0.0, *b != 0.0);
        if a && b { inter += 1; }
        if a || b { uni += 1; }
    });
    if uni == 0 { 1.0 } else { inter as f64 / uni as f64 }
}

/// Calculate a NxN Jaccard similarity matrix given a document-term matrix with N rows.
///
/// Each row is read as a set of present terms (nonzero counts). A pair of all-zero
/// rows has an empty union and scores 1.0.
pub fn jaccard_similarity_matrix(document_term_matrix: ArrayView2<f64>) -> Result<Array2<f64>> {

    let n = document_term_matrix.nrows();
    if n == 0 {
        return Err(AnalysisError::EmptyInput("document-term matrix has no rows"));
    }

    let mut trix: Array2<f64> = Array2::zeros((n, n));
    for i in 0..n {
        let x = document_term_matrix.row(i);
        for j in i..n {
            let s = jaccard_rows(x, document_term_matrix.row(j));
            trix[[i, j]] = s;
            trix[[j, i]] = s;
        }
    }
    Ok(trix)
}

/// Jaccard similarity between the case-folded word sets of two texts.
///
/// Two texts without any word are treated as identical and score 1.0.
pub fn jaccard_similarity(text1: &str, text2: &str) -> f64 {
    let t1: HashSet<String> = tokenize(text1, true).into_iter().collect();
    let t2: HashSet<String> = tokenize(text2, true).into_iter().collect();

    let uni = t1.union(&t2).count();
    if uni == 0 {
        return 1.0;
    }
    t1.intersection(&t2).count() as f64 / uni as f64
}

/// Case-folded words appearing in both texts.
pub fn shared_words(text1: &str, text2: &str) -> BTreeSet<String> {
    let t1: BTreeSet<String> = tokenize(text1, true).into_iter().collect();
    let t2: BTreeSet<String> = tokenize(text2, true).into_iter().collect();
    t1.intersection(&t2).cloned().collect()
}

/// Divide every row by its length, the sum of its counts.
///
/// A row (0, 1, 0, 1) becomes (0, 0.5, 0, 0.5). A row summing to zero has no length
/// and is reported as `UndefinedRatio`.
pub fn normalize_document_term_matrix(document_term_matrix: ArrayView2<f64>) -> Result<Array2<f64>> {

    let mut normalized = document_term_matrix.to_owned();
    for mut row in normalized.axis_iter_mut(Axis(0)) {
        let length = row.sum();
        if length == 0.0 {
            return Err(AnalysisError::UndefinedRatio("row sums to zero"));
        }
        row.mapv_inplace(|a| a / length);
    }
    Ok(normalized)
}
