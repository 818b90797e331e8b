
use ndarray::prelude::*;
use ndarray_stats::{errors::MinMaxError, QuantileExt};
use crate::error::{AnalysisError, Result};
use crate::similarity::euclidean_distance;


fn check_shapes<S>(document_term_matrix: ArrayView2<f64>, labels: &[S]) -> Result<()> {
    if document_term_matrix.nrows() == 0 {
        return Err(AnalysisError::EmptyInput("document-term matrix has no rows"));
    }
    if labels.len() != document_term_matrix.nrows() {
        return Err(AnalysisError::DimensionMismatch { expected: document_term_matrix.nrows(), found: labels.len() });
    }
    Ok(())
}

/// Return the predicted label for `new_vector`.
///
/// The label of the row closest to `new_vector` in Euclidean distance wins.
/// When several rows are equally close, the one with the lowest index is picked.
pub fn nearest_neighbors_classifier<'a, S: AsRef<str>>(
    new_vector: ArrayView1<f64>,
    document_term_matrix: ArrayView2<f64>,
    labels: &'a [S]) -> Result<&'a str> {

        check_shapes(document_term_matrix, labels)?;
        if new_vector.len() != document_term_matrix.ncols() {
            return Err(AnalysisError::DimensionMismatch { expected: document_term_matrix.ncols(), found: new_vector.len() });
        }

        let distances: Array1<f64> = document_term_matrix
        .axis_iter(Axis(0))
        .map(|row| euclidean_distance(row, new_vector))
        .collect::<Result<Vec<f64>>>()?
        .into();

        // argmin keeps the first minimum it meets
        let nearest = distances.argmin().map_err(|e| match e {
            MinMaxError::EmptyInput => AnalysisError::EmptyInput("no distances to compare"),
            MinMaxError::UndefinedOrder => AnalysisError::UndefinedRatio("distance is not a number"),
        })?;

        Ok(labels[nearest].as_ref())
}

/// Share of rows whose label is recovered when each row is classified against all the others.
pub fn leave_one_out_accuracy<S: AsRef<str>>(document_term_matrix: ArrayView2<f64>, labels: &[S]) -> Result<f64> {

    check_shapes(document_term_matrix, labels)?;
    let n = document_term_matrix.nrows();
    if n < 2 {
        return Err(AnalysisError::EmptyInput("need at least two rows to hold one out"));
    }

    let mut correct = 0usize;
    for i in 0..n {
        let others: Vec<usize> = (0..n).filter(|j| *j != i).collect();
        let reference = document_term_matrix.select(Axis(0), &others);
        let reference_labels: Vec<&str> = others.iter().map(|j| labels[*j].as_ref()).collect();

        let predicted = nearest_neighbors_classifier(document_term_matrix.row(i), reference.view(), &reference_labels)?;
        if predicted == labels[i].as_ref() {
            correct += 1;
        }
    }
    Ok(correct as f64 / n as f64)
}
