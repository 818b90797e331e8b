
use std::collections::{BTreeSet, HashSet};
use ndarray::Array2;
use crate::error::{AnalysisError, Result};


/// Construct an adjacency matrix from a list of edges.
///
/// Vertices are ordered by their natural ordering (alphabetical for strings,
/// ascending for numbers), row and column `i` of the matrix belong to vertex `i`
/// of the returned list. Every edge is set in both directions; a self edge sets
/// the diagonal. Repeated edges have no additional effect.
///
/// ```
/// let (trix, vertices) = doc_arrays::adjacency_matrix_from_edges(&[("a", "b"), ("b", "c")]).unwrap();
/// assert_eq!(vertices, vec!["a", "b", "c"]);
/// assert_eq!(trix, ndarray::array![[0u8, 1, 0], [1, 0, 1], [0, 1, 0]]);
/// ```
pub fn adjacency_matrix_from_edges<T: Ord + Clone>(pairs: &[(T, T)]) -> Result<(Array2<u8>, Vec<T>)> {

    if pairs.is_empty() {
        return Err(AnalysisError::EmptyInput("edge list is empty"));
    }

    // a sorted set gives the vertex order, lookups are then binary searches
    let vertices: Vec<T> = pairs
    .iter()
    .flat_map(|(u, v)| [u, v])
    .collect::<BTreeSet<&T>>()
    .into_iter()
    .cloned()
    .collect();

    let index_of = |vertex: &T| -> Result<usize> {
        vertices
        .binary_search(vertex)
        .map_err(|_| AnalysisError::Parse("edge endpoint missing from vertex list".to_string()))
    };

    let n = vertices.len();
    let mut trix: Array2<u8> = Array2::zeros((n, n));
    for (u, v) in pairs {
        let i = index_of(u)?;
        let j = index_of(v)?;
        trix[[i, j]] = 1;
        trix[[j, i]] = 1;
    }

    Ok((trix, vertices))
}

/// Construct a co-mention adjacency matrix given lists of mentions.
///
/// Documents `i != j` are connected when they mention at least one common handle.
/// Documents keep their input order and the diagonal stays zero.
pub fn mentions_adjacency_matrix<S: AsRef<str>>(list_of_mentions: &[Vec<S>]) -> Array2<u8> {

    let handle_sets: Vec<HashSet<&str>> = list_of_mentions
    .iter()
    .map(|mentions| mentions.iter().map(|m| m.as_ref()).collect())
    .collect();

    let n = handle_sets.len();
    let mut trix: Array2<u8> = Array2::zeros((n, n));
    for i in 0..n {
        for j in i+1..n {
            if !handle_sets[i].is_disjoint(&handle_sets[j]) {
                trix[[i, j]] = 1;
                trix[[j, i]] = 1;
            }
        }
    }
    trix
}


#[cfg(test)]
mod tests {

    use ndarray::array;
    use super::*;

    #[test]
    fn edges_test() {
        let (trix, vertices) = adjacency_matrix_from_edges(&[("a", "b"), ("b", "c")]).unwrap();
        assert_eq!(vertices, vec!["a", "b", "c"]);
        assert_eq!(trix, array![[0u8, 1, 0], [1, 0, 1], [0, 1, 0]]);
    }

    #[test]
    fn edges_order_independent() {
        let (trix_a, vertices_a) = adjacency_matrix_from_edges(&[("c", "b"), ("b", "a")]).unwrap();
        let (trix_b, vertices_b) = adjacency_matrix_from_edges(&[("a", "b"), ("b", "c"), ("c", "b")]).unwrap();
        assert_eq!(vertices_a, vertices_b);
        assert_eq!(trix_a, trix_b);
    }

    #[test]
    fn edges_numeric_vertices() {
        let (trix, vertices) = adjacency_matrix_from_edges(&[(10, 2), (2, 33), (33, 10)]).unwrap();
        assert_eq!(vertices, vec![2, 10, 33]);
        assert_eq!(trix, array![[0u8, 1, 1], [1, 0, 1], [1, 1, 0]]);
    }

    #[test]
    fn edges_symmetric_and_exact() {
        let pairs = [("x", "y"), ("y", "z"), ("w", "x"), ("z", "x")];
        let (trix, vertices) = adjacency_matrix_from_edges(&pairs).unwrap();
        assert_eq!(trix, trix.t());
        for (i, u) in vertices.iter().enumerate() {
            for (j, v) in vertices.iter().enumerate() {
                let listed = pairs.iter().any(|(a, b)| (a == u && b == v) || (a == v && b == u));
                assert_eq!(trix[[i, j]] == 1, listed, "mismatch at {} {}", u, v);
            }
        }
    }

    #[test]
    fn edges_self_loop() {
        let (trix, vertices) = adjacency_matrix_from_edges(&[("a", "a"), ("a", "b")]).unwrap();
        assert_eq!(vertices, vec!["a", "b"]);
        assert_eq!(trix, array![[1u8, 1], [1, 0]]);
    }

    #[test]
    fn edges_empty() {
        let pairs: [(&str, &str); 0] = [];
        assert!(matches!(adjacency_matrix_from_edges(&pairs), Err(AnalysisError::EmptyInput(_))));
    }

    #[test]
    fn mentions_test() {
        let mentions = vec![
            vec!["@nytimes"],
            vec!["@nytimes", "@washtimes"],
            vec!["@foxandfriends"],
            vec!["@nytimes"],
            vec!["@washtimes", "@foxandfriends"],
        ];
        let golden = array![
            [0u8, 1, 0, 1, 0],
            [1, 0, 0, 1, 1],
            [0, 0, 0, 0, 1],
            [1, 1, 0, 0, 0],
            [0, 1, 1, 0, 0],
        ];
        assert_eq!(mentions_adjacency_matrix(&mentions), golden);
    }

    #[test]
    fn mentions_empty_documents() {
        let mentions: Vec<Vec<String>> = vec![vec![], vec![], vec!["@a".to_string()]];
        let trix = mentions_adjacency_matrix(&mentions);
        assert_eq!(trix, Array2::<u8>::zeros((3, 3)));
        assert_eq!(mentions_adjacency_matrix::<String>(&[]).dim(), (0, 0));
    }
}
