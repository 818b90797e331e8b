
mod error;
mod tokenize;
mod frequency;
mod similarity;
mod adjacency;
mod classify;
mod pipeline;
pub mod config;
pub mod files_handling;

pub use error::{AnalysisError, Result};
pub use tokenize::{tokenize, extract_hashtags, extract_mentions, Tokenizer, WordTokenizer};
pub use frequency::{word_frequencies, lexical_density, argmax, most_common};
pub use similarity::{euclidean_distance, distance_matrix, jaccard_similarity_matrix, jaccard_similarity, shared_words, normalize_document_term_matrix};
pub use adjacency::{adjacency_matrix_from_edges, mentions_adjacency_matrix};
pub use classify::{nearest_neighbors_classifier, leave_one_out_accuracy};
pub use pipeline::{Pipeline, RunSummary, TextReport, PairReport};
