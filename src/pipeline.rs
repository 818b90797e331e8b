
// imports
use crate::adjacency::mentions_adjacency_matrix;
use crate::classify::leave_one_out_accuracy;
use crate::config::{Config, JsonTypes};
use crate::error::Result;
use crate::files_handling::{self, read_text_file, save_output, CsvDocumentTerms, DocumentTermSource, SaveFile};
use crate::frequency::{lexical_density, most_common, word_frequencies};
use crate::similarity::{distance_matrix, jaccard_similarity, jaccard_similarity_matrix, normalize_document_term_matrix, shared_words};
use crate::tokenize::{extract_hashtags, extract_mentions};

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;
use serde::Serialize;
use tracing::{info, warn};


#[derive(Debug, Default, Serialize)]
pub struct TextReport {
    pub file: String,
    pub tokens: usize,
    pub lexical_density: Option<f64>,
    pub most_common: Vec<(String, usize)>
}

#[derive(Debug, Default, Serialize)]
pub struct PairReport {
    pub first: String,
    pub second: String,
    pub jaccard: f64,
    pub shared_words: usize
}

#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub documents: usize,
    pub terms: usize,
    pub leave_one_out_accuracy: Option<f64>,
    pub texts: Vec<TextReport>,
    pub text_pairs: Vec<PairReport>,
    pub tweets: usize,
    pub hashtags: Vec<String>,
    pub co_mention_edges: usize
}

impl SaveFile for RunSummary {
    fn save_file(&self, output_dir: &str, file_name: &str) -> Result<()> {
        let out = Path::new(output_dir).join(format!("{}.json", file_name));
        let f = BufWriter::new(File::create(out)?);
        serde_json::to_writer_pretty(f, self)?;
        Ok(())
    }
}

pub struct Pipeline {}

impl Pipeline {

    // runs the configured stages -
    // -> document-term matrix: distances, similarities, nearest neighbor evaluation
    // -> text files: frequencies, lexical density, pairwise jaccard
    // -> tweets: hashtags, mentions and the co-mention graph

    pub fn run(args: &[String]) -> std::result::Result<RunSummary, Box<dyn Error>> {

        info!("building parameters...");
        let params = Config::new(args)?.get_params();
        info!("{}", params);
        Pipeline::run_with(&params)
    }

    pub fn run_with(params: &JsonTypes) -> std::result::Result<RunSummary, Box<dyn Error>> {

        let mut summary = RunSummary::default();

        if let Some(dtm_file) = &params.dtm_file {
            let timer = Instant::now();
            Pipeline::document_stage(&CsvDocumentTerms::new(dtm_file), params, &mut summary)?;
            info!("finished document-term stage, took {} ms", timer.elapsed().as_millis());
        }

        if !params.text_files.is_empty() {
            Pipeline::text_stage(params, &mut summary)?;
        }

        if let Some(tweets_file) = &params.tweets_file {
            Pipeline::tweet_stage(tweets_file, params, &mut summary)?;
        }

        save_output(&params.output_dir, "summary", &summary)?;
        info!("saved summary to {}", params.output_dir);
        Ok(summary)
    }

    pub fn document_stage<D: DocumentTermSource>(source: &D, params: &JsonTypes, summary: &mut RunSummary) -> Result<()> {

        let documents = source.load()?;
        info!("loaded {} documents over {} terms", documents.matrix.nrows(), documents.matrix.ncols());
        summary.documents = documents.matrix.nrows();
        summary.terms = documents.matrix.ncols();

        let matrix = if params.normalize {
            normalize_document_term_matrix(documents.matrix.view())?
        } else {
            documents.matrix
        };

        let distances = distance_matrix(matrix.view())?;
        save_output(&params.output_dir, "distances", &distances)?;

        let similarities = jaccard_similarity_matrix(matrix.view())?;
        save_output(&params.output_dir, "jaccard", &similarities)?;

        if matrix.nrows() > 1 {
            let accuracy = leave_one_out_accuracy(matrix.view(), &documents.labels)?;
            info!("leave-one-out nearest neighbor accuracy: {:.3}", accuracy);
            summary.leave_one_out_accuracy = Some(accuracy);
        } else {
            warn!("a single document, skipping nearest neighbor evaluation");
        }
        Ok(())
    }

    pub fn text_stage(params: &JsonTypes, summary: &mut RunSummary) -> Result<()> {

        let mut contents: Vec<(String, String)> = Vec::new();
        for file in &params.text_files {
            let content = read_text_file(file)?;
            let token2count = word_frequencies(&content, params.lowercase);

            // an empty text has no density, report it rather than fail the run
            let density = match lexical_density(&content) {
                Ok(density) => Some(density),
                Err(e) => {
                    warn!("{}: {}", file, e);
                    None
                }
            };

            info!("{}: {} tokens, {} distinct", file, token2count.values().sum::<usize>(), token2count.len());
            summary.texts.push(TextReport {
                file: file.to_owned(),
                tokens: token2count.values().sum(),
                lexical_density: density,
                most_common: most_common(&token2count, params.top_k)
            });
            contents.push((file.to_owned(), content));
        }

        for (i, (first, text1)) in contents.iter().enumerate() {
            for (second, text2) in contents.iter().skip(i + 1) {
                summary.text_pairs.push(PairReport {
                    first: first.to_owned(),
                    second: second.to_owned(),
                    jaccard: jaccard_similarity(text1, text2),
                    shared_words: shared_words(text1, text2).len()
                });
            }
        }
        Ok(())
    }

    pub fn tweet_stage(tweets_file: &str, params: &JsonTypes, summary: &mut RunSummary) -> Result<()> {

        // one tweet per line
        let tweets: Vec<String> = files_handling::read_lines(tweets_file)?;

        let mentions: Vec<Vec<String>> = tweets.iter().map(|t| extract_mentions(t)).collect();
        let mut hashtags: Vec<String> = tweets.iter().flat_map(|t| extract_hashtags(t)).collect();
        hashtags.sort();
        hashtags.dedup();

        let trix = mentions_adjacency_matrix(&mentions);
        save_output(&params.output_dir, "mentions", &trix)?;

        summary.tweets = tweets.len();
        summary.co_mention_edges = trix.iter().filter(|v| **v == 1).count() / 2;
        info!("{} tweets, {} distinct hashtags, {} co-mention edges", summary.tweets, hashtags.len(), summary.co_mention_edges);
        summary.hashtags = hashtags;
        Ok(())
    }

}
