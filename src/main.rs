
use std::env;
use std::process;
use tracing::{error, info};
use doc_arrays::Pipeline;


// expects a single argument, the path to a json file such as:
// {"output_dir": "Output", "dtm_file": "data/nytimes-art-music-simple.csv",
//  "text_files": ["data/a.txt", "data/b.txt"], "tweets_file": "data/tweets.txt"}

fn main() {

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("doc_arrays=info")),
        )
        .init();

    info!("entering program...");
    let args: Vec<String> = env::args().collect();

    match Pipeline::run(&args) {
        Ok(summary) => info!("done, {} documents, {} texts, {} tweets", summary.documents, summary.texts.len(), summary.tweets),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
