use std::{env, error::Error, process};
use ndarray::Array1;
use doc_arrays::files_handling::{read_lines, CsvDocumentTerms, DocumentTermSource};
use doc_arrays::{nearest_neighbors_classifier, jaccard_similarity};


// quick checks that can be run independently from the main pipeline.
// arguments to this executable should be:
// a letter selector: "n" for nearest neighbor, "j" for text similarity
// "n": path to a document-term csv, then path to a file of comma separated count vectors (one per line)
// "j": path to a text file, every pair of lines is compared
// example: ... n data/nytimes.csv Input/vectors.txt

fn main() {

    let args: Vec<String> = env::args().collect();
    let result = match (args.get(1).map(|s| s.as_str()), args.len()) {
        (Some("n"), 4) => run_nearest(&args[2], &args[3]),
        (Some("j"), 3) => run_jaccard(&args[2]),
        _ => Err("usage: query n <dtm.csv> <vectors.txt> | query j <texts.txt>".into())
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn parse_vector(line: &str) -> Result<Array1<f64>, Box<dyn Error>> {
    let values = line
    .split(',')
    .map(|x| x.trim().parse::<f64>())
    .collect::<Result<Vec<f64>, _>>()?;
    Ok(Array1::from(values))
}

fn run_nearest(dtm_file: &str, vectors_file: &str) -> Result<(), Box<dyn Error>> {

    let documents = CsvDocumentTerms::new(dtm_file).load()?;
    for (i, line) in read_lines(vectors_file)?.iter().enumerate() {
        if line.trim().is_empty() { continue }
        let vector = parse_vector(line)?;
        let label = nearest_neighbors_classifier(vector.view(), documents.matrix.view(), &documents.labels)?;
        println!("{} : {}", i, label);
    }
    Ok(())
}

fn run_jaccard(texts_file: &str) -> Result<(), Box<dyn Error>> {

    let lines = read_lines(texts_file)?;
    for (i, text1) in lines.iter().enumerate() {
        for (j, text2) in lines.iter().enumerate().skip(i + 1) {
            println!("{} ~ {} = {:.4}", i, j, jaccard_similarity(text1, text2));
        }
    }
    Ok(())
}
