
use std::cmp::Ordering;
use std::collections::HashMap;
use crate::error::{AnalysisError, Result};
use crate::tokenize::tokenize;


/// Count occurrences of every word in `text`. Iteration order of the map is meaningless.
pub fn word_frequencies(text: &str, lowercase: bool) -> HashMap<String, usize> {

    // accumulate occurrences of words - how many times each token appears in the text
    let mut token2count: HashMap<String, usize> = HashMap::new();
    for tok in tokenize(text, lowercase) {
        let val = token2count.entry(tok).or_insert(0);
        *val += 1;
    }
    token2count
}

/// Number of unique words divided by the number of total words, ignoring case.
///
/// A text without any word has no density, `EmptyInput` is returned instead of dividing by zero.
pub fn lexical_density(text: &str) -> Result<f64> {

    let token2count = word_frequencies(text, true);
    let total: usize = token2count.values().sum();
    if total == 0 {
        return Err(AnalysisError::EmptyInput("text has no tokens"));
    }
    Ok(token2count.len() as f64 / total as f64)
}

/// Index of the highest value, first occurrence wins.
///
/// `None` for an empty slice, or when a NaN makes the values impossible to order.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in values.iter().enumerate() {
        match best {
            None => {
                if v.is_nan() { return None; }
                best = Some((i, *v));
            },
            Some((_, b)) => {
                if v.partial_cmp(&b)? == Ordering::Greater {
                    best = Some((i, *v));
                }
            }
        }
    }
    best.map(|(i, _)| i)
}

/// The `k` most frequent words, ties broken alphabetically so output is reproducible.
pub fn most_common(token2count: &HashMap<String, usize>, k: usize) -> Vec<(String, usize)> {
    let mut tup = token2count
    .iter()
    .map(|(t, c)| (t.to_owned(), *c))
    .collect::<Vec<(String, usize)>>();
    tup.sort_by(|(t1, c1), (t2, c2)| c2.cmp(c1).then_with(|| t1.cmp(t2)));
    tup.truncate(k);
    tup
}


#[cfg(test)]
mod tests {

    use std::collections::HashMap;
    use super::{word_frequencies, lexical_density, argmax, most_common};
    use crate::error::AnalysisError;

    #[test]
    fn word_frequencies_test() {

        let mut golden: HashMap<String, usize> = HashMap::new();
        golden.insert("the".to_string(), 2);
        golden.insert("dog".to_string(), 1);
        golden.insert("ate".to_string(), 1);
        golden.insert("hat".to_string(), 1);

        assert_eq!(word_frequencies("The dog ate the hat.", true), golden);

        let cased = word_frequencies("The dog ate the hat.", false);
        assert_eq!(cased.get("The"), Some(&1));
        assert_eq!(cased.get("the"), Some(&1));
    }

    #[test]
    fn lexical_density_test() {
        let density = lexical_density("The dog ate the hat.").unwrap();
        assert!((density - 0.8).abs() < 1e-12);
    }

    #[test]
    fn lexical_density_empty_text() {
        match lexical_density(" ... !!! ") {
            Err(AnalysisError::EmptyInput(_)) => {},
            other => panic!("expected EmptyInput, got {:?}", other)
        }
    }

    #[test]
    fn argmax_test() {
        assert_eq!(argmax(&[1.0, 3.0, 2.0]), Some(1));
        assert_eq!(argmax(&[5.0, 1.0, 5.0]), Some(0));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn argmax_unordered_values() {
        assert_eq!(argmax(&[1.0, f64::NAN]), None);
        assert_eq!(argmax(&[f64::NAN, 1.0]), None);
        assert_eq!(argmax(&[2.0, f64::NAN, 3.0]), None);
        assert_eq!(argmax(&[f64::NEG_INFINITY, -1.0]), Some(1));
    }

    #[test]
    fn most_common_test() {
        let token2count = word_frequencies("b a b c a b", true);
        assert_eq!(most_common(&token2count, 2), vec![("b".to_string(), 3), ("a".to_string(), 2)]);
        assert_eq!(most_common(&token2count, 10).len(), 3);
    }
}
