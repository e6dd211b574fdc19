use std::collections::HashMap;
use std::ops::Range;

use thiserror::Error;

/// Errors that can occur while building a term-count matrix
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorizeError {
    #[error("no labels to vectorize")]
    NoLabels,

    #[error("vocabulary is empty after tokenization")]
    EmptyVocabulary,
}

/// Split a label into lowercase tokens.
///
/// This is the tokenization rule the whole engine commits to: the label is
/// lowercased and split on every non-alphanumeric boundary, and empty
/// fragments are dropped. `"Rock & Roll"` tokenizes to `["rock", "roll"]`.
/// Every downstream score depends on this rule.
pub fn tokenize(label: &str) -> Vec<String> {
    label
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Term-count matrix over a shared vocabulary
///
/// One row per input label, one column per distinct token across all
/// labels (first-seen order). Cells hold raw token counts; there is no
/// inverse-document-frequency weighting.
#[derive(Debug, Clone)]
pub struct TermMatrix {
    vocabulary: Vec<String>,
    rows: Vec<Vec<u32>>,
}

impl TermMatrix {
    /// Distinct tokens, in first-seen order
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Term counts for the label at `index`
    pub fn row(&self, index: usize) -> &[u32] {
        &self.rows[index]
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Element-wise mean over a contiguous range of rows
    pub fn mean_rows(&self, range: Range<usize>) -> Vec<f64> {
        let count = range.len();
        if count == 0 {
            return vec![0.0; self.vocabulary.len()];
        }

        let mut mean = vec![0.0; self.vocabulary.len()];
        for row in &self.rows[range] {
            for (acc, &cell) in mean.iter_mut().zip(row) {
                *acc += cell as f64;
            }
        }
        for acc in &mut mean {
            *acc /= count as f64;
        }

        mean
    }
}

/// Build a term-count matrix from a sequence of text labels
///
/// Fails with [`VectorizeError::NoLabels`] on an empty input slice and
/// [`VectorizeError::EmptyVocabulary`] when tokenization produces no
/// tokens at all (e.g. every label is empty or pure punctuation). Callers
/// are expected to handle both cases with an explicit fallback.
pub fn vectorize(labels: &[String]) -> Result<TermMatrix, VectorizeError> {
    if labels.is_empty() {
        return Err(VectorizeError::NoLabels);
    }

    let tokenized: Vec<Vec<String>> = labels.iter().map(|label| tokenize(label)).collect();

    // Vocabulary in first-seen order
    let mut vocabulary: Vec<String> = Vec::new();
    let mut columns: HashMap<String, usize> = HashMap::new();
    for tokens in &tokenized {
        for token in tokens {
            if !columns.contains_key(token) {
                columns.insert(token.clone(), vocabulary.len());
                vocabulary.push(token.clone());
            }
        }
    }

    if vocabulary.is_empty() {
        return Err(VectorizeError::EmptyVocabulary);
    }

    let rows = tokenized
        .iter()
        .map(|tokens| {
            let mut row = vec![0u32; vocabulary.len()];
            for token in tokens {
                row[columns[token]] += 1;
            }
            row
        })
        .collect();

    Ok(TermMatrix { vocabulary, rows })
}
