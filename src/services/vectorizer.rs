use std::collections::{BTreeMap, BTreeSet, HashMap};

/// English stop-words discarded before weighting
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into",
    "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or",
    "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too",
    "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon",
    "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Sparse vector of `(term index, weight)` pairs, sorted by term index
pub type SparseVector = Vec<(usize, f64)>;

/// Splits text into lowercase terms of two or more word characters,
/// dropping stop-words
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// TF-IDF weights for a fixed corpus
///
/// Every vector shares the same vocabulary, so they are all of dimension
/// `vocabulary().len()`. Absent terms carry an implicit weight of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TermWeights {
    vocabulary: Vec<String>,
    vectors: Vec<SparseVector>,
}

impl TermWeights {
    /// Weights each document against the whole corpus
    ///
    /// Term frequency is the raw count; idf is `ln((1 + n) / (1 + df)) + 1`.
    /// Each vector is L2-normalized unless it is all zeros.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> =
            documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let vocabulary: Vec<String> = tokenized
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        let mut doc_freq = vec![0usize; vocabulary.len()];
        let counts: Vec<BTreeMap<usize, usize>> = tokenized
            .iter()
            .map(|tokens| {
                let mut tf = BTreeMap::new();
                for token in tokens {
                    *tf.entry(index[token.as_str()]).or_insert(0) += 1;
                }
                for &term in tf.keys() {
                    doc_freq[term] += 1;
                }
                tf
            })
            .collect();

        let n = documents.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let vectors = counts
            .into_iter()
            .map(|tf| {
                let mut vector: SparseVector = tf
                    .into_iter()
                    .map(|(term, count)| (term, count as f64 * idf[term]))
                    .collect();
                let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for (_, weight) in vector.iter_mut() {
                        *weight /= norm;
                    }
                }
                vector
            })
            .collect();

        Self {
            vocabulary,
            vectors,
        }
    }

    /// Distinct terms in lexicographic order; a term's position is its dimension
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    /// Weight of `term` in document `doc`, zero when absent
    #[cfg(test)]
    pub(crate) fn weight(&self, doc: usize, term: &str) -> f64 {
        let Ok(dim) = self.vocabulary.binary_search_by(|t| t.as_str().cmp(term)) else {
            return 0.0;
        };
        self.vectors
            .get(doc)
            .and_then(|v| v.iter().find(|(i, _)| *i == dim))
            .map(|(_, w)| *w)
            .unwrap_or(0.0)
    }
}
