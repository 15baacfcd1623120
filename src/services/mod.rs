pub mod recommender;
pub mod similarity;
pub mod vectorizer;

pub use recommender::{IndexError, Recommender, DEFAULT_TOP_N};
pub use similarity::SimilarityMatrix;
pub use vectorizer::TermWeights;
