use std::collections::HashSet;

use thiserror::Error;

use super::{similarity::SimilarityMatrix, vectorizer::TermWeights};
use crate::models::{Catalog, Recommendation};

/// Number of recommendations returned when the caller does not ask for a count
pub const DEFAULT_TOP_N: usize = 5;

/// Error types raised while building the index
#[derive(Debug, Error, PartialEq)]
pub enum IndexError {
    #[error("Catalog is empty")]
    EmptyCatalog,
    #[error("Duplicate product id: {0}")]
    DuplicateId(u32),
    #[error("Duplicate product title: {0}")]
    DuplicateTitle(String),
    #[error("Empty vocabulary: every product description reduces to stop-words")]
    EmptyVocabulary,
}

/// Content-based recommender over an immutable catalog
///
/// Built once at startup, then shared read-only between requests.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    weights: TermWeights,
    similarity: SimilarityMatrix,
}

impl Recommender {
    /// Vectorizes the catalog and precomputes all pairwise similarities
    pub fn build(catalog: Catalog) -> Result<Self, IndexError> {
        if catalog.is_empty() {
            return Err(IndexError::EmptyCatalog);
        }

        let mut ids = HashSet::new();
        let mut titles = HashSet::new();
        for product in catalog.products() {
            if !ids.insert(product.id) {
                return Err(IndexError::DuplicateId(product.id));
            }
            if !titles.insert(product.title.as_str()) {
                return Err(IndexError::DuplicateTitle(product.title.clone()));
            }
        }

        let weights = TermWeights::fit(&catalog.documents());
        if weights.vocabulary().is_empty() {
            return Err(IndexError::EmptyVocabulary);
        }
        let similarity = SimilarityMatrix::build(weights.vectors());

        tracing::debug!(
            products = catalog.len(),
            vocabulary = weights.vocabulary().len(),
            "Similarity index built"
        );

        Ok(Self {
            catalog,
            weights,
            similarity,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vocabulary(&self) -> &[String] {
        self.weights.vocabulary()
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Similarity between two products looked up by title
    pub fn score(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.catalog.position(a)?;
        let j = self.catalog.position(b)?;
        self.similarity.get(i, j)
    }

    /// Products most similar to `title`, best first
    ///
    /// Title lookup is exact. An unknown title yields no recommendations.
    /// The queried product itself is never returned; equal scores keep
    /// catalog order.
    pub fn recommend(&self, title: &str, top_n: usize) -> Vec<Recommendation> {
        self.try_recommend(title, top_n).unwrap_or_default()
    }

    /// Like [`Recommender::recommend`], but `None` when no product has `title`
    pub fn try_recommend(&self, title: &str, top_n: usize) -> Option<Vec<Recommendation>> {
        let idx = self.catalog.position(title)?;
        let row = self.similarity.row(idx)?;

        let mut ranked: Vec<(usize, f64)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .collect();
        // stable: ties stay in catalog order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let recommendations = ranked
            .into_iter()
            .take(top_n)
            .filter_map(|(i, score)| {
                self.catalog.get(i).map(|product| Recommendation {
                    title: product.title.clone(),
                    category: product.category.clone(),
                    score,
                })
            })
            .collect();
        Some(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn recommender() -> Recommender {
        Recommender::build(Catalog::builtin()).unwrap()
    }

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_excludes_query_and_respects_top_n() {
        let recs = recommender().recommend("Wireless Mouse", 5);
        assert!(recs.len() <= 5);
        assert!(!titles(&recs).contains(&"Wireless Mouse"));
    }

    #[test]
    fn test_unknown_title_is_empty() {
        assert!(recommender().recommend("Nonexistent Product", 5).is_empty());
        assert!(recommender().recommend("wireless mouse", 5).is_empty());
    }

    #[test]
    fn test_electronics_rank_first() {
        let recs = recommender().recommend("Gaming Keyboard", 3);
        assert_eq!(recs.len(), 3);
        assert!(recs.iter().all(|r| r.category == "Electronics"));
        assert!(recs.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(titles(&recs).contains(&"Headphones"));
    }

    #[test]
    fn test_headphones_above_running_shoes() {
        let r = recommender();
        let recs = r.recommend("Gaming Keyboard", 9);
        let pos = |t: &str| titles(&recs).iter().position(|x| *x == t).unwrap();
        assert!(pos("Headphones") < pos("Running Shoes"));
        assert!(r.score("Gaming Keyboard", "Headphones").unwrap() > 0.0);
        assert_eq!(r.score("Gaming Keyboard", "Running Shoes"), Some(0.0));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        // Every product unrelated to the keyboard scores zero
        let recs = recommender().recommend("Gaming Keyboard", 9);
        let zeros: Vec<&str> = recs
            .iter()
            .filter(|r| r.score == 0.0)
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(
            zeros,
            vec![
                "Running Shoes",
                "Cotton T-Shirt",
                "Water Bottle",
                "Yoga Mat",
                "Backpack",
                "Sunglasses"
            ]
        );
    }

    #[test]
    fn test_try_recommend_distinguishes_unknown_title() {
        let r = recommender();
        assert_eq!(r.try_recommend("Nonexistent Product", 5), None);
        assert_eq!(r.try_recommend("Yoga Mat", 0), Some(vec![]));
    }

    #[test]
    fn test_idempotent() {
        let r = recommender();
        assert_eq!(r.recommend("Yoga Mat", 4), r.recommend("Yoga Mat", 4));
    }

    #[test]
    fn test_top_n_bounds() {
        let r = recommender();
        assert!(r.recommend("Backpack", 0).is_empty());
        assert_eq!(r.recommend("Backpack", 50).len(), 9);
    }

    #[test]
    fn test_duplicate_document_never_returns_query() {
        let catalog = Catalog::new(vec![
            Product::new(1, "Lamp A", "Brass desk lamp", "Home"),
            Product::new(2, "Lamp B", "Brass desk lamp", "Home"),
            Product::new(3, "Rug", "Wool rug", "Home"),
        ]);
        let r = Recommender::build(catalog).unwrap();
        assert_eq!(titles(&r.recommend("Lamp B", 5)), vec!["Lamp A", "Rug"]);
    }

    #[test]
    fn test_build_errors() {
        assert_eq!(
            Recommender::build(Catalog::new(vec![])).unwrap_err(),
            IndexError::EmptyCatalog
        );

        let duplicated = Catalog::new(vec![
            Product::new(1, "Mug", "Ceramic mug", "Kitchen"),
            Product::new(2, "Mug", "Travel mug", "Kitchen"),
        ]);
        assert_eq!(
            Recommender::build(duplicated).unwrap_err(),
            IndexError::DuplicateTitle("Mug".to_string())
        );

        let reused_id = Catalog::new(vec![
            Product::new(1, "Kettle", "Electric kettle", "Kitchen"),
            Product::new(1, "Toaster", "Two slot toaster", "Kitchen"),
        ]);
        assert_eq!(
            Recommender::build(reused_id).unwrap_err(),
            IndexError::DuplicateId(1)
        );

        let stop_words_only = Catalog::new(vec![Product::new(1, "X", "the and", "of")]);
        assert_eq!(
            Recommender::build(stop_words_only).unwrap_err(),
            IndexError::EmptyVocabulary
        );
    }

    #[test]
    fn test_similarity_properties_on_builtin_catalog() {
        let r = recommender();
        let m = r.similarity();
        assert_eq!(m.size(), 10);
        for i in 0..10 {
            assert!((m.get(i, i).unwrap() - 1.0).abs() < 1e-9);
            for j in 0..10 {
                let s = m.get(i, j).unwrap();
                assert_eq!(s, m.get(j, i).unwrap());
                assert!((0.0..=1.0).contains(&s));
            }
        }
    }
}
