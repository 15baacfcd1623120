use serde::{Deserialize, Serialize};

/// A recommendable catalog item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Stable identifier, unique within the catalog
    pub id: u32,
    /// Display name, also the lookup key for recommendations
    pub title: String,
    pub description: String,
    pub category: String,
}

impl Product {
    pub fn new(id: u32, title: &str, description: &str, category: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        }
    }

    /// Text fed to the vectorizer: description followed by category
    pub fn document(&self) -> String {
        format!("{} {}", self.description, self.category)
    }
}

/// Catalog entry as listed to clients
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductSummary {
    pub id: u32,
    pub title: String,
    pub category: String,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            category: product.category.clone(),
        }
    }
}

/// A ranked recommendation
///
/// Only `title` and `category` are serialized; the score stays internal.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub category: String,
    #[serde(skip)]
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_joins_description_and_category() {
        let product = Product::new(1, "Yoga Mat", "Non-slip yoga mat", "Sports");
        assert_eq!(product.document(), "Non-slip yoga mat Sports");
    }

    #[test]
    fn test_recommendation_hides_score() {
        let rec = Recommendation {
            title: "Headphones".to_string(),
            category: "Electronics".to_string(),
            score: 0.42,
        };

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "title": "Headphones", "category": "Electronics" })
        );
    }

    #[test]
    fn test_summary_omits_description() {
        let product = Product::new(9, "Backpack", "Durable travel backpack", "Accessories");
        let json = serde_json::to_value(ProductSummary::from(&product)).unwrap();
        assert_eq!(json["title"], "Backpack");
        assert!(json.get("description").is_none());
    }
}
