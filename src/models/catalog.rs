use std::path::Path;

use thiserror::Error;

use super::Product;

/// Errors raised while loading a catalog from disk
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, immutable list of recommendable products
///
/// Positions are significant: the index of a product here is its row and
/// column in the similarity matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in ten product catalog
    pub fn builtin() -> Self {
        Self::new(vec![
            Product::new(
                1,
                "Wireless Mouse",
                "Ergonomic wireless mouse with USB receiver",
                "Electronics",
            ),
            Product::new(
                2,
                "Gaming Keyboard",
                "Mechanical keyboard with RGB lighting",
                "Electronics",
            ),
            Product::new(
                3,
                "Running Shoes",
                "Lightweight running shoes for daily workouts",
                "Fashion",
            ),
            Product::new(
                4,
                "Cotton T-Shirt",
                "Comfortable cotton t-shirt for casual wear",
                "Fashion",
            ),
            Product::new(5, "Smartphone", "Android smartphone with 128GB storage", "Electronics"),
            Product::new(6, "Water Bottle", "Insulated stainless steel water bottle", "Sports"),
            Product::new(7, "Yoga Mat", "Non-slip yoga mat for home workouts", "Sports"),
            Product::new(8, "Headphones", "Noise cancelling over ear headphones", "Electronics"),
            Product::new(9, "Backpack", "Durable travel backpack with compartments", "Accessories"),
            Product::new(10, "Sunglasses", "UV protection stylish sunglasses", "Accessories"),
        ])
    }

    /// Loads a catalog from a JSON array of products
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&raw)?;
        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Position of the product whose title matches exactly (case-sensitive)
    pub fn position(&self, title: &str) -> Option<usize> {
        self.products.iter().position(|p| p.title == title)
    }

    /// One vectorizer document per product, in catalog order
    pub fn documents(&self) -> Vec<String> {
        self.products.iter().map(Product::document).collect()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|p| p.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.position("Wireless Mouse"), Some(0));
        assert_eq!(catalog.position("Sunglasses"), Some(9));
    }

    #[test]
    fn test_position_is_exact_match() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.position("wireless mouse"), None);
        assert_eq!(catalog.position(" Wireless Mouse"), None);
    }

    #[test]
    fn test_documents_are_aligned_with_products() {
        let catalog = Catalog::builtin();
        let documents = catalog.documents();
        assert_eq!(documents.len(), catalog.len());
        assert_eq!(documents[4], "Android smartphone with 128GB storage Electronics");
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": 1, "title": "Kettle",
                  "description": "Electric kettle", "category": "Kitchen"}},
                {{"id": 2, "title": "Toaster",
                  "description": "Two slot toaster", "category": "Kitchen"}}
            ]"#
        )
        .unwrap();

        let catalog = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().title, "Toaster");
    }

    #[test]
    fn test_from_json_file_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1, "title": "Kettle"}}]"#).unwrap();

        let err = Catalog::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_from_json_file_missing_file() {
        let err = Catalog::from_json_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
