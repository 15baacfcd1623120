use super::vectorizer::SparseVector;

/// Dense, symmetric matrix of pairwise cosine similarities
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Computes cosine similarity for every pair of vectors
    ///
    /// Only the upper triangle is computed; the lower one mirrors it.
    pub fn build(vectors: &[SparseVector]) -> Self {
        let size = vectors.len();
        let norms: Vec<f64> = vectors.iter().map(|v| magnitude(v)).collect();
        let mut values = vec![0.0; size * size];

        for i in 0..size {
            for j in i..size {
                let score = cosine(&vectors[i], norms[i], &vectors[j], norms[j]);
                values[i * size + j] = score;
                values[j * size + i] = score;
            }
        }

        Self { size, values }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.size && j < self.size).then(|| self.values[i * self.size + j])
    }

    /// Similarities of item `i` against every item, in catalog order
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        (i < self.size).then(|| &self.values[i * self.size..(i + 1) * self.size])
    }
}

fn magnitude(v: &[(usize, f64)]) -> f64 {
    v.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
}

/// Dot product of two index-sorted sparse vectors
fn dot(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let (mut i, mut j, mut sum) = (0, 0, 0.0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

/// Zero when either vector has no magnitude
fn cosine(a: &SparseVector, norm_a: f64, b: &SparseVector, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot(a, b) / (norm_a * norm_b)).min(1.0)
}
