use rand::Rng;

/// One record of the generated dataset.
///
/// The two leading flags are constant placeholders kept for schema
/// compatibility with downstream consumers; only the label and the
/// features are random.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub flag_a: bool,
    pub flag_b: bool,
    /// Class label, uniform over {0, 1}.
    pub label: u8,
    /// Feature columns, each uniform over [-1, 1).
    pub features: Vec<f64>,
}

impl Row {
    /// Draw one row with `features` feature columns from `rng`.
    pub fn sample<R: Rng>(features: usize, rng: &mut R) -> Self {
        Self {
            flag_a: false,
            flag_b: false,
            label: rng.gen_range(0..=1),
            features: (0..features).map(|_| rng.gen_range(-1.0..1.0)).collect(),
        }
    }

    /// Total field count: two flags, the label, and one field per feature.
    pub fn field_count(&self) -> usize {
        3 + self.features.len()
    }
}
