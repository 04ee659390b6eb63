/// Property-based coverage of row sampling and serialization.
///
/// Uses proptest for deterministic seeds, reproducible failures, and
/// automatic shrinking to minimal failing cases.
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use csvgen::output::write_row;
use csvgen::row::Row;

proptest! {
    #[test]
    fn sampled_rows_respect_their_domains(seed in any::<u64>(), features in 0usize..64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let row = Row::sample(features, &mut rng);

        prop_assert!(!row.flag_a);
        prop_assert!(!row.flag_b);
        prop_assert!(row.label <= 1);
        prop_assert_eq!(row.features.len(), features);
        prop_assert_eq!(row.field_count(), 3 + features);
        for &x in &row.features {
            prop_assert!((-1.0..1.0).contains(&x), "feature out of range: {}", x);
        }
    }

    #[test]
    fn serialized_lines_have_constant_arity(seed in any::<u64>(), features in 0usize..64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut buf = Vec::new();
        for _ in 0..8 {
            write_row(&mut buf, &Row::sample(features, &mut rng)).unwrap();
        }

        let text = String::from_utf8(buf).unwrap();
        prop_assert_eq!(text.lines().count(), 8);
        for line in text.lines() {
            prop_assert_eq!(line.split(',').count(), 3 + features);
        }
    }
}
