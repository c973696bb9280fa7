use proptest::prelude::*;
use votechart_core::{BandScale, LinearScale, Scale};

proptest! {
    #[test]
    fn bands_and_padding_fill_the_range(width in 81u32..4000, len in 1usize..200) {
        let width = f64::from(width);
        let x = BandScale::rounded(len, (0.0, width), 0.1);
        let n = len as f64;
        // Every band plus its share of inner and outer padding.
        let covered = x.step() * (n - 0.1 + 0.2);
        prop_assert!(covered <= width + 1e-9);
        prop_assert!(width - covered < n + 1.0);
        prop_assert!(x.scale(0) >= 0.0);
        prop_assert!(x.scale(len - 1) + x.bandwidth() <= width + 1e-9);
    }

    #[test]
    fn bands_preserve_input_order(width in 200u32..4000, len in 2usize..50) {
        let x = BandScale::rounded(len, (0.0, f64::from(width)), 0.1);
        for idx in 1..len {
            prop_assert!(x.scale(idx) >= x.scale(idx - 1));
        }
    }

    #[test]
    fn unit_values_give_non_negative_bar_heights(value in 0.0f64..=1.0, height in 1u32..2000) {
        let inner = f64::from(height);
        let y = LinearScale::new((0.0, 1.0), (inner, 0.0));
        let bar = inner - y.scale(value);
        prop_assert!(bar >= 0.0);
        prop_assert!(bar <= inner + 1e-9);
    }
}

#[test]
fn baseline_and_full_height_are_exact() {
    for inner in [1.0, 250.0, 999.0] {
        let y = LinearScale::new((0.0, 1.0), (inner, 0.0));
        assert_eq!(y.scale(0.0), inner);
        assert_eq!(y.scale(1.0), 0.0);
    }
}
