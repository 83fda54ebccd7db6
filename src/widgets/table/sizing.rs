use super::column::{unit_fraction, Width};

/// Widths in points for a row of visible columns.
///
/// `spacing` is the gap between two neighbouring cells. Fractions are taken
/// of what is left of `available` once gaps and fixed widths are
/// subtracted. The last column ignores its declared width and takes the
/// rest, so the row always ends flush with `available`.
pub fn allocate_widths(widths: &[Width], available: f32, spacing: f32) -> Vec<f32> {
    let Some(last) = widths.len().checked_sub(1) else {
        return Vec::new();
    };

    let usable = (available - spacing * last as f32).max(0.0);
    let fixed: f32 = widths
        .iter()
        .map(|width| match width {
            Width::Fixed(points) => points.max(0.0),
            Width::Fraction(_) => 0.0,
        })
        .sum();
    let remainder = (usable - fixed).max(0.0);

    let mut used = 0.0;
    let mut sizes = Vec::with_capacity(widths.len());
    for (i, width) in widths.iter().enumerate() {
        let size = if i == last {
            (usable - used).max(0.0)
        } else {
            match *width {
                Width::Fixed(points) => points.max(0.0),
                Width::Fraction(fraction) => remainder * unit_fraction(fraction),
            }
        };
        used += size;
        sizes.push(size);
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-3, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn fractions_share_what_fixed_columns_leave() {
        let widths = [
            Width::Fixed(16.0),
            Width::Fraction(0.65),
            Width::Fraction(0.25),
            Width::Fraction(0.1),
        ];
        assert_close(
            &allocate_widths(&widths, 416.0, 0.0),
            &[16.0, 260.0, 100.0, 40.0],
        );
    }

    #[test]
    fn last_column_fills_the_trailing_edge() {
        let widths = [Width::Fraction(0.25), Width::Fixed(10.0)];
        assert_close(&allocate_widths(&widths, 110.0, 0.0), &[25.0, 85.0]);

        let widths = [Width::Fraction(0.2), Width::Fraction(0.2)];
        assert_close(&allocate_widths(&widths, 100.0, 0.0), &[20.0, 80.0]);
    }

    #[test]
    fn gaps_are_taken_off_first() {
        let widths = [Width::Fraction(0.5), Width::Fraction(0.5)];
        assert_close(&allocate_widths(&widths, 102.0, 2.0), &[50.0, 50.0]);
    }

    #[test]
    fn never_negative() {
        let widths = [Width::Fixed(80.0), Width::Fraction(0.5), Width::Fixed(80.0)];
        let sizes = allocate_widths(&widths, 100.0, 0.0);
        assert!(sizes.iter().all(|size| *size >= 0.0), "{sizes:?}");
        assert!(allocate_widths(&[], 100.0, 4.0).is_empty());
    }

    #[test]
    fn nan_fractions_take_no_space() {
        let widths = [Width::Fraction(f32::NAN), Width::Fraction(0.5)];
        assert_close(&allocate_widths(&widths, 100.0, 0.0), &[0.0, 100.0]);
    }
}
