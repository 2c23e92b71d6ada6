//! Recency-to-color decay curve.
//!
//! Cells flash bright red while accessed, cool from red to blue over the
//! first second after their last access, darken through blue over the next
//! four seconds, and settle at an inactive gray. Components are linear RGB
//! in [0, 1]; gamma is left to the surface format.

/// Color of a cell given its access flag and `age = t - access_time`.
///
/// The red-to-blue branch ends at (0.2, 0.2, 0.8) while the blue branch
/// starts at (0.2, 0.3, 0.8); that small step at age 1.0 matches the curve
/// this visualization has always drawn and is kept as-is.
pub fn cell_color(is_accessed: bool, age: f32) -> [f32; 3] {
    if is_accessed {
        [1.0, 0.2, 0.2]
    } else if age < 1.0 {
        let fade = age;
        [1.0 - 0.8 * fade, 0.2, 0.2 + 0.6 * fade]
    } else if age < 5.0 {
        let fade = ((age - 1.0) / 4.0).clamp(0.0, 1.0);
        [0.2, 0.3, 0.8 - 0.4 * fade]
    } else {
        [0.3, 0.3, 0.4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_color(actual: [f32; 3], expected: [f32; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-6, "expected {expected:?}, got {actual:?}");
        }
    }

    #[test]
    fn accessed_cells_are_bright_red_regardless_of_age() {
        assert_color(cell_color(true, 0.0), [1.0, 0.2, 0.2]);
        assert_color(cell_color(true, 3.0), [1.0, 0.2, 0.2]);
        assert_color(cell_color(true, 100.0), [1.0, 0.2, 0.2]);
    }

    #[test]
    fn fresh_release_starts_at_bright_red() {
        assert_color(cell_color(false, 0.0), [1.0, 0.2, 0.2]);
    }

    #[test]
    fn first_second_fades_red_to_blue() {
        assert_color(cell_color(false, 0.5), [0.6, 0.2, 0.5]);
        assert_color(cell_color(false, 0.999), [1.0 - 0.8 * 0.999, 0.2, 0.2 + 0.6 * 0.999]);
    }

    #[test]
    fn blue_branch_darkens_over_four_seconds() {
        assert_color(cell_color(false, 1.0), [0.2, 0.3, 0.8]);
        assert_color(cell_color(false, 3.0), [0.2, 0.3, 0.6]);
        assert_color(cell_color(false, 4.999), [0.2, 0.3, 0.8 - 0.4 * ((4.999 - 1.0) / 4.0)]);
    }

    #[test]
    fn branch_boundary_at_one_second_keeps_its_step() {
        // Approaching from below lands on (0.2, 0.2, 0.8); the next branch
        // opens at (0.2, 0.3, 0.8). The green jump is intentional.
        let below = cell_color(false, 1.0 - 1e-4);
        assert!((below[0] - 0.2).abs() < 1e-3);
        assert!((below[1] - 0.2).abs() < 1e-6);
        assert!((below[2] - 0.8).abs() < 1e-3);

        let at = cell_color(false, 1.0);
        assert_color(at, [0.2, 0.3, 0.8]);
    }

    #[test]
    fn stale_cells_settle_at_gray() {
        assert_color(cell_color(false, 5.0), [0.3, 0.3, 0.4]);
        assert_color(cell_color(false, 1000.0), [0.3, 0.3, 0.4]);
    }
}
