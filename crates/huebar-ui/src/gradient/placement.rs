use huebar_engine::paint::Gradient;

/// Position for a mark added without pointing at the bar.
///
/// - empty gradient: `0`
/// - one mark: whichever end is farther from it (`1` on a tie)
/// - otherwise: the middle of the widest gap, counting the gaps before the
///   first mark and after the last one; the leftmost gap wins a tie
///
/// Expects the gradient sorted, which holds outside of in-place edits.
pub fn position_where_to_add_next_mark(gradient: &Gradient) -> f32 {
    let positions: Vec<f32> = gradient.marks().map(|m| m.position.get()).collect();
    match positions.as_slice() {
        [] => 0.0,
        [only] => {
            if *only > 1.0 - *only { 0.0 } else { 1.0 }
        }
        [first, .., last] => {
            let mut gap_start = 0.0;
            let mut gap = *first;
            for pair in positions.windows(2) {
                let width = pair[1] - pair[0];
                if gap < width {
                    gap_start = pair[0];
                    gap = width;
                }
            }
            if gap < 1.0 - *last {
                gap_start = *last;
                gap = 1.0 - *last;
            }
            gap_start + gap / 2.0
        }
    }
}
