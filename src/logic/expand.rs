//! Cyclic roster expansion.

/// Repeat `roster` in order until `len` slots are filled: slot `i` is `roster[i % n]`.
///
/// Each member ends up with `len / n` or `len / n + 1` slots. An empty roster
/// yields an empty sequence.
pub fn expand_roster<T: Clone>(roster: &[T], len: usize) -> Vec<T> {
    roster.iter().cycle().take(len).cloned().collect()
}
