//! Rotation: The flip path between two symbols.
//!
//! A flap can only turn forward. Going from `C` to `A` therefore runs
//! through the rest of the ring and wraps around, exactly like the
//! mechanical units on a departure board.
//!
//! Symbols that are not on the ring get a best-effort path:
//!
//! | from      | to        | path                                    |
//! |-----------|-----------|-----------------------------------------|
//! | unknown   | unknown   | `[to]`                                  |
//! | unknown   | on ring   | ring start through `to`                 |
//! | on ring   | unknown   | everything after `from`, then `to`      |
//! | on ring   | on ring   | forward from `from` to `to`, wrapping   |

use crate::buffer::{Alphabet, Symbol};

/// Compute every symbol a flap shows on its way from `from` to `to`.
///
/// The result is in display order and always ends with `to`, unless
/// `from == to`, in which case it is empty and nothing flips.
///
/// # Example
///
/// ```
/// use flapboard::{rotation, Alphabet, Symbol};
///
/// let alphabet = Alphabet::from_graphemes(" ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
/// let path = rotation::sequence(Symbol::from('A'), Symbol::from('C'), &alphabet);
/// assert_eq!(path, vec![Symbol::from('B'), Symbol::from('C')]);
/// ```
pub fn sequence(from: Symbol, to: Symbol, alphabet: &Alphabet) -> Vec<Symbol> {
    if from == to {
        return Vec::new();
    }

    let ring = alphabet.symbols();
    match (alphabet.position(from), alphabet.position(to)) {
        (None, None) => vec![to],
        (None, Some(target)) => ring[..=target].to_vec(),
        (Some(current), None) => {
            let mut path = Vec::with_capacity(ring.len() - current);
            path.extend_from_slice(&ring[current + 1..]);
            path.push(to);
            path
        }
        (Some(current), Some(target)) if target > current => ring[current + 1..=target].to_vec(),
        (Some(current), Some(target)) => {
            let mut path = Vec::with_capacity(ring.len() - current + target);
            path.extend_from_slice(&ring[current + 1..]);
            path.extend_from_slice(&ring[..=target]);
            path
        }
    }
}

/// Number of flips between two symbols, without building the path.
pub fn distance(from: Symbol, to: Symbol, alphabet: &Alphabet) -> usize {
    if from == to {
        return 0;
    }

    let len = alphabet.len();
    match (alphabet.position(from), alphabet.position(to)) {
        (None, None) => 1,
        (None, Some(target)) => target + 1,
        (Some(current), None) => len - current,
        (Some(current), Some(target)) if target > current => target - current,
        (Some(current), Some(target)) => len - current - 1 + target + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Alphabet {
        Alphabet::from_graphemes(" ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap()
    }

    fn text(path: &[Symbol]) -> String {
        path.iter().map(Symbol::as_str).collect()
    }

    #[test]
    fn test_same_symbol_is_empty() {
        let alphabet = board();
        assert!(sequence(Symbol::from('Q'), Symbol::from('Q'), &alphabet).is_empty());
        assert!(sequence(Symbol::from('!'), Symbol::from('!'), &alphabet).is_empty());
    }

    #[test]
    fn test_forward() {
        let alphabet = board();
        let path = sequence(Symbol::from('A'), Symbol::from('C'), &alphabet);
        assert_eq!(text(&path), "BC");
    }

    #[test]
    fn test_wraps_around() {
        let alphabet = board();
        let path = sequence(Symbol::from('C'), Symbol::from('A'), &alphabet);
        assert_eq!(text(&path), "DEFGHIJKLMNOPQRSTUVWXYZ A");
    }

    #[test]
    fn test_wrap_from_last() {
        let alphabet = board();
        let path = sequence(Symbol::from('Z'), Symbol::from('B'), &alphabet);
        assert_eq!(text(&path), " AB");
    }

    #[test]
    fn test_both_unknown_snaps() {
        let alphabet = board();
        let path = sequence(Symbol::from('!'), Symbol::from('?'), &alphabet);
        assert_eq!(path, vec![Symbol::from('?')]);
    }

    #[test]
    fn test_unknown_from_cycles_from_start() {
        let alphabet = board();
        let path = sequence(Symbol::from('!'), Symbol::from('C'), &alphabet);
        assert_eq!(text(&path), " ABC");
    }

    #[test]
    fn test_unknown_to_exhausts_ring() {
        let alphabet = board();
        let path = sequence(Symbol::from('W'), Symbol::from('!'), &alphabet);
        assert_eq!(text(&path), "XYZ!");
    }

    #[test]
    fn test_unknown_to_from_last_symbol() {
        let alphabet = board();
        let path = sequence(Symbol::from('Z'), Symbol::from('!'), &alphabet);
        assert_eq!(text(&path), "!");
    }

    #[test]
    fn test_default_alphabet_into_colours() {
        let alphabet = Alphabet::default();
        let path = sequence(Symbol::from('8'), Symbol::from('🟧'), &alphabet);
        assert_eq!(text(&path), "9🟥🟧");
    }

    #[test]
    fn test_distance_matches_sequence() {
        let alphabet = board();
        let samples = ["AC", "CA", "ZB", "!C", "W!", "!?", "QQ", " Z"];
        for pair in samples {
            let mut chars = pair.chars();
            let from = Symbol::from(chars.next().unwrap());
            let to = Symbol::from(chars.next().unwrap());
            assert_eq!(
                distance(from, to, &alphabet),
                sequence(from, to, &alphabet).len(),
                "pair {pair:?}"
            );
        }
    }
}
