//! Plausibly-wrong spellings for the mistake narrative.
//!
//! A misspelling keeps a correct prefix of `k` letters and then appends `m`
//! random letters, with `1 <= k <= n - 2` and `1 <= m <= 2n - k - 1`, so the
//! result is never empty and never longer than `2n`.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Lowercase ASCII alphabet used for random letters
pub const LETTERS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Shortest word that can be misspelled
pub const MIN_MISSPELL_LEN: usize = 3;

/// Errors from misspelling generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MisspellError {
    #[error("Word '{word}' is too short to misspell: {len} < {MIN_MISSPELL_LEN} letters")]
    WordTooShort { word: String, len: usize },
}

/// Draw one letter uniformly from `a..=z`
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    // LETTERS is a non-empty constant
    char::from(*LETTERS.choose(rng).unwrap_or(&b'a'))
}

/// Produce a misspelled variant of `word`
///
/// # Errors
///
/// Returns `MisspellError::WordTooShort` for words with fewer than three letters,
/// where the prefix range would be empty.
pub fn misspell<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Result<String, MisspellError> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();

    if n < MIN_MISSPELL_LEN {
        return Err(MisspellError::WordTooShort {
            word: word.to_string(),
            len: n,
        });
    }

    let k = rng.gen_range(1..=n - 2);
    let m = rng.gen_range(1..=2 * n - k - 1);

    let mut misspelled: String = chars[..k].iter().collect();
    misspelled.extend((0..m).map(|_| random_letter(rng)));

    debug_assert!(misspelled.chars().count() <= 2 * n);
    Ok(misspelled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_misspell_keeps_prefix_and_bounds() {
        let word = "strawberry";
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let out = misspell(word, &mut rng).unwrap();

            let len = out.chars().count();
            assert!(len >= 2, "prefix plus at least one letter: {out}");
            assert!(len <= 2 * word.len(), "{out}");
            assert!(out.starts_with('s'));
            assert!(out.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_misspell_shortest_word() {
        // n = 3 forces k = 1, m in 1..=4
        for seed in 0..100 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let out = misspell("cat", &mut rng).unwrap();
            assert!(out.starts_with('c'));
            let len = out.len();
            assert!((2..=5).contains(&len), "{out}");
        }
    }

    #[test]
    fn test_misspell_too_short() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for word in ["", "a", "ab"] {
            let err = misspell(word, &mut rng).unwrap_err();
            assert_eq!(
                err,
                MisspellError::WordTooShort {
                    word: word.to_string(),
                    len: word.len()
                }
            );
        }
    }

    #[test]
    fn test_misspell_is_deterministic_per_stream() {
        let a = misspell("elephant", &mut ChaCha8Rng::seed_from_u64(11)).unwrap();
        let b = misspell("elephant", &mut ChaCha8Rng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_error_display() {
        let err = MisspellError::WordTooShort {
            word: "ab".to_string(),
            len: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("'ab'"));
        assert!(msg.contains("too short"));
    }

    #[test]
    fn test_random_letter_in_alphabet() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            assert!(random_letter(&mut rng).is_ascii_lowercase());
        }
    }
}
