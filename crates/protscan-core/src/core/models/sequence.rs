use super::residue::is_standard_residue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Sequence has no fragments")]
    EmptySequence,

    #[error("Invalid residue '{residue}' at position {position} of fragment {fragment}")]
    InvalidResidue {
        fragment: usize,
        position: usize,
        residue: char,
    },
}

/// Checks that `fragments` is non-empty and that every fragment consists only of the
/// 20 standard one-letter codes, in any case. Empty fragments are accepted and skipped.
///
/// Case folding is ASCII-only: a non-ASCII character is rejected even when its Unicode
/// uppercase form is a standard letter (`'ı'` uppercases to `'I'` but is invalid here).
/// The input is never modified; case normalization is left to the caller.
pub fn validate<S: AsRef<str>>(fragments: &[S]) -> Result<(), ValidationError> {
    if fragments.is_empty() {
        return Err(ValidationError::EmptySequence);
    }

    for (fragment_idx, fragment) in fragments.iter().enumerate() {
        for (position, c) in fragment.as_ref().chars().enumerate() {
            let valid = c.is_ascii() && is_standard_residue(c as u8);
            if !valid {
                return Err(ValidationError::InvalidResidue {
                    fragment: fragment_idx,
                    position,
                    residue: c,
                });
            }
        }
    }
    Ok(())
}

/// An amino-acid sequence as supplied by ingestion: an ordered list of fragments whose
/// concatenation is the semantic value. Fragment boundaries carry no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    fragments: Vec<String>,
}

impl Sequence {
    /// Builds a sequence after running [`validate`] on the fragments.
    pub fn new<I, S>(fragments: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sequence = Self::from_fragments_unchecked(fragments);
        validate(&sequence.fragments)?;
        Ok(sequence)
    }

    /// Builds a sequence without validation. Scorers tolerate unrecognized residues, so
    /// this is safe to score, but the result must not be trusted as a valid protein.
    pub fn from_fragments_unchecked<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits a chunked sequence cell such as `["MKV", "LLI"]` or `MKV,LLI` into fragments.
    /// Surrounding brackets and quotes are stripped and every piece is trimmed. A blank
    /// cell yields zero fragments.
    pub fn parse_chunks(cell: &str) -> Self {
        let body = cell.trim().trim_matches(|c| c == '[' || c == ']' || c == '"');
        if body.trim().is_empty() {
            return Self::default();
        }
        Self::from_fragments_unchecked(
            body.split(',')
                .map(|piece| piece.trim().trim_matches(|c| c == '"' || c == '\'').trim()),
        )
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.fragments)
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// The concatenation of all fragments in order.
    pub fn full(&self) -> String {
        self.fragments.concat()
    }

    /// Total number of residues (sum of fragment lengths).
    pub fn len(&self) -> usize {
        self.fragments.iter().map(String::len).sum()
    }

    /// `true` when the concatenated sequence has no residues, including the case of a
    /// non-empty list of empty fragments.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for Sequence {
    fn from(value: &str) -> Self {
        Self::from_fragments_unchecked([value])
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const STANDARD: &str = "ACDEFGHIKLMNPQRSTVWY";

    fn is_standard(c: char) -> bool {
        c.is_ascii() && STANDARD.contains(c.to_ascii_uppercase())
    }

    fn mixed_fragments() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[A-Za-z0-9 *ıÅ]{0,8}", 1..=5)
    }

    fn residue_fragments() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[ACDEFGHIKLMNPQRSTVWYacdefghiklmnpqrstvwy]{0,12}", 1..=5)
    }

    proptest! {
        #[test]
        fn valid_iff_every_residue_is_standard(fragments in mixed_fragments()) {
            let expected = fragments.iter().all(|f| f.chars().all(is_standard));
            prop_assert_eq!(validate(&fragments).is_ok(), expected);
        }

        #[test]
        fn first_invalid_residue_is_located(fragments in mixed_fragments()) {
            let first_bad = fragments.iter().enumerate().find_map(|(i, f)| {
                f.chars()
                    .enumerate()
                    .find(|&(_, c)| !is_standard(c))
                    .map(|(p, c)| (i, p, c))
            });
            match (validate(&fragments), first_bad) {
                (Ok(()), None) => {}
                (
                    Err(ValidationError::InvalidResidue { fragment, position, residue }),
                    Some((i, p, c)),
                ) => {
                    prop_assert_eq!((fragment, position, residue), (i, p, c));
                }
                (result, expected) => {
                    prop_assert!(false, "got {:?}, expected bad residue {:?}", result, expected);
                }
            }
        }

        #[test]
        fn standard_residues_validate_in_any_case(fragments in residue_fragments()) {
            prop_assert!(validate(&fragments).is_ok());
            let upper: Vec<String> = fragments.iter().map(|f| f.to_ascii_uppercase()).collect();
            prop_assert!(validate(&upper).is_ok());
        }

        #[test]
        fn sequence_length_is_sum_of_fragments(fragments in residue_fragments()) {
            let seq = Sequence::new(fragments.clone()).unwrap();
            prop_assert_eq!(seq.len(), fragments.iter().map(String::len).sum::<usize>());
            prop_assert_eq!(seq.full(), fragments.concat());
        }
    }
}
