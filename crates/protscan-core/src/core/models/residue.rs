use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    Alanine,       // A
    Cysteine,      // C
    AsparticAcid,  // D
    GlutamicAcid,  // E
    Phenylalanine, // F
    Glycine,       // G
    Histidine,     // H
    Isoleucine,    // I
    Lysine,        // K
    Leucine,       // L
    Methionine,    // M
    Asparagine,    // N
    Proline,       // P
    Glutamine,     // Q
    Arginine,      // R
    Serine,        // S
    Threonine,     // T
    Valine,        // V
    Tryptophan,    // W
    Tyrosine,      // Y
}

/// The 20 standard residues in one-letter alphabetical order.
/// `ALL[aa.index()] == aa` for every residue.
pub const ALL: [AminoAcid; 20] = [
    AminoAcid::Alanine,
    AminoAcid::Cysteine,
    AminoAcid::AsparticAcid,
    AminoAcid::GlutamicAcid,
    AminoAcid::Phenylalanine,
    AminoAcid::Glycine,
    AminoAcid::Histidine,
    AminoAcid::Isoleucine,
    AminoAcid::Lysine,
    AminoAcid::Leucine,
    AminoAcid::Methionine,
    AminoAcid::Asparagine,
    AminoAcid::Proline,
    AminoAcid::Glutamine,
    AminoAcid::Arginine,
    AminoAcid::Serine,
    AminoAcid::Threonine,
    AminoAcid::Valine,
    AminoAcid::Tryptophan,
    AminoAcid::Tyrosine,
];

// Indexed by `letter - b'A'`; `None` marks the six letters outside the alphabet.
static LETTER_LOOKUP: [Option<AminoAcid>; 26] = [
    Some(AminoAcid::Alanine),       // A
    None,                           // B
    Some(AminoAcid::Cysteine),      // C
    Some(AminoAcid::AsparticAcid),  // D
    Some(AminoAcid::GlutamicAcid),  // E
    Some(AminoAcid::Phenylalanine), // F
    Some(AminoAcid::Glycine),       // G
    Some(AminoAcid::Histidine),     // H
    Some(AminoAcid::Isoleucine),    // I
    None,                           // J
    Some(AminoAcid::Lysine),        // K
    Some(AminoAcid::Leucine),       // L
    Some(AminoAcid::Methionine),    // M
    Some(AminoAcid::Asparagine),    // N
    None,                           // O
    Some(AminoAcid::Proline),       // P
    Some(AminoAcid::Glutamine),     // Q
    Some(AminoAcid::Arginine),      // R
    Some(AminoAcid::Serine),        // S
    Some(AminoAcid::Threonine),     // T
    None,                           // U
    Some(AminoAcid::Valine),        // V
    Some(AminoAcid::Tryptophan),    // W
    None,                           // X
    Some(AminoAcid::Tyrosine),      // Y
    None,                           // Z
];

static THREE_LETTER_CODES: Map<&'static str, AminoAcid> = phf_map! {
    "ALA" => AminoAcid::Alanine,
    "CYS" => AminoAcid::Cysteine,
    "ASP" => AminoAcid::AsparticAcid,
    "GLU" => AminoAcid::GlutamicAcid,
    "PHE" => AminoAcid::Phenylalanine,
    "GLY" => AminoAcid::Glycine,
    "HIS" => AminoAcid::Histidine,
    "ILE" => AminoAcid::Isoleucine,
    "LYS" => AminoAcid::Lysine,
    "LEU" => AminoAcid::Leucine,
    "MET" => AminoAcid::Methionine,
    "ASN" => AminoAcid::Asparagine,
    "PRO" => AminoAcid::Proline,
    "GLN" => AminoAcid::Glutamine,
    "ARG" => AminoAcid::Arginine,
    "SER" => AminoAcid::Serine,
    "THR" => AminoAcid::Threonine,
    "VAL" => AminoAcid::Valine,
    "TRP" => AminoAcid::Tryptophan,
    "TYR" => AminoAcid::Tyrosine,
};

impl AminoAcid {
    /// Looks up a residue by its one-letter code, ignoring ASCII case.
    #[inline]
    pub fn from_byte(byte: u8) -> Option<Self> {
        let upper = byte.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            LETTER_LOOKUP[(upper - b'A') as usize]
        } else {
            None
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii() {
            Self::from_byte(c as u8)
        } else {
            None
        }
    }

    pub fn from_three_letter(code: &str) -> Option<Self> {
        THREE_LETTER_CODES
            .get(code.trim().to_ascii_uppercase().as_str())
            .copied()
    }

    /// Dense index in `0..20`, following the order of [`ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn to_char(self) -> char {
        match self {
            AminoAcid::Alanine => 'A',
            AminoAcid::Cysteine => 'C',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::GlutamicAcid => 'E',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Glycine => 'G',
            AminoAcid::Histidine => 'H',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Lysine => 'K',
            AminoAcid::Leucine => 'L',
            AminoAcid::Methionine => 'M',
            AminoAcid::Asparagine => 'N',
            AminoAcid::Proline => 'P',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Arginine => 'R',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Valine => 'V',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Tyrosine => 'Y',
        }
    }

    pub fn to_three_letter(self) -> &'static str {
        match self {
            AminoAcid::Alanine => "ALA",
            AminoAcid::Cysteine => "CYS",
            AminoAcid::AsparticAcid => "ASP",
            AminoAcid::GlutamicAcid => "GLU",
            AminoAcid::Phenylalanine => "PHE",
            AminoAcid::Glycine => "GLY",
            AminoAcid::Histidine => "HIS",
            AminoAcid::Isoleucine => "ILE",
            AminoAcid::Lysine => "LYS",
            AminoAcid::Leucine => "LEU",
            AminoAcid::Methionine => "MET",
            AminoAcid::Asparagine => "ASN",
            AminoAcid::Proline => "PRO",
            AminoAcid::Glutamine => "GLN",
            AminoAcid::Arginine => "ARG",
            AminoAcid::Serine => "SER",
            AminoAcid::Threonine => "THR",
            AminoAcid::Valine => "VAL",
            AminoAcid::Tryptophan => "TRP",
            AminoAcid::Tyrosine => "TYR",
        }
    }
}

/// Returns `true` if `byte` is one of the 20 standard one-letter codes, in either case.
#[inline]
pub fn is_standard_residue(byte: u8) -> bool {
    AminoAcid::from_byte(byte).is_some()
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown amino acid code: '{0}'")]
pub struct ParseAminoAcidError(pub String);

impl FromStr for AminoAcid {
    type Err = ParseAminoAcidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let parsed = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Self::from_three_letter(trimmed),
        };
        parsed.ok_or_else(|| ParseAminoAcidError(s.to_string()))
    }
}
