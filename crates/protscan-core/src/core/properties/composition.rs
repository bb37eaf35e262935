use super::tables::{KYTE_DOOLITTLE, RESIDUE_MASSES, WATER_MASS};
use crate::core::models::residue::{ALL, AminoAcid};

/// Average molecular weight in Daltons: the sum of free amino-acid masses minus one water
/// per peptide bond. `N` counts every byte of `sequence`, including unrecognized ones,
/// which themselves contribute no mass.
pub fn molecular_weight(sequence: &str) -> f64 {
    let mut total = 0.0;
    for byte in sequence.bytes() {
        if let Some(aa) = AminoAcid::from_byte(byte) {
            total += RESIDUE_MASSES[aa.index()];
        }
    }

    let n = sequence.len();
    if n > 1 {
        total -= (n - 1) as f64 * WATER_MASS;
    }
    total
}

/// Grand average of hydropathy over recognized residues; `0.0` when none are recognized.
pub fn hydrophobicity(sequence: &str) -> f64 {
    let mut total = 0.0;
    let mut recognized = 0usize;
    for byte in sequence.bytes() {
        if let Some(aa) = AminoAcid::from_byte(byte) {
            total += KYTE_DOOLITTLE[aa.index()];
            recognized += 1;
        }
    }

    if recognized == 0 {
        0.0
    } else {
        total / recognized as f64
    }
}

/// Per-residue counts over a full sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResidueComposition {
    counts: [usize; 20],
    unrecognized: usize,
}

impl ResidueComposition {
    pub fn of(sequence: &str) -> Self {
        let mut composition = Self::default();
        for byte in sequence.bytes() {
            match AminoAcid::from_byte(byte) {
                Some(aa) => composition.counts[aa.index()] += 1,
                None => composition.unrecognized += 1,
            }
        }
        composition
    }

    #[inline]
    pub fn count(&self, aa: AminoAcid) -> usize {
        self.counts[aa.index()]
    }

    pub fn recognized(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn unrecognized(&self) -> usize {
        self.unrecognized
    }

    /// Share of `aa` among recognized residues, or `0.0` for an empty composition.
    pub fn fraction(&self, aa: AminoAcid) -> f64 {
        let total = self.recognized();
        if total == 0 {
            0.0
        } else {
            self.count(aa) as f64 / total as f64
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AminoAcid, usize)> + '_ {
        ALL.iter().map(move |&aa| (aa, self.count(aa)))
    }
}
