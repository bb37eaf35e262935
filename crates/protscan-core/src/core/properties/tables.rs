//! Fixed per-residue constant tables, indexed by [`AminoAcid::index`].
//!
//! The tables are plain arrays so that every scorer can look up a residue in O(1)
//! without hashing or allocating.

use crate::core::models::residue::AminoAcid;

/// Mass of one water molecule released per peptide bond, in Daltons.
pub const WATER_MASS: f64 = 18.015;

/// Average free amino-acid masses in Daltons.
pub const RESIDUE_MASSES: [f64; 20] = [
    89.09,  // A
    121.16, // C
    133.10, // D
    147.13, // E
    165.19, // F
    75.07,  // G
    155.16, // H
    131.17, // I
    146.19, // K
    131.17, // L
    149.21, // M
    132.12, // N
    115.13, // P
    146.15, // Q
    174.20, // R
    105.09, // S
    119.12, // T
    117.15, // V
    204.23, // W
    181.19, // Y
];

/// Kyte-Doolittle (1982) hydropathy indices.
pub const KYTE_DOOLITTLE: [f64; 20] = [
    1.8,  // A
    2.5,  // C
    -3.5, // D
    -3.5, // E
    2.8,  // F
    -0.4, // G
    -3.2, // H
    4.5,  // I
    -3.9, // K
    3.8,  // L
    1.9,  // M
    -3.5, // N
    -1.6, // P
    -3.5, // Q
    -4.5, // R
    -0.8, // S
    -0.7, // T
    4.2,  // V
    -0.9, // W
    -1.3, // Y
];

pub const PKA_N_TERMINUS: f64 = 9.69;
pub const PKA_C_TERMINUS: f64 = 2.34;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeSign {
    /// Deprotonates to a negative charge (D, E, C, Y).
    Acidic,
    /// Protonates to a positive charge (H, K, R).
    Basic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IonizableGroup {
    pub residue: AminoAcid,
    pub pka: f64,
    pub sign: ChargeSign,
}

/// Side chains that carry charge, in a fixed evaluation order so the net-charge sum is
/// bit-for-bit reproducible.
pub const IONIZABLE_SIDE_CHAINS: [IonizableGroup; 7] = [
    IonizableGroup {
        residue: AminoAcid::Cysteine,
        pka: 8.5,
        sign: ChargeSign::Acidic,
    },
    IonizableGroup {
        residue: AminoAcid::AsparticAcid,
        pka: 3.9,
        sign: ChargeSign::Acidic,
    },
    IonizableGroup {
        residue: AminoAcid::GlutamicAcid,
        pka: 4.2,
        sign: ChargeSign::Acidic,
    },
    IonizableGroup {
        residue: AminoAcid::Histidine,
        pka: 6.0,
        sign: ChargeSign::Basic,
    },
    IonizableGroup {
        residue: AminoAcid::Lysine,
        pka: 10.5,
        sign: ChargeSign::Basic,
    },
    IonizableGroup {
        residue: AminoAcid::Arginine,
        pka: 12.5,
        sign: ChargeSign::Basic,
    },
    IonizableGroup {
        residue: AminoAcid::Tyrosine,
        pka: 10.1,
        sign: ChargeSign::Acidic,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::ALL;

    #[test]
    fn mass_table_is_strictly_positive() {
        assert!(RESIDUE_MASSES.iter().all(|&m| m > 0.0));
        assert_eq!(RESIDUE_MASSES[AminoAcid::Glycine.index()], 75.07);
        assert_eq!(RESIDUE_MASSES[AminoAcid::Tryptophan.index()], 204.23);
    }

    #[test]
    fn hydropathy_extremes_are_isoleucine_and_arginine() {
        let (max_idx, _) = KYTE_DOOLITTLE
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |acc, (i, &v)| if v > acc.1 { (i, v) } else { acc });
        let (min_idx, _) = KYTE_DOOLITTLE
            .iter()
            .enumerate()
            .fold((0, f64::MAX), |acc, (i, &v)| if v < acc.1 { (i, v) } else { acc });
        assert_eq!(ALL[max_idx], AminoAcid::Isoleucine);
        assert_eq!(ALL[min_idx], AminoAcid::Arginine);
    }

    #[test]
    fn ionizable_groups_are_distinct_and_correctly_signed() {
        let acidic: Vec<_> = IONIZABLE_SIDE_CHAINS
            .iter()
            .filter(|g| g.sign == ChargeSign::Acidic)
            .map(|g| g.residue.to_char())
            .collect();
        let basic: Vec<_> = IONIZABLE_SIDE_CHAINS
            .iter()
            .filter(|g| g.sign == ChargeSign::Basic)
            .map(|g| g.residue.to_char())
            .collect();
        assert_eq!(acidic, vec!['C', 'D', 'E', 'Y']);
        assert_eq!(basic, vec!['H', 'K', 'R']);
    }
}
