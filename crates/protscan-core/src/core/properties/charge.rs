use super::composition::ResidueComposition;
use super::tables::{ChargeSign, IONIZABLE_SIDE_CHAINS, PKA_C_TERMINUS, PKA_N_TERMINUS};

/// The pH at which the full system reports a "physiological" net charge.
pub const PHYSIOLOGICAL_PH: f64 = 7.4;

/// Henderson-Hasselbalch net charge of a peptide at `ph`, given its residue composition.
///
/// Both termini are always counted, so an empty composition still carries the
/// free-amino-acid charge curve.
pub fn net_charge_of(composition: &ResidueComposition, ph: f64) -> f64 {
    let mut charge = 0.0;

    charge += 1.0 / (1.0 + 10f64.powf(ph - PKA_N_TERMINUS));
    charge -= 1.0 / (1.0 + 10f64.powf(PKA_C_TERMINUS - ph));

    for group in &IONIZABLE_SIDE_CHAINS {
        let count = composition.count(group.residue) as f64;
        match group.sign {
            ChargeSign::Acidic => charge -= count / (1.0 + 10f64.powf(group.pka - ph)),
            ChargeSign::Basic => charge += count / (1.0 + 10f64.powf(ph - group.pka)),
        }
    }

    charge
}

pub fn net_charge(sequence: &str, ph: f64) -> f64 {
    net_charge_of(&ResidueComposition::of(sequence), ph)
}
