use super::charge::net_charge_of;
use super::composition::ResidueComposition;
use tracing::trace;

/// Parameters of the fixed-step isoelectric point search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoelectricParams {
    pub start_ph: f64,
    pub step: f64,
    /// The search stops once `|net charge|` drops below this value.
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for IsoelectricParams {
    fn default() -> Self {
        Self {
            start_ph: 7.0,
            step: 0.1,
            tolerance: 0.01,
            max_iterations: 100,
        }
    }
}

/// Estimates the isoelectric point with the default search parameters.
pub fn isoelectric_point(sequence: &str) -> f64 {
    isoelectric_point_with(sequence, &IsoelectricParams::default())
}

/// Walks the pH in fixed steps towards zero net charge: up while the charge is positive,
/// down while it is negative. Returns the first pH whose charge is within tolerance, or
/// the last pH reached when the iteration cap is hit.
pub fn isoelectric_point_with(sequence: &str, params: &IsoelectricParams) -> f64 {
    let composition = ResidueComposition::of(sequence);

    let mut ph = params.start_ph;
    for iteration in 0..params.max_iterations {
        let charge = net_charge_of(&composition, ph);
        if charge.abs() < params.tolerance {
            trace!(iteration, ph, charge, "Isoelectric point search converged.");
            return ph;
        }
        if charge > 0.0 {
            ph += params.step;
        } else {
            ph -= params.step;
        }
    }

    trace!(
        max_iterations = params.max_iterations,
        ph, "Isoelectric point search hit the iteration cap; returning last pH."
    );
    ph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncharged_sequence_converges_immediately_at_start_ph() {
        assert_eq!(isoelectric_point("AGLV"), 7.0);
        assert_eq!(isoelectric_point(""), 7.0);
    }

    #[test]
    fn acidic_sequence_lands_below_neutral() {
        let pi = isoelectric_point("DDDDDDDD");
        assert!(pi < 7.0);
        assert!((0.0..=14.0).contains(&pi));
    }

    #[test]
    fn basic_sequence_lands_above_neutral() {
        let pi = isoelectric_point("KKKKKKKK");
        assert!(pi > 7.0);
        assert!((0.0..=14.0).contains(&pi));
    }

    #[test]
    fn result_is_bit_for_bit_reproducible() {
        let seq = "MKVLLIDEHRKYCW";
        let first = isoelectric_point(seq);
        for _ in 0..10 {
            assert_eq!(isoelectric_point(seq).to_bits(), first.to_bits());
        }
    }

    #[test]
    fn iteration_cap_bounds_the_distance_travelled() {
        let params = IsoelectricParams {
            max_iterations: 3,
            ..Default::default()
        };
        let pi = isoelectric_point_with("DDDDDDDD", &params);
        assert!((pi - 6.7).abs() < 1e-9);
    }

    #[test]
    fn zero_iterations_returns_start_ph() {
        let params = IsoelectricParams {
            max_iterations: 0,
            start_ph: 5.5,
            ..Default::default()
        };
        assert_eq!(isoelectric_point_with("KKKK", &params), 5.5);
    }

    #[test]
    fn case_does_not_affect_result() {
        assert_eq!(isoelectric_point("mkdeh"), isoelectric_point("MKDEH"));
    }
}
