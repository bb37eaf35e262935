use crate::core::models::protein::{AnnotationField, Protein};
use serde::Serialize;
use std::collections::HashSet;

/// Summary statistics over a set of proteins. Averages only include proteins for which
/// the property is present and are `0.0` when none are.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProteinStats {
    pub total_proteins: usize,
    pub avg_length: f64,
    pub avg_molecular_weight: f64,
    pub avg_isoelectric_point: f64,
    pub avg_interactors: f64,
    pub avg_hydrophobicity: f64,
    pub total_genes: usize,
    pub total_families: usize,
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

impl ProteinStats {
    pub fn collect(proteins: &[Protein]) -> Self {
        let derived = || proteins.iter().map(Protein::derived);

        let distinct = |field: AnnotationField| {
            proteins
                .iter()
                .filter_map(|p| p.annotations().get(field))
                .collect::<HashSet<_>>()
                .len()
        };

        Self {
            total_proteins: proteins.len(),
            avg_length: mean(derived().filter_map(|d| d.length.map(|l| l as f64))),
            avg_molecular_weight: mean(derived().filter_map(|d| d.molecular_weight)),
            avg_isoelectric_point: mean(derived().filter_map(|d| d.isoelectric_point)),
            avg_interactors: mean(
                proteins
                    .iter()
                    .filter_map(|p| p.interactor_count().map(f64::from)),
            ),
            avg_hydrophobicity: mean(derived().filter_map(|d| d.hydrophobicity)),
            total_genes: distinct(AnnotationField::Gene),
            total_families: distinct(AnnotationField::Family),
        }
    }
}
