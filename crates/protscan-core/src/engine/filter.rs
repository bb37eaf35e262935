use crate::core::models::protein::{AnnotationField, Protein};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const DEFAULT_PAGE_LIMIT: usize = 10;
pub const MAX_PAGE_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Id,
    Name,
    Length,
    MolecularWeight,
    IsoelectricPoint,
    Hydrophobicity,
}

/// Selection criteria over a set of proteins. Text criteria are case-insensitive
/// substring matches; range bounds are inclusive and a protein whose property has not
/// been computed never satisfies a bound on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProteinFilter {
    pub id: Option<String>,
    pub name: Option<String>,
    pub gene: Option<String>,
    pub family: Option<String>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_molecular_weight: Option<f64>,
    pub max_molecular_weight: Option<f64>,
    pub min_isoelectric_point: Option<f64>,
    pub max_isoelectric_point: Option<f64>,
    pub min_interactors: Option<u32>,
    pub max_interactors: Option<u32>,
    pub sort_by: SortKey,
    pub descending: bool,
    /// Page size; `0` selects the default and values above [`MAX_PAGE_LIMIT`] are capped.
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
}

fn contains_ignore_case(haystack: Option<&str>, needle: &Option<String>) -> bool {
    match needle {
        None => true,
        Some(needle) => haystack
            .is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase())),
    }
}

fn within<T: PartialOrd + Copy>(value: Option<T>, min: Option<T>, max: Option<T>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some(value) = value else {
        return false;
    };
    min.is_none_or(|m| value >= m) && max.is_none_or(|m| value <= m)
}

fn compare_optional(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl ProteinFilter {
    pub fn effective_limit(&self) -> usize {
        match self.limit {
            0 => DEFAULT_PAGE_LIMIT,
            n => n.min(MAX_PAGE_LIMIT),
        }
    }

    pub fn matches(&self, protein: &Protein) -> bool {
        let derived = protein.derived();
        let annotations = protein.annotations();

        contains_ignore_case(Some(protein.id()), &self.id)
            && contains_ignore_case(Some(protein.name()), &self.name)
            && contains_ignore_case(annotations.get(AnnotationField::Gene), &self.gene)
            && contains_ignore_case(annotations.get(AnnotationField::Family), &self.family)
            && within(derived.length, self.min_length, self.max_length)
            && within(
                derived.molecular_weight,
                self.min_molecular_weight,
                self.max_molecular_weight,
            )
            && within(
                derived.isoelectric_point,
                self.min_isoelectric_point,
                self.max_isoelectric_point,
            )
            && within(
                protein.interactor_count(),
                self.min_interactors,
                self.max_interactors,
            )
    }

    fn order(&self, a: &Protein, b: &Protein) -> Ordering {
        let (da, db) = (a.derived(), b.derived());
        let ordering = match self.sort_by {
            SortKey::Id => a.id().cmp(b.id()),
            SortKey::Name => a.name().cmp(b.name()),
            SortKey::Length => da.length.cmp(&db.length),
            SortKey::MolecularWeight => compare_optional(da.molecular_weight, db.molecular_weight),
            SortKey::IsoelectricPoint => {
                compare_optional(da.isoelectric_point, db.isoelectric_point)
            }
            SortKey::Hydrophobicity => compare_optional(da.hydrophobicity, db.hydrophobicity),
        };
        let ordering = ordering.then_with(|| a.id().cmp(b.id()));
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }

    /// Every matching protein in sort order, ignoring `limit` and `offset`.
    pub fn select<'a>(&self, proteins: &'a [Protein]) -> Vec<&'a Protein> {
        let mut selected: Vec<&Protein> = proteins.iter().filter(|p| self.matches(p)).collect();
        selected.sort_by(|a, b| self.order(a, b));
        selected
    }

    /// Selects, sorts and paginates `proteins`.
    pub fn apply<'a>(&self, proteins: &'a [Protein]) -> Page<&'a Protein> {
        let selected = self.select(proteins);
        let total = selected.len();
        let limit = self.effective_limit();
        let items: Vec<&Protein> = selected
            .into_iter()
            .skip(self.offset)
            .take(limit)
            .collect();
        let has_more = self.offset.saturating_add(items.len()) < total;

        Page {
            items,
            total,
            limit,
            offset: self.offset,
            has_more,
        }
    }
}
