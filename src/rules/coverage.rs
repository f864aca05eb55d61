//! Coverage of a rule in a learning table.

use super::confirmation::ContingencyTable;
use crate::error::CoverageError;

/// Which objects a rule covers, and which are positive or neutral for it.
///
/// Produced by whatever matches rule conditions against objects. Index
/// lists are stored sorted and without duplicates. Positive and neutral
/// indices are optional; measures that need a missing list stay unset.
///
/// Negative objects are those neither positive nor neutral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCoverageInformation {
    all_objects_count: usize,
    indices_of_covered_objects: Vec<usize>,
    indices_of_positive_objects: Option<Vec<usize>>,
    indices_of_neutral_objects: Option<Vec<usize>>,
}

impl RuleCoverageInformation {
    /// Creates coverage information with no positive/neutral data yet.
    ///
    /// # Errors
    ///
    /// [`CoverageError::IndexOutOfRange`] if a covered index is not below
    /// `all_objects_count`.
    pub fn new(
        all_objects_count: usize,
        indices_of_covered_objects: Vec<usize>,
    ) -> Result<Self, CoverageError> {
        Ok(Self {
            indices_of_covered_objects: normalize(indices_of_covered_objects, all_objects_count)?,
            all_objects_count,
            indices_of_positive_objects: None,
            indices_of_neutral_objects: None,
        })
    }

    /// Sets the objects whose decision matches the rule's decision part.
    pub fn with_positive_objects(mut self, indices: Vec<usize>) -> Result<Self, CoverageError> {
        let indices = normalize(indices, self.all_objects_count)?;
        if let Some(neutral) = &self.indices_of_neutral_objects {
            check_disjoint(&indices, neutral)?;
        }
        self.indices_of_positive_objects = Some(indices);
        Ok(self)
    }

    /// Sets the objects that are neither positive nor negative for the rule.
    pub fn with_neutral_objects(mut self, indices: Vec<usize>) -> Result<Self, CoverageError> {
        let indices = normalize(indices, self.all_objects_count)?;
        if let Some(positive) = &self.indices_of_positive_objects {
            check_disjoint(positive, &indices)?;
        }
        self.indices_of_neutral_objects = Some(indices);
        Ok(self)
    }

    /// Synthetic coverage of `a + b + c + d` objects reproducing the given
    /// contingency table, with no neutral objects.
    ///
    /// Objects `0..a` are covered positives, `a..a+b` uncovered positives,
    /// `a+b..a+b+c` covered negatives and the rest uncovered negatives.
    pub fn from_contingency(table: ContingencyTable) -> Self {
        let ContingencyTable { a, b, c, d } = table;
        let positive_end = a + b;
        let mut covered: Vec<usize> = (0..a).collect();
        covered.extend(positive_end..positive_end + c);
        Self {
            all_objects_count: a + b + c + d,
            indices_of_covered_objects: covered,
            indices_of_positive_objects: Some((0..positive_end).collect()),
            indices_of_neutral_objects: Some(Vec::new()),
        }
    }

    pub fn all_objects_count(&self) -> usize {
        self.all_objects_count
    }

    pub fn indices_of_covered_objects(&self) -> &[usize] {
        &self.indices_of_covered_objects
    }

    pub fn indices_of_positive_objects(&self) -> Option<&[usize]> {
        self.indices_of_positive_objects.as_deref()
    }

    pub fn indices_of_neutral_objects(&self) -> Option<&[usize]> {
        self.indices_of_neutral_objects.as_deref()
    }

    /// Number of covered objects, neutral ones included.
    pub fn coverage(&self) -> usize {
        self.indices_of_covered_objects.len()
    }

    pub fn positive_count(&self) -> Option<usize> {
        self.indices_of_positive_objects.as_ref().map(Vec::len)
    }

    pub fn neutral_count(&self) -> Option<usize> {
        self.indices_of_neutral_objects.as_ref().map(Vec::len)
    }

    /// Number of objects that are neither positive nor neutral.
    pub fn negative_count(&self) -> Option<usize> {
        let positive = self.positive_count()?;
        let neutral = self.neutral_count()?;
        Some(self.all_objects_count.saturating_sub(positive + neutral))
    }

    /// Covered positive objects (cell `a`).
    pub fn support(&self) -> Option<usize> {
        let positive = self.indices_of_positive_objects.as_ref()?;
        Some(
            self.indices_of_covered_objects
                .iter()
                .filter(|i| positive.binary_search(i).is_ok())
                .count(),
        )
    }

    /// Covered negative objects (cell `c`).
    pub fn negative_coverage(&self) -> Option<usize> {
        let positive = self.indices_of_positive_objects.as_ref()?;
        let neutral = self.indices_of_neutral_objects.as_ref()?;
        Some(
            self.indices_of_covered_objects
                .iter()
                .filter(|i| positive.binary_search(i).is_err() && neutral.binary_search(i).is_err())
                .count(),
        )
    }

    /// The four contingency cells, if positive and neutral objects are known.
    pub fn contingency_table(&self) -> Option<ContingencyTable> {
        let a = self.support()?;
        let c = self.negative_coverage()?;
        Some(ContingencyTable {
            a,
            b: self.positive_count()?.saturating_sub(a),
            c,
            d: self.negative_count()?.saturating_sub(c),
        })
    }
}

fn normalize(mut indices: Vec<usize>, all_objects_count: usize) -> Result<Vec<usize>, CoverageError> {
    if let Some(&index) = indices.iter().find(|&&i| i >= all_objects_count) {
        return Err(CoverageError::IndexOutOfRange {
            index,
            all_objects_count,
        });
    }
    indices.sort_unstable();
    indices.dedup();
    Ok(indices)
}

fn check_disjoint(positive: &[usize], neutral: &[usize]) -> Result<(), CoverageError> {
    match positive.iter().find(|i| neutral.binary_search(i).is_ok()) {
        Some(&index) => Err(CoverageError::OverlappingPositiveAndNeutral(index)),
        None => Ok(()),
    }
}
