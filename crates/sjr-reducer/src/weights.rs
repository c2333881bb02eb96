//! Field weights keyed by dotted path.

use serde_json::Value;
use sjr_core::error::{Result, SjrError};

/// Ordered mapping from dotted path to weight. Insertion order is the order
/// fields are truncated in; inserting an existing path replaces its weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightSpec {
    entries: Vec<(String, f64)>,
}

impl WeightSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, weight: f64) {
        let path = path.into();
        match self.entries.iter_mut().find(|(p, _)| *p == path) {
            Some(entry) => entry.1 = weight,
            None => self.entries.push((path, weight)),
        }
    }

    pub fn with(mut self, path: impl Into<String>, weight: f64) -> Self {
        self.insert(path, weight);
        self
    }

    /// Build from a JSON object of `path: number`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(SjrError::invalid("weights must be an object"));
        };
        if map.is_empty() {
            return Err(SjrError::invalid("weights must not be empty"));
        }
        let mut spec = Self::new();
        for (path, weight) in map {
            let weight = weight
                .as_f64()
                .ok_or_else(|| SjrError::invalid(format!("weight for \"{path}\" is not a number")))?;
            spec.insert(path.clone(), weight);
        }
        Ok(spec)
    }

    pub fn get(&self, path: &str) -> Option<f64> {
        self.entries.iter().find(|(p, _)| p == path).map(|(_, w)| *w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(p, w)| (p.as_str(), *w))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject an empty spec and weights that are negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(SjrError::invalid("weights must not be empty"));
        }
        for (path, weight) in self.iter() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SjrError::invalid(format!(
                    "weight for \"{path}\" must be a finite non-negative number, got {weight}"
                )));
            }
        }
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    /// Weights scaled so they sum to 1.0, in insertion order.
    pub fn normalized(&self) -> Result<Vec<(&str, f64)>> {
        self.validate()?;
        let total = self.total();
        if total == 0.0 {
            return Err(SjrError::DivisionByZero);
        }
        if !total.is_finite() {
            return Err(SjrError::invalid("total weight overflows"));
        }
        Ok(self.iter().map(|(p, w)| (p, w / total)).collect())
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for WeightSpec {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut spec = Self::new();
        for (path, weight) in iter {
            spec.insert(path, weight);
        }
        spec
    }
}

impl<K: Into<String>> Extend<(K, f64)> for WeightSpec {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        for (path, weight) in iter {
            self.insert(path, weight);
        }
    }
}

impl TryFrom<&Value> for WeightSpec {
    type Error = SjrError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_value(value)
    }
}
