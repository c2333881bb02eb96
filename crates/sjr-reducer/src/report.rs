//! Reduction result with statistics.

/// Byte budget derived from the original document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    /// Bytes held by the weighted string fields.
    pub data_size: usize,
    /// Bytes held by everything else: keys, punctuation, untargeted values.
    pub structure_size: i64,
    /// Bytes left to share between the weighted fields. May be `<= 0`.
    pub result_data_size: i64,
}

impl Budget {
    pub fn compute(original_size: usize, data_size: usize, max_size: usize) -> Self {
        let structure_size = original_size as i64 - data_size as i64;
        Self {
            data_size,
            structure_size,
            result_data_size: max_size as i64 - structure_size,
        }
    }

    /// Bytes field `original_len` may keep for a normalized weight.
    pub fn share(&self, real_weight: f64, original_len: usize) -> usize {
        let share = (self.result_data_size as f64 * real_weight).floor();
        if share <= 0.0 {
            0
        } else {
            (share as usize).min(original_len)
        }
    }
}

/// What happened to one weighted field. Lengths are in bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldReduction {
    pub path: String,
    pub real_weight: f64,
    pub original_len: usize,
    pub target_len: usize,
    pub final_len: usize,
}

impl FieldReduction {
    pub fn was_truncated(&self) -> bool {
        self.final_len < self.original_len
    }
}

#[derive(Debug, Clone)]
pub struct ReductionReport {
    pub output: String,
    pub original_len: usize,
    pub reduced_len: usize,
    pub max_size: usize,
    /// `None` when the input already fit and was returned untouched.
    pub budget: Option<Budget>,
    pub fields: Vec<FieldReduction>,
}

impl ReductionReport {
    pub fn unchanged(&self) -> bool {
        self.budget.is_none()
    }

    pub fn fits(&self) -> bool {
        self.reduced_len <= self.max_size
    }

    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.reduced_len as f64 / self.original_len as f64
    }

    pub fn truncated_fields(&self) -> impl Iterator<Item = &FieldReduction> {
        self.fields.iter().filter(|f| f.was_truncated())
    }
}
