//! Weighted reducer: shortens chosen string fields until the document fits a
//! byte budget.
//!
//! Sizes are measured once, on the original document. Every weighted field
//! gets `floor(result_data_size * real_weight)` bytes, clamped to
//! `[0, original_len]`, and is then cut to that many characters of the
//! configured encoding. Fields are not re-measured between cuts, so the
//! result lands near the budget rather than exactly on it.
//!
//! Cut values are written back through [`path::get_mut`], so a literal dotted
//! key such as `"a.b"` is shortened in place; [`path::set`] would instead
//! create a nested `a` → `b` entry.

use crate::codec::{Codec, JsonCodec};
use crate::report::{Budget, FieldReduction, ReductionReport};
use crate::weights::WeightSpec;
use serde_json::Value;
use sjr_core::config::ReducerConfig;
use sjr_core::error::{Result, SjrError};
use sjr_core::path;
use std::borrow::Cow;
use tracing::{debug, trace, warn};

pub struct Reducer<C = JsonCodec> {
    config: ReducerConfig,
    codec: C,
}

impl Reducer<JsonCodec> {
    pub fn new(config: ReducerConfig) -> Self {
        Self::with_codec(config, JsonCodec)
    }
}

impl Default for Reducer<JsonCodec> {
    fn default() -> Self {
        Self::new(ReducerConfig::default())
    }
}

impl<C: Codec> Reducer<C> {
    pub fn with_codec(config: ReducerConfig, codec: C) -> Self {
        Self { config, codec }
    }

    pub fn config(&self) -> &ReducerConfig {
        &self.config
    }

    /// Reduce an encoded document. Input that already fits is borrowed back
    /// untouched without being decoded.
    pub fn reduce<'a>(
        &self,
        json: &'a [u8],
        max_size: usize,
        weights: &WeightSpec,
    ) -> Result<Cow<'a, [u8]>> {
        if json.len() <= max_size {
            trace!(len = json.len(), max_size, "document already fits");
            return Ok(Cow::Borrowed(json));
        }
        let tree = self.codec.decode(json).map_err(SjrError::Decode)?;
        let (tree, _) = self.reduce_tree(tree, json.len(), max_size, weights)?;
        let out = self.encode(&tree, max_size)?;
        Ok(Cow::Owned(out))
    }

    /// [`Reducer::reduce`] for text input.
    pub fn reduce_str<'a>(
        &self,
        json: &'a str,
        max_size: usize,
        weights: &WeightSpec,
    ) -> Result<Cow<'a, str>> {
        match self.reduce(json.as_bytes(), max_size, weights)? {
            Cow::Borrowed(_) => Ok(Cow::Borrowed(json)),
            Cow::Owned(bytes) => String::from_utf8(bytes)
                .map(Cow::Owned)
                .map_err(|e| SjrError::Encode(e.into())),
        }
    }

    /// Reduce an already decoded tree. `original_size` is the encoded size
    /// of `tree` the budget is computed from.
    pub fn reduce_value(
        &self,
        tree: Value,
        original_size: usize,
        max_size: usize,
        weights: &WeightSpec,
    ) -> Result<Value> {
        if original_size <= max_size {
            return Ok(tree);
        }
        self.reduce_tree(tree, original_size, max_size, weights)
            .map(|(tree, _)| tree)
    }

    /// Reduce text input and report what was cut.
    pub fn reduce_with_report(
        &self,
        json: &str,
        max_size: usize,
        weights: &WeightSpec,
    ) -> Result<ReductionReport> {
        let original_len = json.len();
        if original_len <= max_size {
            return Ok(ReductionReport {
                output: json.to_string(),
                original_len,
                reduced_len: original_len,
                max_size,
                budget: None,
                fields: Vec::new(),
            });
        }

        let tree = self.codec.decode(json.as_bytes()).map_err(SjrError::Decode)?;
        let (tree, reduction) = self.reduce_tree(tree, original_len, max_size, weights)?;
        let output = String::from_utf8(self.encode(&tree, max_size)?)
            .map_err(|e| SjrError::Encode(e.into()))?;

        Ok(ReductionReport {
            reduced_len: output.len(),
            output,
            original_len,
            max_size,
            budget: Some(reduction.budget),
            fields: reduction.fields,
        })
    }

    fn reduce_tree(
        &self,
        mut tree: Value,
        original_size: usize,
        max_size: usize,
        weights: &WeightSpec,
    ) -> Result<(Value, Reduction)> {
        let real_weights = weights.normalized()?;

        let data_size = real_weights
            .iter()
            .map(|(p, _)| string_at(&tree, p).map(str::len))
            .sum::<Result<usize>>()?;
        let budget = Budget::compute(original_size, data_size, max_size);
        debug!(
            original_size,
            max_size,
            fields = real_weights.len(),
            data_size,
            structure_size = budget.structure_size,
            result_data_size = budget.result_data_size,
            "reducing document"
        );

        let encoding = self.config.encoding;
        let mut fields = Vec::with_capacity(real_weights.len());
        for (p, real_weight) in real_weights {
            if !path::has_path(&tree, p) {
                return Err(SjrError::path_not_found(p));
            }
            let original = string_at(&tree, p)?;
            let original_len = original.len();
            let target_len = budget.share(real_weight, original_len);
            let cut = encoding.truncate(original, target_len).to_string();
            let final_len = cut.len();

            let slot = path::get_mut(&mut tree, p).ok_or_else(|| SjrError::path_not_found(p))?;
            *slot = Value::String(cut);

            debug!(path = p, original_len, target_len, final_len, "truncated field");
            fields.push(FieldReduction {
                path: p.to_string(),
                real_weight,
                original_len,
                target_len,
                final_len,
            });
        }

        Ok((tree, Reduction { budget, fields }))
    }

    fn encode(&self, tree: &Value, max_size: usize) -> Result<Vec<u8>> {
        let out = self.codec.encode(tree).map_err(SjrError::Encode)?;
        if out.len() > max_size {
            warn!(len = out.len(), max_size, "reduced document still exceeds budget");
        }
        Ok(out)
    }
}

struct Reduction {
    budget: Budget,
    fields: Vec<FieldReduction>,
}

fn string_at<'a>(tree: &'a Value, p: &str) -> Result<&'a str> {
    match path::get(tree, p) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(SjrError::NotAString { path: p.to_string() }),
        None => Err(SjrError::path_not_found(p)),
    }
}
