//! Weighted JSON reducer.
//!
//! Shrinks an encoded JSON document to a byte budget by cutting chosen
//! string fields in proportion to their weights. Keys, nesting and every
//! other value are left as they are.
//!
//! ```
//! use sjr_reducer::{reduce, WeightSpec};
//!
//! let json = r#"{"title":"a fairly long title","body":"an even longer body of text"}"#;
//! let weights = WeightSpec::new().with("title", 1.0).with("body", 3.0);
//! let out = reduce(json, 50, &weights, None).unwrap();
//! assert!(out.len() <= 50);
//! ```

pub mod codec;
pub mod reducer;
pub mod report;
pub mod weights;

pub use codec::{Codec, JsonCodec};
pub use reducer::Reducer;
pub use report::{Budget, FieldReduction, ReductionReport};
pub use sjr_core::{Encoding, ReducerConfig, Result, SjrError};
pub use weights::WeightSpec;

/// One-shot reduction with the default JSON codec. `encoding` defaults to
/// UTF-8.
pub fn reduce(
    json: &str,
    max_size: usize,
    weights: &WeightSpec,
    encoding: Option<Encoding>,
) -> Result<String> {
    let config = ReducerConfig::new().with_encoding(encoding.unwrap_or_default());
    Reducer::new(config)
        .reduce_str(json, max_size, weights)
        .map(|out| out.into_owned())
}
