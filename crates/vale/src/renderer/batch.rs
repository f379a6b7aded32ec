//! Parallel conversion of independent documents.

use super::{Options, to_vale_html};
use mdx2vast_core::VastError;
use rayon::prelude::*;

/// One document to convert.
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Caller-chosen identifier, typically the file path.
    pub id: String,
    /// MDX source text.
    pub source: String,
}

/// Conversion result for one [`BatchInput`].
#[derive(Debug)]
pub struct BatchOutput {
    /// Identifier copied from the input.
    pub id: String,
    /// Vale-ready HTML, or the error for this document alone.
    pub html: Result<String, VastError>,
}

/// Converts every input on the rayon pool.
///
/// Results keep input order. Each document resolves its own framework
/// profile, so one document's imports never affect another's output.
pub fn convert_batch(inputs: Vec<BatchInput>, options: &Options) -> Vec<BatchOutput> {
    log::debug!("Converting batch of {} documents", inputs.len());
    inputs
        .into_par_iter()
        .map(|input| BatchOutput {
            html: to_vale_html(&input.source, options),
            id: input.id,
        })
        .collect()
}
