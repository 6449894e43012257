use wordbank_core::Dataset;
use wordbank_core::parse::parse;

pub mod error;
pub mod source;

pub use error::LoadError;
pub use source::{FileSource, HttpSource, VocabSource, source_for};

/// Fetch a vocabulary source and parse it into a dataset.
///
/// Retrieval failures surface as [`LoadError`]; no partial dataset is ever
/// returned. The result replaces any dataset the caller was holding.
pub async fn load(source: &dyn VocabSource) -> Result<Dataset, LoadError> {
    let text = source.fetch().await?;
    let dataset = parse(&text);
    tracing::info!(
        "loaded {} entries across {} lessons from {}",
        dataset.len(),
        dataset.distinct_lessons().len(),
        source.describe()
    );
    Ok(dataset)
}

/// [`load`] over a path-or-URL spec.
pub async fn load_spec(spec: &str) -> Result<Dataset, LoadError> {
    load(source_for(spec).as_ref()).await
}
