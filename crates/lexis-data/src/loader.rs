//! Concurrent loading of the two collections.
//!
//! Both fetches are issued together and joined before anything renders. A
//! collection that fails to load is logged and replaced with an empty one;
//! empty collections are a valid display state, never an error.

use lexis_core::{DataContext, Fact, Term};
use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::source::DataSource;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Fetches collections from files or HTTP URLs.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    http: reqwest::Client,
}

impl Loader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load both collections concurrently, degrading each failure to an empty
    /// collection.
    pub async fn load(&self, terms: &DataSource, facts: &DataSource) -> DataContext {
        let (terms_result, facts_result) =
            tokio::join!(self.fetch::<Term>(terms), self.fetch::<Fact>(facts));

        let terms = or_empty("terms", terms, terms_result);
        let facts = or_empty("facts", facts, facts_result);
        tracing::debug!(terms = terms.len(), facts = facts.len(), "collections loaded");

        DataContext::new(terms, facts)
    }

    /// Fetch and parse one JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the source cannot be read or the payload is
    /// not a JSON array of `T`. A leading UTF-8 byte order mark is ignored.
    pub async fn fetch<T: DeserializeOwned>(&self, source: &DataSource) -> Result<Vec<T>, LoadError> {
        let bytes = match source {
            DataSource::Path(path) => {
                tokio::fs::read(path).await.map_err(|error| LoadError::Io {
                    path: path.display().to_string(),
                    source: error,
                })?
            }
            DataSource::Url(url) => self.get(url).await?,
        };

        let payload = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes.as_slice());
        serde_json::from_slice(payload).map_err(|error| LoadError::Json {
            origin: source.to_string(),
            source: error,
        })
    }

    async fn get(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(LoadError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.bytes().await?.to_vec())
    }
}

fn or_empty<T>(kind: &str, source: &DataSource, result: Result<Vec<T>, LoadError>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(error) => {
            tracing::warn!(%error, %source, "failed to load {kind}; continuing with none");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn json_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[tokio::test]
    async fn loads_both_collections_from_files() {
        let terms = json_file(r#"[{"term": "lucid", "shortDefinition": "clear"}, {"term": "terse"}]"#);
        let facts = json_file(r#"[{"fact": "Honey never spoils."}]"#);

        let ctx = Loader::new()
            .load(
                &DataSource::Path(terms.path().to_path_buf()),
                &DataSource::Path(facts.path().to_path_buf()),
            )
            .await;

        assert_eq!(ctx.terms().len(), 2);
        assert_eq!(ctx.terms()[0].short_definition(), Some("clear"));
        assert_eq!(ctx.facts(), &[Fact::new("Honey never spoils.")]);
    }

    #[tokio::test]
    async fn missing_file_degrades_to_empty() {
        let facts = json_file(r#"[{"fact": "Octopuses have three hearts."}]"#);
        let dir = tempfile::tempdir().expect("temp dir");

        let ctx = Loader::new()
            .load(
                &DataSource::Path(dir.path().join("nope.json")),
                &DataSource::Path(facts.path().to_path_buf()),
            )
            .await;

        assert!(ctx.terms().is_empty());
        assert_eq!(ctx.facts().len(), 1);
    }

    #[tokio::test]
    async fn malformed_json_degrades_to_empty() {
        let terms = json_file(r#"{"term": "not an array"}"#);
        let facts = json_file("[{\"fact\": ");

        let ctx = Loader::new()
            .load(
                &DataSource::Path(terms.path().to_path_buf()),
                &DataSource::Path(facts.path().to_path_buf()),
            )
            .await;

        assert_eq!(ctx, DataContext::empty());
    }

    #[tokio::test]
    async fn null_optional_fields_keep_the_collection() {
        let terms = json_file(
            r#"[
                {"term": "lucid", "tags": null},
                {"term": "terse"},
                {"term": "cogent", "sources": null},
                {"term": "brisk", "shortDefinition": null}
            ]"#,
        );
        let facts = json_file(r#"[{"fact": null}]"#);

        let ctx = Loader::new()
            .load(
                &DataSource::Path(terms.path().to_path_buf()),
                &DataSource::Path(facts.path().to_path_buf()),
            )
            .await;

        let names: Vec<&str> = ctx.terms().iter().map(|t| t.term.as_str()).collect();
        assert_eq!(names, vec!["lucid", "terse", "cogent", "brisk"]);
        assert!(ctx.terms()[0].tags.is_empty());
        assert!(ctx.terms()[2].sources.is_empty());
        assert_eq!(ctx.facts(), &[Fact::default()]);
    }

    #[tokio::test]
    async fn byte_order_mark_is_skipped() {
        let terms = json_file("\u{feff}[{\"term\": \"lucid\"}]");
        let source = DataSource::Path(terms.path().to_path_buf());

        let loaded = Loader::new()
            .fetch::<Term>(&source)
            .await
            .expect("bom-prefixed json should parse");
        assert_eq!(loaded, vec![Term::new("lucid")]);
    }

    #[tokio::test]
    async fn fetch_reports_json_errors_with_origin() {
        let terms = json_file("not json");
        let source = DataSource::Path(terms.path().to_path_buf());

        let err = Loader::new()
            .fetch::<Term>(&source)
            .await
            .expect_err("invalid json");
        assert!(matches!(err, LoadError::Json { ref origin, .. } if *origin == source.to_string()));
    }

    #[tokio::test]
    async fn unreachable_url_degrades_to_empty() {
        let ctx = Loader::new()
            .load(
                &DataSource::Url("http://127.0.0.1:9/words.json".into()),
                &DataSource::Url("http://127.0.0.1:9/facts.json".into()),
            )
            .await;

        assert_eq!(ctx, DataContext::empty());
    }
}
