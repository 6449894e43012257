use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// Where raw vocabulary text comes from.
#[async_trait::async_trait]
pub trait VocabSource: Send + Sync {
    /// Retrieve the raw comma-separated text.
    async fn fetch(&self) -> Result<String, LoadError>;

    /// Human-readable location, for log lines and error messages.
    fn describe(&self) -> String;
}

/// Vocabulary file on the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl VocabSource for FileSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Vocabulary file served over HTTP.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    /// Use a caller-configured client, e.g. one with a request timeout.
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait::async_trait]
impl VocabSource for HttpSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Resolve a path-or-URL spec to the matching source.
pub fn source_for(spec: &str) -> Box<dyn VocabSource> {
    if spec.starts_with("http://") || spec.starts_with("https://") {
        Box::new(HttpSource::new(spec))
    } else {
        Box::new(FileSource::new(spec))
    }
}
