use klik_menu_core::{parse_records, ItemRecord, MenuError};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Where the menu records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSource {
    File(PathBuf),
    Remote(String),
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error(transparent)]
    Parse(#[from] MenuError),
}

impl MenuSource {
    /// `http://` and `https://` values are endpoints, anything else a path.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Remote(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }

    pub async fn fetch(&self) -> Result<Vec<ItemRecord>, SourceError> {
        let payload = match self {
            Self::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| SourceError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
            Self::Remote(url) => fetch_remote(url).await?,
        };

        let records = parse_records(&payload)?;
        debug!(source = %self, records = records.len(), "menu payload decoded");
        Ok(records)
    }
}

impl fmt::Display for MenuSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => f.write_str(url),
        }
    }
}

async fn fetch_remote(url: &str) -> Result<String, SourceError> {
    let http_error = |source| SourceError::Http {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(http_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(http_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn urls_select_the_remote_source() {
        assert_eq!(
            MenuSource::parse("https://klikcafe.net/_functions/menu"),
            MenuSource::Remote("https://klikcafe.net/_functions/menu".to_string())
        );
        assert_eq!(
            MenuSource::parse(" json/menuWentworth.json "),
            MenuSource::File(PathBuf::from("json/menuWentworth.json"))
        );
    }

    #[tokio::test]
    async fn reads_records_from_a_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        write!(
            file,
            r#"[{{"name": "Latte", "menuLevel1": "Drinks"}}, {{"name": "Stray"}}]"#
        )?;

        let records = MenuSource::File(file.path().to_path_buf()).fetch().await?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].group_key(), Some("Drinks"));
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let source = MenuSource::File(PathBuf::from("definitely/not/here/menu.json"));
        assert!(matches!(source.fetch().await, Err(SourceError::Io { .. })));
    }

    #[tokio::test]
    async fn malformed_payload_is_a_parse_error() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        write!(file, "{{\"not\": \"a list\"}}")?;

        let result = MenuSource::File(file.path().to_path_buf()).fetch().await;

        assert!(matches!(result, Err(SourceError::Parse(_))));
        Ok(())
    }
}
