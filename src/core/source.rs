use std::path::PathBuf;

use reqwest::Url;

use super::KaramoveError;

/// Base path baked in at build time; `settings.json` can override it.
pub const DEFAULT_BASE_URL: &str = match option_env!("KARAMOVE_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

const DATA_FILE: &str = "data.json";
const MUSIC_FILE: &str = "music.ogg";
const SEGMENTS_DIR: &str = "music-segments";

/// Where the payload and the audio files live: a web server or a local directory.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Remote(Url),
    Local(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Asset {
    Remote(Url),
    Local(PathBuf),
}

impl DataSource {
    pub fn parse(base: &str) -> Result<Self, KaramoveError> {
        let base = base.trim();
        if base.is_empty() {
            return Err(KaramoveError::InvalidBaseUrl("empty base path".to_string()));
        }

        let has_scheme = ["http://", "https://", "file://"]
            .iter()
            .any(|scheme| base.to_ascii_lowercase().starts_with(scheme));

        if !has_scheme {
            return Ok(DataSource::Local(PathBuf::from(base)));
        }

        // Url::join drops the last path segment unless it ends with a slash.
        let with_slash =
            if base.ends_with('/') { base.to_string() } else { format!("{}/", base) };
        let url = Url::parse(&with_slash)
            .map_err(|e| KaramoveError::InvalidBaseUrl(format!("{}: {}", base, e)))?;

        if url.scheme() == "file" {
            let path = url
                .to_file_path()
                .map_err(|_| KaramoveError::InvalidBaseUrl(base.to_string()))?;
            return Ok(DataSource::Local(path));
        }

        Ok(DataSource::Remote(url))
    }

    pub fn data(&self) -> Result<Asset, KaramoveError> {
        self.asset(DATA_FILE)
    }

    pub fn music(&self) -> Result<Asset, KaramoveError> {
        self.asset(MUSIC_FILE)
    }

    /// Clip `0` is the intro and `group_count + 1` the outro.
    pub fn segment(&self, position: usize) -> Result<Asset, KaramoveError> {
        self.asset(&format!("{}/{}.ogg", SEGMENTS_DIR, position))
    }

    fn asset(&self, relative: &str) -> Result<Asset, KaramoveError> {
        match self {
            DataSource::Remote(base) => base
                .join(relative)
                .map(Asset::Remote)
                .map_err(|e| KaramoveError::InvalidBaseUrl(format!("{}: {}", base, e))),
            DataSource::Local(dir) => Ok(Asset::Local(dir.join(relative))),
        }
    }
}

impl Asset {
    /// Link target handed to the system browser.
    pub fn href(&self) -> String {
        match self {
            Asset::Remote(url) => url.to_string(),
            Asset::Local(path) => Url::from_file_path(path)
                .map(|url| url.to_string())
                .unwrap_or_else(|_| path.display().to_string()),
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Remote(url) => write!(f, "{}", url),
            DataSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}
