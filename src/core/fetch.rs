use std::time::Duration;

use reqwest::{
    header::USER_AGENT,
    Client,
    Response,
};
use tracing::info;

use super::{
    models::Data,
    source::{
        Asset,
        DataSource,
    },
    KaramoveError,
    Roster,
};

pub fn http_client() -> Result<Client, KaramoveError> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| KaramoveError::Custom(format!("HTTP client build failed: {e}")))
}

/// Loads `data.json` once and validates it. There is no retry.
pub async fn load_roster(source: &DataSource) -> Result<Roster, KaramoveError> {
    let asset = source.data()?;
    info!(location = %asset.href(), "Fetching roster");

    let bytes = match &asset {
        Asset::Remote(url) => {
            let resp = http_client()?
                .get(url.clone())
                .header(USER_AGENT, concat!("karamove/", env!("CARGO_PKG_VERSION")))
                .send()
                .await?;
            ensure_success(&resp)?;
            resp.bytes().await?.to_vec()
        }
        Asset::Local(path) => tokio::fs::read(path).await?,
    };

    let roster = parse_roster(&bytes)?;
    info!(groups = roster.groups.len(), year = roster.year, "Roster loaded");
    Ok(roster)
}

pub fn parse_roster(bytes: &[u8]) -> Result<Roster, KaramoveError> {
    let data: Data = serde_json::from_slice(bytes)?;
    Roster::from_data(data)
}

fn ensure_success(resp: &Response) -> Result<(), KaramoveError> {
    if !resp.status().is_success() {
        return Err(KaramoveError::Http {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const PAYLOAD: &str = r#"{
        "groups": [{
            "name": "Castors",
            "location": 0,
            "link": "https://drive.example/castors",
            "timeInterval": null,
            "members": [{
                "id": 4,
                "name": "Ada",
                "discordName": "",
                "profile": 0,
                "level": 3,
                "preferredTechniques": [1],
                "knownTechniques": [1, 4]
            }]
        }],
        "profiles": ["ENSAD"],
        "time": null,
        "withMusic": false,
        "year": 2025
    }"#;

    #[test]
    fn test_parse_roster() {
        let roster = parse_roster(PAYLOAD.as_bytes()).unwrap();
        assert_eq!(roster.year, 2025);
        assert!(roster.groups[0].members[0].discord_name.is_none());
    }

    #[test]
    fn test_parse_roster_rejects_garbage() {
        assert!(matches!(parse_roster(b"{\"groups\": 3}"), Err(KaramoveError::Json(_))));
    }

    #[test]
    fn test_load_roster_from_local_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("data.json"), PAYLOAD).unwrap();

        let source = DataSource::Local(dir.path().to_path_buf());
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let roster = runtime.block_on(load_roster(&source)).unwrap();
        assert_eq!(roster.groups[0].name, "Castors");
    }

    #[test]
    fn test_load_roster_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = DataSource::Local(dir.path().to_path_buf());
        let runtime = tokio::runtime::Runtime::new().unwrap();
        assert!(matches!(runtime.block_on(load_roster(&source)), Err(KaramoveError::Io(_))));
    }
}
