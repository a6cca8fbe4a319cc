use chrono::{DateTime, Utc};
use semver::Version;
use serde::{Deserialize, Serialize};

/// One published release scraped from the updates page.
/// Immutable once constructed; only the catalog fetcher creates these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    #[serde(rename = "Release")]
    pub version: Version,
    #[serde(rename = "ReleaseDate")]
    pub release_date: DateTime<Utc>,
    #[serde(rename = "DownloadURL")]
    pub download_url: String,
}

#[derive(Debug, Deserialize)]
pub struct LicenseResponse {
    pub status: Option<i64>,
    pub data: Option<LicenseData>,
}

#[derive(Debug, Deserialize)]
pub struct LicenseData {
    pub current_update_expiration: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_release_serializes_with_wire_field_names() {
        let release = Release {
            version: Version::new(48, 2, 0),
            release_date: Utc.with_ymd_and_hms(2018, 1, 10, 0, 0, 0).unwrap(),
            download_url: String::from("https://download.sketchapp.com/sketch-48.2.zip"),
        };

        let json = serde_json::to_value(&release).unwrap();
        assert_eq!(json["Release"], "48.2.0");
        assert_eq!(
            json["DownloadURL"],
            "https://download.sketchapp.com/sketch-48.2.zip"
        );
        assert!(json["ReleaseDate"].as_str().unwrap().starts_with("2018-01-10"));
    }

    #[test]
    fn test_release_round_trips_through_wire_format() {
        let release = Release {
            version: Version::new(48, 2, 0),
            release_date: Utc.with_ymd_and_hms(2018, 1, 10, 0, 0, 0).unwrap(),
            download_url: String::from("https://download.sketchapp.com/sketch-48.2.zip"),
        };

        let json = serde_json::to_string(&release).unwrap();
        let decoded: Release = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, release);
    }

    #[test]
    fn test_release_deserializes_from_wire_field_names() {
        let body = r#"{
            "Release": "48.2.0",
            "ReleaseDate": "2018-01-10T00:00:00Z",
            "DownloadURL": "https://download.sketchapp.com/sketch-48.2.zip"
        }"#;

        let release: Release = serde_json::from_str(body).unwrap();
        assert_eq!(release.version, Version::new(48, 2, 0));
        assert_eq!(
            release.release_date,
            Utc.with_ymd_and_hms(2018, 1, 10, 0, 0, 0).unwrap()
        );
        assert_eq!(
            release.download_url,
            "https://download.sketchapp.com/sketch-48.2.zip"
        );
    }
}
