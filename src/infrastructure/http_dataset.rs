// Remote dataset repository implementation
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::record::{parse_race_time, RaceRecord};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct HttpDatasetRepository {
    url: String,
}

/// Wire format of one dataset entry. Fields the chart does not use
/// (Place, Seconds, URL) are left to serde to ignore.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Nationality")]
    nationality: String,
    #[serde(rename = "Doping")]
    doping: String,
}

impl HttpDatasetRepository {
    pub fn new(url: String) -> Self {
        Self { url }
    }

    fn to_records(raw: Vec<RawRecord>) -> Result<Vec<RaceRecord>> {
        raw.into_iter()
            .map(|r| {
                let time = parse_race_time(&r.time)
                    .with_context(|| format!("record for year {} has a bad time", r.year))?;
                Ok(RaceRecord::new(r.year, time, r.name, r.nationality, r.doping))
            })
            .collect()
    }
}

#[async_trait]
impl DatasetRepository for HttpDatasetRepository {
    async fn fetch_records(&self) -> Result<Vec<RaceRecord>> {
        let client = reqwest::Client::new();
        let response = client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to request the race dataset")?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("dataset request failed with status {}", status);
        }

        let raw = response
            .json::<Vec<RawRecord>>()
            .await
            .context("Failed to parse the race dataset")?;

        Self::to_records(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"Time": "36:50", "Place": 1, "Seconds": 2210, "Name": "Marco Pantani",
         "Year": 1994, "Nationality": "ITA", "Doping": "Alleged drug use during 1994 Giro d'Italia", "URL": ""},
        {"Time": "38:01", "Place": 2, "Seconds": 2281, "Name": "Nairo Quintana",
         "Year": 2015, "Nationality": "COL", "Doping": "", "URL": ""}
    ]"#;

    #[test]
    fn test_to_records_shapes_the_wire_format() {
        let raw: Vec<RawRecord> = serde_json::from_str(SAMPLE).unwrap();
        let records = HttpDatasetRepository::to_records(raw).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, 1994);
        assert_eq!(records[0].time_iso(), "1970-01-01T00:36:50.000Z");
        assert!(records[0].doping_flagged());
        assert_eq!(records[1].nationality, "COL");
        assert!(!records[1].doping_flagged());
    }

    #[test]
    fn test_to_records_rejects_a_bad_time_string() {
        let raw: Vec<RawRecord> = serde_json::from_str(
            r#"[{"Time": "fast", "Name": "n", "Year": 2000, "Nationality": "FRA", "Doping": ""}]"#,
        )
        .unwrap();
        assert!(HttpDatasetRepository::to_records(raw).is_err());
    }
}
