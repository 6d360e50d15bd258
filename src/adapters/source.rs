use crate::core::{MeetRecord, MeetSource};
use crate::utils::error::{MetricsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Csv,
    Json,
}

impl SourceFormat {
    pub fn from_path(path: &str) -> Result<Self> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(SourceFormat::Csv),
            Some("json") => Ok(SourceFormat::Json),
            _ => Err(MetricsError::InvalidConfigValueError {
                field: "source.path".to_string(),
                value: path.to_string(),
                reason: "Cannot tell the format from the extension; use .csv or .json"
                    .to_string(),
            }),
        }
    }

    pub fn parse(self, data: &[u8]) -> Result<Vec<MeetRecord>> {
        match self {
            SourceFormat::Csv => parse_csv_meets(data),
            SourceFormat::Json => Ok(serde_json::from_slice(data)?),
        }
    }
}

/// Reads a meet export with a header row. Empty cells count as absent.
pub fn parse_csv_meets(data: &[u8]) -> Result<Vec<MeetRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(data);

    let mut meets = Vec::new();
    for (index, row) in reader.deserialize::<MeetRecord>().enumerate() {
        match row {
            Ok(meet) => meets.push(meet),
            Err(e) => {
                tracing::error!("Meet export row {} is malformed: {}", index + 1, e);
                return Err(e.into());
            }
        }
    }
    Ok(meets)
}

/// Meets loaded from a `.csv` or `.json` export on disk.
#[derive(Debug, Clone)]
pub struct FileMeetSource {
    path: String,
    format: SourceFormat,
}

impl FileMeetSource {
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let format = SourceFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn with_format(path: impl Into<String>, format: SourceFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }
}

impl MeetSource for FileMeetSource {
    async fn fetch_meets(&self) -> Result<Vec<MeetRecord>> {
        tracing::debug!("Reading {:?} meets from {}", self.format, self.path);
        let data = tokio::fs::read(&self.path).await?;
        self.format.parse(&data)
    }
}

/// Meets already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticMeetSource {
    meets: Vec<MeetRecord>,
}

impl StaticMeetSource {
    pub fn new(meets: Vec<MeetRecord>) -> Self {
        Self { meets }
    }
}

impl MeetSource for StaticMeetSource {
    async fn fetch_meets(&self) -> Result<Vec<MeetRecord>> {
        Ok(self.meets.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::MeetId;

    #[test]
    fn test_format_from_path() {
        assert_eq!(SourceFormat::from_path("meets.csv").unwrap(), SourceFormat::Csv);
        assert_eq!(SourceFormat::from_path("Meets.JSON").unwrap(), SourceFormat::Json);
        assert!(SourceFormat::from_path("meets.txt").is_err());
    }

    #[test]
    fn test_parse_csv_with_snake_case_headers() {
        let csv = "id,name,date,location,height_cleared,deepest_takeoff,pole_used,place\n\
                   1,Spring Opener,2024-03-10,Portland,4.60m,\"12' 3\"\"\",,2\n";
        let meets = parse_csv_meets(csv.as_bytes()).unwrap();

        assert_eq!(meets.len(), 1);
        assert_eq!(meets[0].id, MeetId::Number(1));
        assert_eq!(meets[0].height_cleared.as_deref(), Some("4.60m"));
        assert_eq!(meets[0].deepest_takeoff.as_deref(), Some("12' 3\""));
        assert_eq!(meets[0].pole_used, None);
        assert_eq!(meets[0].place.as_deref(), Some("2"));
    }

    #[test]
    fn test_parse_json_meets() {
        let json = r#"[
            {"id": 7, "name": "Winter Classic", "date": "2024-01-20", "heightCleared": "NH"},
            {"id": "abc", "date": "2024-01-27", "poleUsed": "14' 150lbs"}
        ]"#;
        let meets = SourceFormat::Json.parse(json.as_bytes()).unwrap();

        assert_eq!(meets.len(), 2);
        assert_eq!(meets[0].height_cleared.as_deref(), Some("NH"));
        assert_eq!(meets[1].id, MeetId::Text("abc".to_string()));
        assert_eq!(meets[1].pole_used.as_deref(), Some("14' 150lbs"));
    }

    #[test]
    fn test_static_source() {
        let source = StaticMeetSource::new(vec![MeetRecord::new(1_i64, "2024-01-01")]);
        let meets = tokio_test::block_on(source.fetch_meets()).unwrap();
        assert_eq!(meets.len(), 1);
    }
}
