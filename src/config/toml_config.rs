use crate::adapters::SourceFormat;
use crate::core::{ConfigProvider, TrendRange};
use crate::metrics::PoleMetric;
use crate::utils::error::{MetricsError, Result};
use crate::utils::validation::{
    validate_date, validate_file_extension, validate_non_empty_string, validate_output_formats,
    validate_path, Validate, SUPPORTED_INPUT_EXTENSIONS,
};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("invalid regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub trends: TrendsConfig,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
    /// Overrides detection from the file extension.
    pub format: Option<SourceFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendsConfig {
    #[serde(default)]
    pub range: TrendRange,
    #[serde(default)]
    pub pole_metric: PoleMetric,
    pub today: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub csv: Option<String>,
    pub json: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MetricsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| MetricsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MEETS_FILE})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_REGEX
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn source_format(&self) -> Result<SourceFormat> {
        match self.source.format {
            Some(format) => Ok(format),
            None => SourceFormat::from_path(&self.source.path),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("pipeline.name", &self.pipeline.name)?;

        validate_path("source.path", &self.source.path)?;
        if self.source.format.is_none() {
            validate_file_extension("source.path", &self.source.path, SUPPORTED_INPUT_EXTENSIONS)?;
        }

        if let Some(today) = &self.trends.today {
            validate_date("trends.today", today)?;
        }

        validate_path("load.output_path", &self.load.output_path)?;
        validate_output_formats("load.output_formats", &self.load.output_formats)?;

        if let Some(filenames) = &self.load.filenames {
            let configured = [
                ("load.filenames.csv", &filenames.csv),
                ("load.filenames.json", &filenames.json),
            ];
            for (field, name) in configured {
                if let Some(name) = name {
                    validate_path(field, name)?;
                }
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn range(&self) -> TrendRange {
        self.trends.range
    }

    fn pole_metric(&self) -> PoleMetric {
        self.trends.pole_metric
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn reference_date(&self) -> Option<NaiveDate> {
        self.trends
            .today
            .as_deref()
            .and_then(|today| validate_date("trends.today", today).ok())
    }

    fn output_filename(&self, format: &str) -> String {
        let configured = self.load.filenames.as_ref().and_then(|names| match format {
            "csv" => names.csv.clone(),
            "json" => names.json.clone(),
            _ => None,
        });
        configured.unwrap_or_else(|| format!("trends.{}", format))
    }
}
