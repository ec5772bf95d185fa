use crate::core::ConfigProvider;
use crate::domain::model::{Job, OverflowPolicy};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsConfig {
    #[serde(default)]
    pub overflow: OverflowPolicy,
    #[serde(default)]
    pub continue_on_error: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CalcError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${GREETING})；未定義的變數保持原樣
    ///
    /// Values are spliced in as the body of a TOML basic string, so a
    /// `${VAR}` inside `"..."` yields the variable's exact text.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => escape_basic_string(&value),
                Err(_) => format!("${{{}}}", var_name),
            }
        });

        Ok(result.into_owned())
    }

    pub fn set_overflow(&mut self, policy: OverflowPolicy) {
        self.settings.overflow = policy;
    }
}

fn escape_basic_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04X}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

impl ConfigProvider for TomlConfig {
    fn overflow_policy(&self) -> OverflowPolicy {
        self.settings.overflow
    }

    fn continue_on_error(&self) -> bool {
        self.settings.continue_on_error
    }

    fn jobs(&self) -> &[Job] {
        &self.jobs
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty("jobs", &self.jobs)?;

        for (index, job) in self.jobs.iter().enumerate() {
            if let Job::Format { message } = job {
                validation::validate_no_nul(&format!("jobs[{}].message", index), message)?;
            }
        }

        Ok(())
    }
}
