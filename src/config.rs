use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_NAME: &str = "Skull";
pub const INPUT_EXTENSION: &str = "vol";
pub const OUTPUT_EXTENSION: &str = "json";

/// 转换配置：输入目录与文件基名
/// 输入为 {resource_dir}/{base_name}.vol，输出写到同目录的 {base_name}.json
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub resource_dir: PathBuf,
    pub base_name: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            resource_dir: PathBuf::from("."),
            base_name: DEFAULT_BASE_NAME.to_string(),
        }
    }
}

impl ConvertConfig {
    /// 从环境变量构建配置，未设置时使用默认值
    /// - VOL_RESOURCE_DIR: 输入/输出目录，默认 "."
    /// - VOL_BASE_NAME: 文件基名，默认 "Skull"
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let resource_dir = lookup("VOL_RESOURCE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.resource_dir);
        let base_name = lookup("VOL_BASE_NAME").unwrap_or(defaults.base_name);

        let config = Self {
            resource_dir,
            base_name,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_name.trim().is_empty() {
            return Err(Error::InvalidConfig("文件基名不能为空".to_string()));
        }
        Ok(())
    }

    pub fn input_path(&self) -> PathBuf {
        self.resource_dir
            .join(format!("{}.{}", self.base_name, INPUT_EXTENSION))
    }

    pub fn output_path(&self) -> PathBuf {
        self.resource_dir
            .join(format!("{}.{}", self.base_name, OUTPUT_EXTENSION))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::Path;

    use super::*;

    #[test]
    fn defaults_point_at_skull() {
        let config = ConvertConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ConvertConfig::default());
        assert_eq!(config.input_path(), Path::new("./Skull.vol"));
        assert_eq!(config.output_path(), Path::new("./Skull.json"));
    }

    #[test]
    fn environment_overrides_defaults() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("VOL_RESOURCE_DIR", "data"), ("VOL_BASE_NAME", "Engine")]);
        let config =
            ConvertConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.input_path(), Path::new("data/Engine.vol"));
        assert_eq!(config.output_path(), Path::new("data/Engine.json"));
    }

    #[test]
    fn empty_base_name_is_rejected() {
        let result = ConvertConfig::from_lookup(|key| {
            (key == "VOL_BASE_NAME").then(|| "  ".to_string())
        });
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
