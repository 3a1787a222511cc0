//! 解码配置
//!
//! 解码流水线的运行参数，可从JSON文本加载

use serde::{Deserialize, Serialize};

use crate::error::NavResult;

/// 解码配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// 数据位已去除D30*反相
    pub known_upright: bool,
    /// 拒绝奇偶校验失败的子帧
    pub check_parity: bool,
    /// 截断周数消歧所用的完整GPS周
    pub reference_week: i32,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            known_upright: true,
            check_parity: true,
            reference_week: 0,
        }
    }
}

impl DecodeConfig {
    /// 从JSON文本加载配置，缺省字段取默认值
    pub fn from_json(text: &str) -> NavResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> NavResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_reference_week(mut self, week: i32) -> Self {
        self.reference_week = week;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, NavError};

    #[test]
    fn test_default_config() {
        let config = DecodeConfig::default();
        assert!(config.known_upright);
        assert!(config.check_parity);
        assert_eq!(config.reference_week, 0);
    }

    #[test]
    fn test_partial_json() {
        let config = DecodeConfig::from_json(r#"{ "reference_week": 2200 }"#).unwrap();
        assert_eq!(config.reference_week, 2200);
        assert!(config.known_upright);

        let config = DecodeConfig::from_json(r#"{ "known_upright": false, "check_parity": false }"#)
            .unwrap();
        assert!(!config.known_upright);
        assert!(!config.check_parity);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = DecodeConfig::default().with_reference_week(1995);
        let text = config.to_json().unwrap();
        assert_eq!(DecodeConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn test_malformed_json() {
        let err = DecodeConfig::from_json("{ reference_week: }").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(matches!(err, NavError::Config(_)));
    }
}
