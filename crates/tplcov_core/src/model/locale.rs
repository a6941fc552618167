//! Catalog locales.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Locale of one catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Locale {
    English,
    Chinese,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Chinese];

    /// Short code used in file names (`en`, `cn`).
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Chinese => "cn",
        }
    }

    /// Comment lines written above a persisted catalog.
    pub fn catalog_header(self) -> &'static [&'static str] {
        match self {
            Self::English => &[
                "Template configuration file",
                "This file defines all Feishu message card templates for GitHub events (English version)",
            ],
            Self::Chinese => &[
                "中文模板配置文件",
                "此文件定义了所有 GitHub 事件的飞书消息卡片模板（中文版）",
            ],
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "cn" | "zh" | "chinese" => Ok(Self::Chinese),
            other => Err(format!("unsupported locale `{other}`; expected en|cn")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Locale;

    #[test]
    fn parses_codes_and_aliases() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("zh".parse::<Locale>().unwrap(), Locale::Chinese);
        assert_eq!(" cn ".parse::<Locale>().unwrap(), Locale::Chinese);
        assert!("fr".parse::<Locale>().unwrap_err().contains("unsupported"));
    }
}
