use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

use std::fmt;

/// ワインの一意識別子
/// ストア側の自動採番で割り当てられる
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WineId(i64);

impl WineId {
    /// i64から WineId を作成
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// 内部のi64を取得
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for WineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ワインタイプ
/// 文字列トークンとして永続化・送受信される
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WineType {
    WhiteWine,
    RedWine,
    RoseWine,
    SweetWine,
    Sparkling,
}

impl WineType {
    /// 文字列トークンからWineTypeを作成
    pub fn from_string(s: &str) -> Result<Self, DomainError> {
        match s {
            "WHITEWINE" => Ok(WineType::WhiteWine),
            "REDWINE" => Ok(WineType::RedWine),
            "ROSEWINE" => Ok(WineType::RoseWine),
            "SWEETWINE" => Ok(WineType::SweetWine),
            "SPARKLING" => Ok(WineType::Sparkling),
            other => Err(DomainError::InvalidWineType(other.to_string())),
        }
    }

    /// 文字列トークンを取得
    pub fn as_str(&self) -> &'static str {
        match self {
            WineType::WhiteWine => "WHITEWINE",
            WineType::RedWine => "REDWINE",
            WineType::RoseWine => "ROSEWINE",
            WineType::SweetWine => "SWEETWINE",
            WineType::Sparkling => "SPARKLING",
        }
    }

    /// 人間可読な説明を取得
    pub fn description(&self) -> &'static str {
        match self {
            WineType::WhiteWine => "White wine",
            WineType::RedWine => "Red wine",
            WineType::RoseWine => "Rose wine",
            WineType::SweetWine => "Sweet wine",
            WineType::Sparkling => "Sparkling wine",
        }
    }
}

impl fmt::Display for WineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wine_id_round_trip() {
        let id = WineId::from_i64(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_wine_type_from_string_valid() {
        assert_eq!(WineType::from_string("WHITEWINE"), Ok(WineType::WhiteWine));
        assert_eq!(WineType::from_string("REDWINE"), Ok(WineType::RedWine));
        assert_eq!(WineType::from_string("ROSEWINE"), Ok(WineType::RoseWine));
        assert_eq!(WineType::from_string("SWEETWINE"), Ok(WineType::SweetWine));
        assert_eq!(WineType::from_string("SPARKLING"), Ok(WineType::Sparkling));
    }

    #[test]
    fn test_wine_type_from_string_invalid() {
        assert!(WineType::from_string("redwine").is_err()); // 大文字小文字が違う
        assert!(WineType::from_string("PORT").is_err());
        assert!(WineType::from_string("").is_err());
    }

    #[test]
    fn test_wine_type_description() {
        assert_eq!(WineType::RedWine.description(), "Red wine");
        assert_eq!(WineType::Sparkling.description(), "Sparkling wine");
    }

    #[test]
    fn test_wine_type_display_matches_token() {
        assert_eq!(WineType::SweetWine.to_string(), "SWEETWINE");
    }
}
