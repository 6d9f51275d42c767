use crate::domain::model::{Wine, WineType};
use serde::{Deserialize, Serialize};

/// リクエスト検証エラー
/// サービス層のビジネスルールチェックとは独立に、
/// フィールドの有無と範囲をトランスポート境界で検証する
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must be between 1 and 200 characters")]
    InvalidName,
    #[error("brand must be between 1 and 200 characters")]
    InvalidBrand,
    #[error("max must not be greater than 500")]
    MaxTooLarge,
    #[error("quantity must not be greater than 100")]
    QuantityTooLarge,
    #[error("unknown wine type: {0}")]
    UnknownWineType(String),
}

/// ワイン登録・更新用のリクエストDTO
#[derive(Serialize, Deserialize)]
pub struct WineRequest {
    pub name: String,
    pub brand: String,
    pub max: u32,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub wine_type: String,
}

impl WineRequest {
    /// フィールドの有無と範囲を検証する
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name_len = self.name.chars().count();
        if name_len < 1 || name_len > 200 {
            return Err(ValidationError::InvalidName);
        }

        let brand_len = self.brand.chars().count();
        if brand_len < 1 || brand_len > 200 {
            return Err(ValidationError::InvalidBrand);
        }

        if self.max > 500 {
            return Err(ValidationError::MaxTooLarge);
        }

        if self.quantity > 100 {
            return Err(ValidationError::QuantityTooLarge);
        }

        WineType::from_string(&self.wine_type)
            .map_err(|_| ValidationError::UnknownWineType(self.wine_type.clone()))?;

        Ok(())
    }

    /// 検証済みのリクエストをドメインエンティティに変換する
    /// DTOとエンティティの間の明示的なマッピング関数
    pub fn to_wine(&self) -> Result<Wine, ValidationError> {
        self.validate()?;
        let wine_type = WineType::from_string(&self.wine_type)
            .map_err(|_| ValidationError::UnknownWineType(self.wine_type.clone()))?;

        Ok(Wine::new(
            self.name.clone(),
            self.brand.clone(),
            self.max,
            self.quantity,
            wine_type,
        ))
    }
}

/// 在庫増分用のリクエストDTO
#[derive(Serialize, Deserialize)]
pub struct QuantityRequest {
    pub quantity: u32,
}
