use crate::domain::model::Wine;
use serde::{Deserialize, Serialize};

/// ワイン用のレスポンスDTO
#[derive(Debug, Serialize, Deserialize)]
pub struct WineResponse {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub max: u32,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub wine_type: String,
    pub type_description: String,
}

impl WineResponse {
    /// ドメインエンティティからWineResponseを作成
    /// エンティティとDTOの間の明示的なマッピング関数
    /// 永続化済みのワインのみがレスポンスになるため、識別子は必ず存在する
    pub fn from_wine(wine: &Wine) -> Self {
        Self {
            id: wine.id().map(|id| id.as_i64()).unwrap_or_default(),
            name: wine.name().to_string(),
            brand: wine.brand().to_string(),
            max: wine.max(),
            quantity: wine.quantity(),
            wine_type: wine.wine_type().as_str().to_string(),
            type_description: wine.wine_type().description().to_string(),
        }
    }
}
