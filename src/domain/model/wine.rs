use crate::domain::error::DomainError;
use crate::domain::model::{WineId, WineType};

/// ワインエンティティ
/// 1銘柄分の在庫を管理する
/// 不変条件: quantity <= max（在庫増分の成功後、常に成立する）
#[derive(Debug, Clone, PartialEq)]
pub struct Wine {
    id: Option<WineId>,
    name: String,
    brand: String,
    max: u32,
    quantity: u32,
    wine_type: WineType,
}

impl Wine {
    /// 新しいワインを作成（識別子は未割り当て）
    ///
    /// # Arguments
    /// * `name` - 銘柄名
    /// * `brand` - ブランド名
    /// * `max` - 最大在庫数
    /// * `quantity` - 現在の在庫数
    /// * `wine_type` - ワインタイプ
    pub fn new(name: String, brand: String, max: u32, quantity: u32, wine_type: WineType) -> Self {
        Self {
            id: None,
            name,
            brand,
            max,
            quantity,
            wine_type,
        }
    }

    /// 永続化済みのワインを復元する（リポジトリ用）
    pub fn with_id(
        id: WineId,
        name: String,
        brand: String,
        max: u32,
        quantity: u32,
        wine_type: WineType,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            brand,
            max,
            quantity,
            wine_type,
        }
    }

    /// 識別子を取得（未永続化の場合はNone）
    pub fn id(&self) -> Option<WineId> {
        self.id
    }

    /// 銘柄名を取得
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ブランド名を取得
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// 最大在庫数を取得
    pub fn max(&self) -> u32 {
        self.max
    }

    /// 現在の在庫数を取得
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// ワインタイプを取得
    pub fn wine_type(&self) -> WineType {
        self.wine_type
    }

    /// 識別子を設定する
    /// 更新時にパス上のidで既存レコードを上書きするために使用する
    pub fn set_id(&mut self, id: WineId) {
        self.id = Some(id);
    }

    /// 在庫を増やす
    /// 境界は包含: quantity + amount == max は成功する
    ///
    /// # Arguments
    /// * `amount` - 増やす数量（0は合法で、無操作の更新となる）
    ///
    /// # Returns
    /// * `Ok(())` - 増分成功
    /// * `Err(DomainError::StockExceeded)` - 最大在庫数を超える
    pub fn increment(&mut self, amount: u32) -> Result<(), DomainError> {
        // 算術オーバーフローは飽和させる（max <= 500 なので必ず上限超過になる）
        let after_increment = self.quantity.saturating_add(amount);
        if after_increment > self.max {
            return Err(DomainError::StockExceeded {
                attempted: after_increment,
                max: self.max,
            });
        }
        self.quantity = after_increment;
        Ok(())
    }
}
