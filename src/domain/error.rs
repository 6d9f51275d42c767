/// ドメイン層のエラー型
/// ビジネスルール違反を表現する
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// 在庫上限超過（増分後の在庫数が最大在庫数を超える）
    StockExceeded { attempted: u32, max: u32 },
    /// 無効なワインタイプ文字列
    InvalidWineType(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::StockExceeded { attempted, max } => write!(
                f,
                "Stock exceeded: resulting quantity {} is greater than max capacity {}",
                attempted, max
            ),
            DomainError::InvalidWineType(value) => write!(f, "Invalid wine type: {}", value),
        }
    }
}

impl std::error::Error for DomainError {}
