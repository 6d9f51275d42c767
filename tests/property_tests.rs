use proptest::prelude::*;
use wine_stock_management::domain::error::DomainError;
use wine_stock_management::domain::model::{Wine, WineType};

// 在庫増分ルールのプロパティベーステスト
proptest! {
    /// 増分は quantity + amount <= max のとき、かつそのときに限り成功する
    #[test]
    fn test_increment_succeeds_iff_within_max(
        (max, quantity) in (0u32..=500).prop_flat_map(|max| (Just(max), 0u32..=max)),
        amount in 0u32..=600,
    ) {
        let mut wine = Wine::new(
            "Test Wine".to_string(),
            "Test Brand".to_string(),
            max,
            quantity,
            WineType::RedWine,
        );

        let result = wine.increment(amount);

        if quantity + amount <= max {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(result.is_err());
        }
    }

    /// 成功した場合、新しい在庫数は正確に old + amount になる
    #[test]
    fn test_increment_adds_exact_amount(
        (max, quantity) in (0u32..=500).prop_flat_map(|max| (Just(max), 0u32..=max)),
        amount in 0u32..=600,
    ) {
        let mut wine = Wine::new(
            "Test Wine".to_string(),
            "Test Brand".to_string(),
            max,
            quantity,
            WineType::WhiteWine,
        );

        if wine.increment(amount).is_ok() {
            prop_assert_eq!(wine.quantity(), quantity + amount);
        }
    }

    /// 失敗した場合、在庫数は変化しない
    #[test]
    fn test_failed_increment_leaves_quantity_unchanged(
        (max, quantity) in (0u32..=500).prop_flat_map(|max| (Just(max), 0u32..=max)),
        amount in 0u32..=600,
    ) {
        let mut wine = Wine::new(
            "Test Wine".to_string(),
            "Test Brand".to_string(),
            max,
            quantity,
            WineType::RoseWine,
        );

        if wine.increment(amount).is_err() {
            prop_assert_eq!(wine.quantity(), quantity);
        }
    }

    /// 境界は包含: 残り容量ちょうどの増分は常に成功し、在庫数はmaxになる
    #[test]
    fn test_increment_to_exact_max_always_succeeds(
        (max, quantity) in (0u32..=500).prop_flat_map(|max| (Just(max), 0u32..=max)),
    ) {
        let mut wine = Wine::new(
            "Test Wine".to_string(),
            "Test Brand".to_string(),
            max,
            quantity,
            WineType::Sparkling,
        );

        let result = wine.increment(max - quantity);

        prop_assert!(result.is_ok());
        prop_assert_eq!(wine.quantity(), max);
    }

    /// 失敗時のエラーは増分後の数量と上限を報告する
    #[test]
    fn test_stock_exceeded_reports_attempted_and_max(
        (max, quantity) in (0u32..=500).prop_flat_map(|max| (Just(max), 0u32..=max)),
        excess in 1u32..=100,
    ) {
        let mut wine = Wine::new(
            "Test Wine".to_string(),
            "Test Brand".to_string(),
            max,
            quantity,
            WineType::SweetWine,
        );
        let amount = max - quantity + excess;

        let err = wine.increment(amount).unwrap_err();

        prop_assert_eq!(
            err,
            DomainError::StockExceeded {
                attempted: quantity + amount,
                max,
            }
        );
    }
}
