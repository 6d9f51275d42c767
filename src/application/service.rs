use crate::application::ApplicationError;
use crate::domain::model::{Wine, WineId};
use crate::domain::port::{Logger, WineRepository};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

const COMPONENT: &str = "WineStockService";

/// ワイン在庫サービス
/// ビジネス不変条件（銘柄名の一意性・在庫上限・存在チェック）を強制し、
/// リポジトリ呼び出しをオーケストレーションする
///
/// 作成時の一意性チェックと増分時の上限チェックはいずれも
/// read-check-write であり、ストアが直列化しない限り並行リクエスト間で
/// 競合しうる。銘柄名についてはストアの一意インデックスが最終的な
/// 守り手となる。在庫上限の競合は既知の制限として許容する。
pub struct WineStockService {
    wine_repository: Arc<dyn WineRepository>,
    logger: Arc<dyn Logger>,
}

impl WineStockService {
    /// 新しいワイン在庫サービスを作成
    ///
    /// # Arguments
    /// * `wine_repository` - ワインリポジトリ
    /// * `logger` - ロガー
    pub fn new(wine_repository: Arc<dyn WineRepository>, logger: Arc<dyn Logger>) -> Self {
        Self {
            wine_repository,
            logger,
        }
    }

    /// 新しいワインを登録する
    /// 同名のワインが既に存在する場合は失敗する
    ///
    /// # Arguments
    /// * `wine` - 登録するワイン（識別子は未割り当て）
    ///
    /// # Returns
    /// * `Ok(Wine)` - ストアが採番した識別子を持つ保存済みワイン
    /// * `Err(ApplicationError::AlreadyRegistered)` - 同名のワインが登録済み
    pub async fn create_wine(&self, wine: Wine) -> Result<Wine, ApplicationError> {
        self.verify_if_is_already_registered(wine.name()).await?;
        let saved_wine = self.wine_repository.save(&wine).await?;

        let correlation_id = Uuid::new_v4();
        self.logger.info(
            COMPONENT,
            "ワインを登録しました",
            Some(correlation_id),
            Some(self.wine_context(&saved_wine)),
        );
        Ok(saved_wine)
    }

    /// 銘柄名でワインを取得する
    ///
    /// # Returns
    /// * `Ok(Wine)` - ワインが見つかった
    /// * `Err(ApplicationError::NotFound)` - ワインが見つからなかった
    pub async fn find_by_name(&self, name: &str) -> Result<Wine, ApplicationError> {
        self.wine_repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| {
                ApplicationError::NotFound(format!(
                    "Wine with name {} not found in the system.",
                    name
                ))
            })
    }

    /// すべてのワインを取得する
    /// ストアの返却順（識別子の昇順）で返す
    /// 空のストアでは空のリストを返す（エラーにはならない）
    pub async fn list_all(&self) -> Result<Vec<Wine>, ApplicationError> {
        self.wine_repository
            .find_all()
            .await
            .map_err(ApplicationError::from)
    }

    /// 識別子でワインを削除する
    /// 存在チェックの後に1回の削除を行う
    ///
    /// # Returns
    /// * `Ok(())` - 削除成功
    /// * `Err(ApplicationError::NotFound)` - ワインが見つからなかった
    pub async fn delete_by_id(&self, id: WineId) -> Result<(), ApplicationError> {
        self.verify_if_exists(id).await?;
        self.wine_repository.delete_by_id(id).await?;

        let correlation_id = Uuid::new_v4();
        let mut context = HashMap::new();
        context.insert("wine_id".to_string(), id.to_string());
        self.logger.info(
            COMPONENT,
            "ワインを削除しました",
            Some(correlation_id),
            Some(context),
        );
        Ok(())
    }

    /// 在庫を増やす
    /// 増分後の在庫数が最大在庫数を超える場合は失敗する
    /// 境界は包含で、増分後が最大在庫数と等しい場合は成功する
    ///
    /// # Arguments
    /// * `id` - ワインの識別子
    /// * `quantity_to_increment` - 増やす数量（0は合法で、無操作の更新となる）
    ///
    /// # Returns
    /// * `Ok(Wine)` - 増分後の保存済みワイン
    /// * `Err(ApplicationError::NotFound)` - ワインが見つからなかった
    /// * `Err(ApplicationError::DomainError)` - 在庫上限超過
    pub async fn increment(
        &self,
        id: WineId,
        quantity_to_increment: u32,
    ) -> Result<Wine, ApplicationError> {
        let mut wine = self.verify_if_exists(id).await?;
        wine.increment(quantity_to_increment)?;
        let incremented_wine = self.wine_repository.save(&wine).await?;

        let correlation_id = Uuid::new_v4();
        let mut context = self.wine_context(&incremented_wine);
        context.insert(
            "quantity_to_increment".to_string(),
            quantity_to_increment.to_string(),
        );
        self.logger.info(
            COMPONENT,
            "在庫を増やしました",
            Some(correlation_id),
            Some(context),
        );
        Ok(incremented_wine)
    }

    /// ワインを更新する
    /// 識別子 `id` のレコードを `wine` の内容で丸ごと上書きする
    /// 識別子はパス上の `id` を使い、ペイロード由来の値は使わない
    ///
    /// 銘柄名の一意性は再チェックしない（参照実装の挙動を維持）。
    /// 別レコードと衝突した場合はストアの一意制約違反が
    /// `RepositoryError::DuplicateName` として返る。
    ///
    /// # Returns
    /// * `Ok(Wine)` - 更新後の保存済みワイン
    /// * `Err(ApplicationError::NotFound)` - ワインが見つからなかった
    pub async fn update(&self, id: WineId, mut wine: Wine) -> Result<Wine, ApplicationError> {
        self.verify_if_exists(id).await?;
        wine.set_id(id);
        let updated_wine = self.wine_repository.save(&wine).await?;
        Ok(updated_wine)
    }

    /// 同名のワインが登録済みでないことを確認する
    async fn verify_if_is_already_registered(&self, name: &str) -> Result<(), ApplicationError> {
        match self.wine_repository.find_by_name(name).await? {
            Some(_) => Err(ApplicationError::AlreadyRegistered(name.to_string())),
            None => Ok(()),
        }
    }

    /// 識別子のワインが存在することを確認し、取得する
    async fn verify_if_exists(&self, id: WineId) -> Result<Wine, ApplicationError> {
        self.wine_repository.find_by_id(id).await?.ok_or_else(|| {
            ApplicationError::NotFound(format!("Wine with id {} not found in the system.", id))
        })
    }

    fn wine_context(&self, wine: &Wine) -> HashMap<String, String> {
        let mut context = HashMap::new();
        if let Some(id) = wine.id() {
            context.insert("wine_id".to_string(), id.to_string());
        }
        context.insert("name".to_string(), wine.name().to_string());
        context.insert("quantity".to_string(), wine.quantity().to_string());
        context.insert("max".to_string(), wine.max().to_string());
        context
    }
}
