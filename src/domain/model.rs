// ドメインモデル（エンティティと値オブジェクト）

mod value_objects;
mod wine;

pub use value_objects::{WineId, WineType};
pub use wine::Wine;
