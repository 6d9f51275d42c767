// 駆動される側アダプター（リポジトリ実装・ロガー実装）

mod console_logger;
mod wine_repository;

pub use console_logger::ConsoleLogger;
pub use wine_repository::MySqlWineRepository;
