pub mod error;
pub mod service;

pub use error::ApplicationError;
pub use service::WineStockService;
