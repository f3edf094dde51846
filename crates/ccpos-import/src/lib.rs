pub mod campus;
pub mod error;
pub mod mapping;
pub mod ports;
pub mod service;

pub use campus::classify_campus;
pub use error::ImportError;
pub use mapping::pos_from_node;
pub use ports::{NodeFetcher, PosStore, StoreError};
pub use service::PosService;
