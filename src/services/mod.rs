pub mod category_service;
pub mod service_worker;

pub use category_service::*;
pub use service_worker::unregister_all as unregister_service_workers;
