//! Service (catalog offering) module, laid out like `category`.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Service, ServiceDetail};
pub use repository::ServiceRepository;
pub use service::ServiceService;
