//! Category module: domain record, repository abstraction with sea-orm and
//! in-memory implementations, and the coordinating service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::Category;
pub use repository::CategoryRepository;
pub use service::CategoryService;
