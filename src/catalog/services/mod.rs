//! Application services for catalog orchestration.

mod catalog;

pub use catalog::{
    BrandService, CatalogService, CatalogServiceError, CatalogServiceResult, PlatformService,
};
