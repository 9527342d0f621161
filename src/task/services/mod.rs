//! Application services for task orchestration.

mod request;
mod task;

pub use request::TaskRequest;
pub use task::{TaskService, TaskServiceError, TaskServiceResult};
