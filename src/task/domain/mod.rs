//! Domain model for content tasks.

mod details;
mod draft;
mod error;
mod ids;
mod payment;
mod status;
mod title;

pub use details::TaskDetails;
pub use draft::TaskDraft;
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use payment::Payment;
pub use status::TaskStatus;
pub use title::TaskTitle;
