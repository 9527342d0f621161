//! Task identity key.

use crate::ids::entity_id;

entity_id! {
    /// Identity key of a task.
    TaskId
}
