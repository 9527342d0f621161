//! SQL text for the `tasks` table.
//!
//! Reads join brands and platforms and only see rows where none of the
//! three is soft-deleted.

/// Columns of [`super::models::TaskRow`].
const SELECT_DETAILS: &str = "SELECT t.task_id, t.title, t.brand_id, b.brand, \
     t.platform_id, p.platform, t.due_date, t.payment::TEXT AS payment, t.status \
     FROM tasks t \
     LEFT JOIN brands b ON b.brand_id = t.brand_id \
     LEFT JOIN platforms p ON p.platform_id = t.platform_id";

const VISIBLE: &str = "t.deleted_at IS NULL AND b.deleted_at IS NULL AND p.deleted_at IS NULL";

/// `$1` keyword pattern, `$2` limit, `$3` offset.
pub(super) fn list() -> String {
    format!(
        "{SELECT_DETAILS} WHERE {VISIBLE} AND t.title ILIKE $1 ESCAPE '\\' \
         ORDER BY t.task_id LIMIT $2 OFFSET $3"
    )
}

/// `$1` keyword pattern.
pub(super) fn count() -> String {
    format!(
        "SELECT COUNT(*) AS count FROM tasks t \
         LEFT JOIN brands b ON b.brand_id = t.brand_id \
         LEFT JOIN platforms p ON p.platform_id = t.platform_id \
         WHERE {VISIBLE} AND t.title ILIKE $1 ESCAPE '\\'"
    )
}

/// `$1` identity.
pub(super) fn get() -> String {
    format!("{SELECT_DETAILS} WHERE {VISIBLE} AND t.task_id = $1")
}

/// `$1` identity. Locks the task row only.
pub(super) fn probe_target() -> String {
    format!(
        "SELECT t.task_id AS id FROM tasks t \
         LEFT JOIN brands b ON b.brand_id = t.brand_id \
         LEFT JOIN platforms p ON p.platform_id = t.platform_id \
         WHERE {VISIBLE} AND t.task_id = $1 FOR UPDATE OF t"
    )
}

/// `$1` title, `$2` brand, `$3` platform, `$4` due date, `$5` payment,
/// `$6` status.
pub(super) const INSERT: &str = "INSERT INTO tasks \
     (title, brand_id, platform_id, due_date, payment, status) \
     VALUES ($1, $2, $3, $4, CAST($5 AS NUMERIC), $6) \
     RETURNING task_id AS id";

/// `$1`..`$6` as for [`INSERT`], `$7` identity.
pub(super) const UPDATE: &str = "UPDATE tasks SET \
     title = $1, brand_id = $2, platform_id = $3, due_date = $4, \
     payment = CAST($5 AS NUMERIC), status = $6, updated_at = NOW() \
     WHERE task_id = $7";

/// `$1` identity.
pub(super) const SOFT_DELETE: &str =
    "UPDATE tasks SET deleted_at = NOW(), updated_at = NOW() WHERE task_id = $1";
