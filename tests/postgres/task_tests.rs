//! `PostgreSQL` integration tests for tasks.

use std::time::Duration;

use super::helpers::{TestContext, context, create_brand, create_platform};
use contentboard::catalog::{
    adapters::postgres::PostgresBrandRepository,
    domain::{CatalogEntry, CatalogName},
    ports::CatalogRepository,
};
use contentboard::error::{Classified, ErrorKind};
use contentboard::listing::{KeywordPattern, Pagination};
use contentboard::storage::postgres::TransactionSettings;
use contentboard::task::{
    domain::{TaskDraft, TaskStatus},
    ports::TaskRepository,
    services::TaskRequest,
};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use rstest::rstest;

#[derive(QueryableByName)]
struct CountRow {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}

const REJECT_TITLE_TRIGGER_SQL: &str = "
CREATE FUNCTION reject_title() RETURNS trigger AS $$
BEGIN
    IF NEW.title = 'reject me' THEN
        RAISE EXCEPTION 'rejected by test trigger';
    END IF;
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;
CREATE TRIGGER reject_title BEFORE INSERT OR UPDATE ON tasks
    FOR EACH ROW EXECUTE FUNCTION reject_title();
";

fn draft(title: &str, brand_id: i64, platform_id: i64, status: &str) -> TaskDraft {
    TaskRequest::new(title, brand_id, platform_id, "2025-01-10", "100", status)
        .to_draft()
        .expect("valid task request")
}

#[rstest]
#[ignore = "downloads and starts an embedded PostgreSQL server"]
fn task_reads_back_with_joined_names(context: TestContext) {
    let TestContext { rt, repos } = context;

    let task = rt.block_on(async {
        let nike = create_brand(&repos, "Nike").await.expect("brand insert");
        let instagram = create_platform(&repos, "Instagram")
            .await
            .expect("platform insert");
        let request = draft("Post reel", nike.id().value(), instagram.id().value(), "Pending");
        let id = repos.tasks.create(&request).await.expect("task insert");
        repos.tasks.get(id).await.expect("task lookup")
    });

    assert_eq!(task.brand(), "Nike");
    assert_eq!(task.platform(), "Instagram");
    assert_eq!(task.payment().as_str(), "100");
    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.due_date().to_string(), "2025-01-10");
}

#[rstest]
#[ignore = "downloads and starts an embedded PostgreSQL server"]
fn missing_references_are_reported_by_field(context: TestContext) {
    let TestContext { rt, repos } = context;

    rt.block_on(async {
        let nike = create_brand(&repos, "Nike").await.expect("brand insert");
        let vine = create_platform(&repos, "Vine").await.expect("platform insert");
        repos
            .platforms
            .delete(vine.id())
            .await
            .expect("platform delete");

        let no_brand = repos
            .tasks
            .create(&draft("Loop", 42, vine.id().value(), "Pending"))
            .await
            .expect_err("missing brand must fail");
        assert_eq!(no_brand.to_string(), "brand_id does not exist");

        let no_platform = repos
            .tasks
            .create(&draft("Loop", nike.id().value(), vine.id().value(), "Pending"))
            .await
            .expect_err("deleted platform must fail");
        assert_eq!(no_platform.to_string(), "platform_id does not exist");
        assert_eq!(no_platform.kind(), ErrorKind::InvariantViolation);
    });
}

#[rstest]
#[ignore = "downloads and starts an embedded PostgreSQL server"]
fn list_and_count_agree_on_the_title_filter(context: TestContext) {
    let TestContext { rt, repos } = context;

    rt.block_on(async {
        let brand = create_brand(&repos, "Nike").await.expect("brand insert");
        let platform = create_platform(&repos, "Instagram")
            .await
            .expect("platform insert");
        for title in ["Post reel", "Story", "REEL teaser"] {
            let request = draft(title, brand.id().value(), platform.id().value(), "Pending");
            repos.tasks.create(&request).await.expect("task insert");
        }

        let keyword = KeywordPattern::new("reel");
        let listed = repos
            .tasks
            .list(&keyword, Pagination::resolve(0, 0))
            .await
            .expect("task list");
        let counted = repos.tasks.count(&keyword).await.expect("task count");
        assert_eq!(listed.len(), 2);
        assert_eq!(counted, 2);
    });
}

#[rstest]
#[ignore = "downloads and starts an embedded PostgreSQL server"]
fn failed_writes_roll_back(context: TestContext) {
    let TestContext { rt, repos } = context;
    repos
        .pool
        .get()
        .expect("pooled connection")
        .batch_execute(REJECT_TITLE_TRIGGER_SQL)
        .expect("trigger install");

    rt.block_on(async {
        let brand = create_brand(&repos, "Nike").await.expect("brand insert");
        let platform = create_platform(&repos, "Instagram")
            .await
            .expect("platform insert");
        let (brand_id, platform_id) = (brand.id().value(), platform.id().value());

        let insert = repos
            .tasks
            .create(&draft("reject me", brand_id, platform_id, "Pending"))
            .await
            .expect_err("trigger must reject the insert");
        assert_eq!(insert.kind(), ErrorKind::Internal);

        let id = repos
            .tasks
            .create(&draft("Post reel", brand_id, platform_id, "Pending"))
            .await
            .expect("task insert");
        let update = repos
            .tasks
            .update(id, &draft("reject me", brand_id, platform_id, "Completed"))
            .await
            .expect_err("trigger must reject the update");
        assert_eq!(update.kind(), ErrorKind::Internal);

        let task = repos.tasks.get(id).await.expect("task lookup");
        assert_eq!(task.title(), "Post reel");
        assert_eq!(task.status(), TaskStatus::Pending);
    });

    let mut connection = repos.pool.get().expect("pooled connection");
    let stored = diesel::sql_query("SELECT COUNT(*) AS count FROM tasks")
        .get_result::<CountRow>(&mut connection)
        .expect("task count");
    assert_eq!(stored.count, 1);
}

#[rstest]
#[ignore = "downloads and starts an embedded PostgreSQL server"]
fn locked_rows_time_out_instead_of_racing(context: TestContext) {
    let TestContext { rt, repos } = context;
    let brand = rt
        .block_on(create_brand(&repos, "Nike"))
        .expect("brand insert");

    let mut holder = repos.pool.get().expect("pooled connection");
    holder
        .batch_execute(&format!(
            "BEGIN; SELECT brand_id FROM brands WHERE brand_id = {} FOR UPDATE;",
            brand.id().value()
        ))
        .expect("row lock");

    let impatient = PostgresBrandRepository::with_settings(
        repos.pool.clone(),
        TransactionSettings::new().with_statement_timeout(Duration::from_millis(200)),
    );
    let name = CatalogName::new("Nike Running").expect("valid name");
    let err = rt
        .block_on(impatient.update(brand.id(), &name))
        .expect_err("locked row must time out");
    assert_eq!(err.kind(), ErrorKind::Internal);

    holder.batch_execute("ROLLBACK;").expect("release lock");
    let fetched = rt
        .block_on(repos.brands.get(brand.id()))
        .expect("brand lookup");
    assert_eq!(fetched.name(), "Nike");
}
