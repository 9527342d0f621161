//! `PostgreSQL` integration tests for brands and platforms.

use super::helpers::{TestContext, context, create_brand, create_platform};
use contentboard::catalog::{
    domain::{BrandId, CatalogEntry, CatalogName},
    ports::CatalogRepository,
};
use contentboard::error::{Classified, ErrorKind};
use contentboard::listing::{KeywordPattern, Pagination};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Bool};
use rstest::rstest;

#[derive(QueryableByName)]
struct DeletedRow {
    #[diesel(sql_type = Bool)]
    deleted: bool,
}

#[rstest]
#[ignore = "downloads and starts an embedded PostgreSQL server"]
fn brand_round_trips_and_soft_deletes(context: TestContext) {
    let TestContext { rt, repos } = context;

    let brand_id = rt.block_on(async {
        let created = create_brand(&repos, "Acme").await.expect("brand insert");
        let fetched = repos.brands.get(created.id()).await.expect("brand lookup");
        assert_eq!(fetched, created);

        repos.brands.delete(created.id()).await.expect("brand delete");
        let hidden = repos
            .brands
            .get(created.id())
            .await
            .expect_err("deleted brand must be hidden");
        assert_eq!(hidden.kind(), ErrorKind::NotFound);

        let again = repos
            .brands
            .delete(created.id())
            .await
            .expect_err("second delete must fail");
        assert_eq!(again.kind(), ErrorKind::InvariantViolation);
        created.id()
    });

    let mut connection = repos.pool.get().expect("pooled connection");
    let row = diesel::sql_query(
        "SELECT deleted_at IS NOT NULL AS deleted FROM brands WHERE brand_id = $1",
    )
    .bind::<BigInt, _>(brand_id.value())
    .get_result::<DeletedRow>(&mut connection)
    .expect("row is still stored");
    assert!(row.deleted);
}

#[rstest]
#[ignore = "downloads and starts an embedded PostgreSQL server"]
fn keyword_search_is_case_insensitive_and_literal(context: TestContext) {
    let TestContext { rt, repos } = context;

    rt.block_on(async {
        for name in ["Instagram", "instagram reels", "TikTok", "50%_off"] {
            create_platform(&repos, name).await.expect("platform insert");
        }

        let keyword = KeywordPattern::new("INSTA");
        let found = repos
            .platforms
            .list(&keyword, Pagination::resolve(0, 0))
            .await
            .expect("platform list");
        let names: Vec<&str> = found.iter().map(CatalogEntry::name).collect();
        assert_eq!(names, ["Instagram", "instagram reels"]);
        assert_eq!(repos.platforms.count(&keyword).await.expect("count"), 2);

        let literal = KeywordPattern::new("%_");
        assert_eq!(repos.platforms.count(&literal).await.expect("count"), 1);
        let everything = KeywordPattern::new("");
        assert_eq!(repos.platforms.count(&everything).await.expect("count"), 4);
    });
}

#[rstest]
#[ignore = "downloads and starts an embedded PostgreSQL server"]
fn pagination_skips_whole_pages(context: TestContext) {
    let TestContext { rt, repos } = context;

    rt.block_on(async {
        for name in ["a", "b", "c", "d", "e"] {
            create_brand(&repos, name).await.expect("brand insert");
        }

        let page = repos
            .brands
            .list(&KeywordPattern::new(""), Pagination::resolve(2, 3))
            .await
            .expect("brand list");
        let names: Vec<&str> = page.iter().map(CatalogEntry::name).collect();
        assert_eq!(names, ["e"]);
    });
}

#[rstest]
#[ignore = "downloads and starts an embedded PostgreSQL server"]
fn renaming_a_missing_brand_is_an_invariant_violation(context: TestContext) {
    let TestContext { rt, repos } = context;
    let name = CatalogName::new("Ghost").expect("valid name");

    let err = rt
        .block_on(repos.brands.update(BrandId::new(999), &name))
        .expect_err("missing brand must fail");

    assert_eq!(err.kind(), ErrorKind::InvariantViolation);
    assert_eq!(
        err.to_string(),
        "brand 999 does not exist or has been deleted"
    );
}

#[rstest]
#[ignore = "downloads and starts an embedded PostgreSQL server"]
fn far_pages_are_empty_rather_than_failing(context: TestContext) {
    let TestContext { rt, repos } = context;

    let page = rt.block_on(async {
        create_brand(&repos, "Acme").await.expect("brand insert");
        repos
            .brands
            .list(&KeywordPattern::new(""), Pagination::resolve(25, u64::MAX / 2))
            .await
            .expect("far page must not fail")
    });

    assert!(page.is_empty());
}
