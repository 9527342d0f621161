//! In-memory integration tests for brands and platforms.

use super::helpers::{Board, WRITE_STEP, board, first_write_at, stepped_board};
use contentboard::catalog::domain::CatalogEntry;
use contentboard::error::{Classified, ErrorKind};
use contentboard::listing::ListQuery;
use contentboard::storage::memory::TableName;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_brand_round_trips(board: Board) {
    let created = board.brand("Acme").await;

    let fetched = board
        .brands
        .get(created.id())
        .await
        .expect("get should succeed");

    assert_eq!(fetched.name(), "Acme");
    assert_eq!(fetched.id(), created.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_names_are_allowed(board: Board) {
    let first = board.brand("Acme").await;
    let second = board.brand("Acme").await;

    assert_ne!(first.id(), second.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_keyword_lists_every_visible_entry(board: Board) {
    for name in ["Instagram", "TikTok", "YouTube"] {
        board.platform(name).await;
    }

    let page = board
        .platforms
        .list(&ListQuery::new())
        .await
        .expect("list should succeed");

    assert_eq!(page.items().len(), 3);
    assert_eq!((page.meta().limit, page.meta().page), (25, 1));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn wildcard_characters_match_literally(board: Board) {
    board.brand("100% Organic").await;
    board.brand("1000 Organic").await;

    let page = board
        .brands
        .list(&ListQuery::new().with_keyword("100%"))
        .await
        .expect("list should succeed");

    let names: Vec<&str> = page.items().iter().map(CatalogEntry::name).collect();
    assert_eq!(names, ["100% Organic"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_brand_is_hidden_but_physically_kept(board: Board) {
    let brand = board.brand("Acme").await;

    board
        .brands
        .delete(brand.id())
        .await
        .expect("delete should succeed");

    let err = board
        .brands
        .get(brand.id())
        .await
        .expect_err("deleted brand must be hidden");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    let page = board
        .brands
        .list(&ListQuery::new())
        .await
        .expect("list should succeed");
    assert!(page.items().is_empty());

    let timestamps = board
        .database
        .timestamps(TableName::Brands, brand.id().value())
        .expect("row is still stored");
    assert!(timestamps.deleted_at.is_some());
    assert_eq!(timestamps.deleted_at, Some(timestamps.updated_at));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_platform_cannot_be_renamed(board: Board) {
    let platform = board.platform("Vine").await;
    board
        .platforms
        .delete(platform.id())
        .await
        .expect("delete should succeed");

    let err = board
        .platforms
        .update(platform.id(), "Vine 2")
        .await
        .expect_err("rename of deleted platform must fail");

    assert_eq!(err.kind(), ErrorKind::InvariantViolation);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rename_refreshes_updated_at(#[from(stepped_board)] board: Board) {
    let brand = board.brand("Acme").await;

    board
        .brands
        .update(brand.id(), "Acme Corp")
        .await
        .expect("update should succeed");

    let timestamps = board
        .database
        .timestamps(TableName::Brands, brand.id().value())
        .expect("row exists");
    assert_eq!(timestamps.created_at, first_write_at());
    assert_eq!(timestamps.updated_at, first_write_at() + WRITE_STEP);
    assert!(timestamps.deleted_at.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn soft_delete_stamps_deleted_at_and_updated_at(#[from(stepped_board)] board: Board) {
    let platform = board.platform("Vine").await;

    board
        .platforms
        .delete(platform.id())
        .await
        .expect("delete should succeed");

    let timestamps = board
        .database
        .timestamps(TableName::Platforms, platform.id().value())
        .expect("row is still stored");
    let deleted_at = first_write_at() + WRITE_STEP;
    assert_eq!(timestamps.created_at, first_write_at());
    assert_eq!(timestamps.updated_at, deleted_at);
    assert_eq!(timestamps.deleted_at, Some(deleted_at));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn far_pages_are_empty(board: Board) {
    board.brand("Acme").await;

    let page = board
        .brands
        .list(&ListQuery::new().with_page(u64::MAX / 2))
        .await
        .expect("any page is accepted");

    assert!(page.items().is_empty());
    assert_eq!(page.meta().page, u64::MAX / 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_rename_leaves_the_name_unchanged(board: Board) {
    let brand = board.brand("Acme").await;
    board.database.inject_write_failure(TableName::Brands);

    let err = board
        .brands
        .update(brand.id(), "Renamed")
        .await
        .expect_err("injected failure must surface");

    assert_eq!(err.kind(), ErrorKind::Internal);
    let fetched = board
        .brands
        .get(brand.id())
        .await
        .expect("get should succeed");
    assert_eq!(fetched.name(), "Acme");
}
