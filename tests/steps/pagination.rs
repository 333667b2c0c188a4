use crate::common::world::StocklineWorld;
use cucumber::then;

#[then(expr = "the catalog was asked for limit {int} and skip {int}")]
async fn then_catalog_asked(world: &mut StocklineWorld, limit: usize, skip: usize) {
    let requested = world.catalog().requested_pages().await;
    assert!(
        requested.contains(&(limit, skip)),
        "no request with limit={limit} skip={skip}, got {requested:?}"
    );
}

#[then(expr = "the catalog received {int} requests")]
async fn then_catalog_request_count(world: &mut StocklineWorld, count: usize) {
    let requested = world.catalog().requested_pages().await;
    assert_eq!(requested.len(), count, "requests: {requested:?}");
}

#[then(expr = "the table holds {int} rows")]
async fn then_table_rows(world: &mut StocklineWorld, rows: usize) {
    assert_eq!(world.view_model().records().len(), rows);
}

#[then(expr = "the first row is {string}")]
async fn then_first_row(world: &mut StocklineWorld, title: String) {
    let first = world.view_model().records().first().map(|r| r.title.clone());
    assert_eq!(first.as_deref(), Some(title.as_str()));
}

#[then(expr = "the current page is {int} of size {int}")]
async fn then_current_page(world: &mut StocklineWorld, page: usize, size: usize) {
    let requested = world.view_model().requested_page();
    assert_eq!((requested.page, requested.size), (page, size));
}

#[then(expr = "the total is {int}")]
async fn then_total(world: &mut StocklineWorld, total: u64) {
    assert_eq!(world.view_model().total(), total);
}
