use crate::common::catalog::SeedProduct;
use crate::common::world::StocklineWorld;
use cucumber::gherkin::Step;
use cucumber::{given, when};

#[given(expr = "the catalog holds {int} products")]
async fn given_catalog_holds(world: &mut StocklineWorld, count: u64) {
    let products = (1..=count).map(SeedProduct::numbered).collect();
    world.seed_catalog(products).await;
}

#[given("the catalog serves these products:")]
async fn given_catalog_serves(world: &mut StocklineWorld, step: &Step) {
    let table = step.table.as_ref().expect("a product table");
    let products = table
        .rows
        .iter()
        .skip(1)
        .map(|row| SeedProduct {
            id: row[0].parse().expect("numeric id"),
            title: row[1].clone(),
            stock: row[2].parse().expect("numeric stock"),
            price: row[3].parse().expect("numeric price"),
        })
        .collect();
    world.seed_catalog(products).await;
}

#[given("the product screen is open")]
async fn given_screen_open(world: &mut StocklineWorld) {
    world.start_screen().await.expect("screen should start");
}

#[when("the product screen starts")]
async fn when_screen_starts(world: &mut StocklineWorld) {
    world.start_screen().await.expect("screen should start");
}

#[when("the catalog starts failing")]
async fn when_catalog_fails(world: &mut StocklineWorld) {
    world.catalog().start_failing();
}

#[when(expr = "I press {string}")]
async fn when_press(world: &mut StocklineWorld, key: String) {
    world.press(&key).await.expect("key should be handled");
}

#[when(expr = "I type {string}")]
async fn when_type(world: &mut StocklineWorld, text: String) {
    world.type_text(&text).await.expect("text should be typed");
}
