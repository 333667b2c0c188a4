use crate::common::world::{parse_field, StocklineWorld};
use cucumber::{then, when};

#[when(expr = "I open the product {string}")]
async fn when_open_product(world: &mut StocklineWorld, title: String) {
    world.open_product(&title).await.expect("product should open");
}

#[when(expr = "I replace the {string} field with {string}")]
async fn when_replace_field(world: &mut StocklineWorld, field: String, value: String) {
    let field = parse_field(&field).expect("known field");
    world
        .replace_field(field, &value)
        .await
        .expect("field should be replaced");
}

#[then("the edit modal is open")]
async fn then_modal_open(world: &mut StocklineWorld) {
    assert!(world.view_model().is_modal_open());
}

#[then("the edit modal is closed")]
async fn then_modal_closed(world: &mut StocklineWorld) {
    assert!(!world.view_model().is_modal_open());
}

#[then(expr = "the {string} field contains {string}")]
async fn then_field_contains(world: &mut StocklineWorld, field: String, value: String) {
    let field = parse_field(&field).expect("known field");
    let form = world.view_model().edit_form().expect("edit modal is open");
    assert_eq!(form.value(field), value);
}

#[then(expr = "product {int} is titled {string}")]
async fn then_product_titled(world: &mut StocklineWorld, id: u64, title: String) {
    let record = world.view_model().record(id).expect("product on page");
    assert_eq!(record.title, title);
}

#[then(expr = "product {int} has {int} in stock")]
async fn then_product_stock(world: &mut StocklineWorld, id: u64, stock: u32) {
    let record = world.view_model().record(id).expect("product on page");
    assert_eq!(record.stock, stock);
}

#[then(expr = "product {int} costs {float}")]
async fn then_product_price(world: &mut StocklineWorld, id: u64, price: f64) {
    let record = world.view_model().record(id).expect("product on page");
    assert!((record.price - price).abs() < 1e-9, "price {}", record.price);
}
