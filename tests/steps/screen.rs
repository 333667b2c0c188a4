use crate::common::world::StocklineWorld;
use cucumber::{then, when};

#[when("the screen is redrawn")]
async fn when_redrawn(world: &mut StocklineWorld) {
    world.controller().redraw().expect("redraw should succeed");
}

#[when(expr = "the terminal is resized to {int}x{int}")]
async fn when_resized(world: &mut StocklineWorld, width: u16, height: u16) {
    world
        .controller()
        .handle_resize(width, height)
        .expect("resize should redraw");
}

#[then(expr = "the screen shows {string}")]
async fn then_screen_shows(world: &mut StocklineWorld, text: String) {
    let screen = world.screen();
    assert!(screen.contains(&text), "'{text}' not on screen:\n{}", screen.text());
}

#[then(expr = "the screen does not show {string}")]
async fn then_screen_hides(world: &mut StocklineWorld, text: String) {
    let screen = world.screen();
    assert!(!screen.contains(&text), "'{text}' still on screen:\n{}", screen.text());
}

#[then(expr = "the row showing {string} also shows {string}")]
async fn then_row_shows(world: &mut StocklineWorld, anchor: String, text: String) {
    let screen = world.screen();
    let row = screen
        .find_row(&anchor)
        .unwrap_or_else(|| panic!("'{anchor}' not on screen:\n{}", screen.text()));
    let line = screen.row_text(row);
    assert!(line.contains(&text), "row {row} is '{line}'");
}

#[then(expr = "{string} is shown above {string}")]
async fn then_shown_above(world: &mut StocklineWorld, upper: String, lower: String) {
    let screen = world.screen();
    let upper_row = screen.find_row(&upper).expect("upper text on screen");
    let lower_row = screen.find_row(&lower).expect("lower text on screen");
    assert!(upper_row < lower_row, "{upper_row} is not above {lower_row}");
}
