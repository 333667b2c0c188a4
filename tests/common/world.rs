use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cucumber::World;
use std::time::Duration;
use stockline::config::{AppSettings, CatalogProfile};
use stockline::io::{MockEventStream, MockRenderStream, ScreenGrid};
use stockline::models::FormField;
use stockline::{AppController, CatalogClient, CatalogService, ProductListViewModel};

use super::catalog::{FakeCatalog, SeedProduct};

type TestController = AppController<MockEventStream, MockRenderStream>;

/// Longest wait for one fetch to come back
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Scenario state: a fake catalog and the real controller wired to mock I/O
#[derive(World)]
#[world(init = Self::new)]
pub struct StocklineWorld {
    pub catalog: Option<FakeCatalog>,
    pub seed: Vec<SeedProduct>,
    pub controller: Option<TestController>,
    pub render_stream: MockRenderStream,
}

impl std::fmt::Debug for StocklineWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StocklineWorld")
            .field("seeded_products", &self.seed.len())
            .field("started", &self.controller.is_some())
            .finish()
    }
}

impl StocklineWorld {
    pub fn new() -> Self {
        Self {
            catalog: None,
            seed: Vec::new(),
            controller: None,
            render_stream: MockRenderStream::with_size((160, 40)),
        }
    }

    pub async fn seed_catalog(&mut self, products: Vec<SeedProduct>) {
        self.seed = products.clone();
        self.catalog = Some(FakeCatalog::start(products).await);
    }

    pub fn catalog(&self) -> &FakeCatalog {
        self.catalog.as_ref().expect("catalog not seeded")
    }

    pub fn controller(&mut self) -> &mut TestController {
        self.controller.as_mut().expect("product screen not started")
    }

    pub fn view_model(&self) -> &ProductListViewModel {
        self.controller
            .as_ref()
            .expect("product screen not started")
            .view_model()
    }

    pub fn screen(&self) -> ScreenGrid {
        self.render_stream.screen()
    }

    /// Build the controller against the fake catalog and load page 1
    pub async fn start_screen(&mut self) -> Result<()> {
        let settings = AppSettings {
            profile_name: "default".to_string(),
            profile_path: "/nonexistent/stockline/profile".to_string(),
            catalog: CatalogProfile::with_base_url(self.catalog().uri()),
        };
        let catalog = CatalogService::new(CatalogClient::new(&settings.catalog)?);
        let mut controller = AppController::with_io_streams(
            settings,
            MockEventStream::empty(),
            self.render_stream.clone(),
            catalog,
        )?;

        controller.load_first_page();
        self.controller = Some(controller);
        self.settle().await
    }

    /// Wait until no fetch is outstanding
    pub async fn settle(&mut self) -> Result<()> {
        while self.view_model().is_loading() {
            tokio::time::timeout(FETCH_TIMEOUT, self.controller().wait_for_fetch())
                .await
                .map_err(|_| anyhow!("catalog fetch did not complete"))??;
        }
        Ok(())
    }

    /// Press a key by name and wait for any fetch it started
    pub async fn press(&mut self, key_name: &str) -> Result<()> {
        let key = parse_key(key_name)?;
        self.controller().handle_key_event(key)?;
        self.settle().await
    }

    pub async fn type_text(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            self.press(&ch.to_string()).await?;
        }
        Ok(())
    }

    /// Highlight the row with this title, then press Enter
    pub async fn open_product(&mut self, title: &str) -> Result<()> {
        let row = self
            .view_model()
            .records()
            .iter()
            .position(|r| r.title == title)
            .ok_or_else(|| anyhow!("no row titled '{title}'"))?;

        while self.view_model().selected_row() > row {
            self.press("k").await?;
        }
        while self.view_model().selected_row() < row {
            self.press("j").await?;
        }
        self.press("Enter").await
    }

    /// Tab to a field, clear it with Backspace and type the new value
    pub async fn replace_field(&mut self, field: FormField, value: &str) -> Result<()> {
        for _ in 0..FormField::ALL.len() {
            let focused = self.view_model().edit_form().map(|f| f.focused());
            if focused == Some(field) {
                break;
            }
            self.press("Tab").await?;
        }

        let length = self
            .view_model()
            .edit_form()
            .map(|f| f.value(field).chars().count())
            .ok_or_else(|| anyhow!("edit modal is not open"))?;
        for _ in 0..length {
            self.press("Backspace").await?;
        }
        self.type_text(value).await
    }
}

pub fn parse_key(name: &str) -> Result<KeyEvent> {
    let code = match name {
        "Enter" => KeyCode::Enter,
        "Esc" => KeyCode::Esc,
        "Tab" => KeyCode::Tab,
        "BackTab" => KeyCode::BackTab,
        "Backspace" => KeyCode::Backspace,
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "Space" => KeyCode::Char(' '),
        single if single.chars().count() == 1 => {
            KeyCode::Char(single.chars().next().unwrap_or(' '))
        }
        other => return Err(anyhow!("unknown key '{other}'")),
    };
    Ok(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn parse_field(name: &str) -> Result<FormField> {
    FormField::ALL
        .into_iter()
        .find(|f| f.label().eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow!("unknown field '{name}'"))
}
