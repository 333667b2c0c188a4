//! A fake product catalog served by wiremock

use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// One product the fake catalog serves
#[derive(Debug, Clone)]
pub struct SeedProduct {
    pub id: u64,
    pub title: String,
    pub stock: u32,
    pub price: f64,
}

impl SeedProduct {
    /// Generated product: every fourth one is out of stock
    pub fn numbered(id: u64) -> Self {
        Self {
            id,
            title: format!("Product {id}"),
            stock: if id % 4 == 0 { 0 } else { id as u32 },
            price: id as f64 + 0.99,
        }
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "id": self.id,
            "title": self.title,
            "category": "footwear",
            "price": self.price,
            "rating": 4.5,
            "stock": self.stock,
            "thumbnail": format!("https://cdn.example.com/products/{}/thumbnail.png", self.id),
        })
    }
}

/// Answers `GET /products?limit=&skip=` by slicing the seeded products
struct PageResponder {
    products: Vec<SeedProduct>,
    failing: Arc<AtomicBool>,
}

fn query_usize(request: &Request, key: &str) -> Option<usize> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .and_then(|(_, v)| v.parse().ok())
}

impl Respond for PageResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        if self.failing.load(Ordering::SeqCst) {
            return ResponseTemplate::new(500);
        }

        let limit = query_usize(request, "limit").unwrap_or(30);
        let skip = query_usize(request, "skip").unwrap_or(0);
        let page: Vec<_> = self
            .products
            .iter()
            .skip(skip)
            .take(limit)
            .map(SeedProduct::to_json)
            .collect();

        ResponseTemplate::new(200).set_body_json(json!({
            "products": page,
            "total": self.products.len(),
            "skip": skip,
            "limit": limit,
        }))
    }
}

/// Running fake catalog
pub struct FakeCatalog {
    pub server: MockServer,
    failing: Arc<AtomicBool>,
}

impl FakeCatalog {
    pub async fn start(products: Vec<SeedProduct>) -> Self {
        let server = MockServer::start().await;
        let failing = Arc::new(AtomicBool::new(false));

        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(PageResponder {
                products,
                failing: failing.clone(),
            })
            .mount(&server)
            .await;

        Self { server, failing }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Make every following request answer 500
    pub fn start_failing(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// (limit, skip) of every request received so far
    pub async fn requested_pages(&self) -> Vec<(usize, usize)> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|r| Some((query_usize(r, "limit")?, query_usize(r, "skip")?)))
            .collect()
    }
}
