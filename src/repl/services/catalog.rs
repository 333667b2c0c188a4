//! # Catalog Service
//!
//! Fetches pages of products from the remote catalog.
//!
//! The only call is `GET {base_url}/products?limit={limit}&skip={skip}`.
//! Fetches run on spawned tokio tasks and report back through a channel so
//! the UI loop never waits on the network.

use crate::config::CatalogProfile;
use crate::repl::models::{FetchTicket, PageRequest, ProductPage};
use anyhow::{Context, Result};
use thiserror::Error;
use tokio::sync::mpsc;

/// Ways a page fetch can fail
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Connection, timeout or body read failure
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status
    #[error("catalog service answered {status}")]
    Status { status: reqwest::StatusCode },

    /// The body was not a product page
    #[error("malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the product catalog
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Build a client from a catalog profile
    pub fn new(profile: &CatalogProfile) -> Result<Self> {
        tracing::debug!("Creating CatalogClient for {}", profile.base_url());

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = profile.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: profile.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint listing products
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// Fetch one page of products
    pub async fn fetch_page(&self, request: &PageRequest) -> Result<ProductPage, CatalogError> {
        let url = self.products_url();
        tracing::debug!(
            "GET {} limit={} skip={}",
            url,
            request.limit(),
            request.offset()
        );

        let response = self
            .http
            .get(&url)
            .query(&[("limit", request.limit()), ("skip", request.offset())])
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| CatalogError::Transport { url, source })?;

        Ok(serde_json::from_str(&body)?)
    }
}

/// A completed fetch, tagged with the ticket it was issued for
#[derive(Debug)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    pub result: Result<ProductPage, CatalogError>,
}

/// Runs fetches in the background and collects their outcomes
pub struct CatalogService {
    client: CatalogClient,
    /// Channel for receiving completed fetches
    outcome_receiver: mpsc::Receiver<FetchOutcome>,
    /// Channel sender cloned into each fetch task
    outcome_sender: mpsc::Sender<FetchOutcome>,
}

impl CatalogService {
    pub fn new(client: CatalogClient) -> Self {
        let (outcome_sender, outcome_receiver) = mpsc::channel(16);
        Self {
            client,
            outcome_receiver,
            outcome_sender,
        }
    }

    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// Start a fetch for the ticket without waiting for it
    ///
    /// Earlier fetches are not cancelled; the view model decides which
    /// outcome still counts.
    pub fn dispatch(&self, ticket: FetchTicket) {
        let client = self.client.clone();
        let sender = self.outcome_sender.clone();

        tokio::spawn(async move {
            let result = client.fetch_page(&ticket.request).await;
            if let Err(e) = &result {
                tracing::debug!("Fetch #{} failed: {e}", ticket.token.value());
            }
            // Receiver may have been dropped on shutdown
            let _ = sender.send(FetchOutcome { ticket, result }).await;
        });
    }

    /// Take a completed fetch if one is ready (non-blocking)
    pub fn poll_outcome(&mut self) -> Option<FetchOutcome> {
        self.outcome_receiver.try_recv().ok()
    }

    /// Wait for the next completed fetch
    pub async fn next_outcome(&mut self) -> Option<FetchOutcome> {
        self.outcome_receiver.recv().await
    }
}
