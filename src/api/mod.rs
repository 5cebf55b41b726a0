//! API surfaces for talking to the backend

pub mod auth;
pub mod catalog;
pub mod http;
pub mod orders;

use crate::api::auth::AuthApi;
use crate::api::catalog::CatalogApi;
use crate::api::http::HttpClient;
use crate::api::orders::OrderApi;
use crate::config::Config;
use crate::Result;

/// Entry point bundling the API surfaces behind one configuration
#[derive(Debug, Clone)]
pub struct Client {
    auth: AuthApi,
    catalog: CatalogApi,
    orders: OrderApi,
}

impl Client {
    /// Creates a new Client from the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            auth: AuthApi::new(http.clone()),
            catalog: CatalogApi::new(http.clone()),
            orders: OrderApi::new(http),
        })
    }

    /// Creates a new Client with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(Config::default())
    }

    /// Returns the authentication and profile API
    pub fn auth(&self) -> &AuthApi {
        &self.auth
    }

    /// Returns the catalog retrieval API
    pub fn catalog(&self) -> &CatalogApi {
        &self.catalog
    }

    /// Returns the order submission API
    pub fn orders(&self) -> &OrderApi {
        &self.orders
    }
}
