//! Orderdesk binary entry point

use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use orderdesk::config::ServerConfig;
use orderdesk::core::{Dish, Drink, Order};
use orderdesk::storage::InMemoryOrderStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::var("ORDERDESK_CONFIG") {
        Ok(path) => ServerConfig::from_yaml_file(&path)?,
        Err(_) => ServerConfig::default(),
    };

    let store = InMemoryOrderStore::with_orders(seed_orders());

    orderdesk::server::serve(&config, Arc::new(store)).await
}

/// The one order the store has always started with; id 1 is taken, so the
/// first created order gets id 2.
fn seed_orders() -> Vec<Order> {
    vec![Order {
        id: 1,
        email: "gunnsteinnskula@gmail.com".to_string(),
        dish: Dish {
            id: "53051".to_string(),
            category: "seafood".to_string(),
            cuisine: "Malaysian".to_string(),
            description: String::new(),
            image_source: "https://www.themealdb.com/images/media/meals/wai9bw1619788844.jpg"
                .to_string(),
            name: "Nasi lemak".to_string(),
            price: 2500,
        },
        drinks: vec![Drink {
            id: "some-uuid".to_string(),
            brewer: "vifilfell".to_string(),
            category: "beer".to_string(),
            description: "tasty beer".to_string(),
            image_source: "https://www.themealdb.com/images/media/meals/wai9bw1619788844.jpg"
                .to_string(),
            name: "Gylltur".to_string(),
            price: 2500,
        }],
        count: 10,
        date: Utc::now(),
    }]
}
