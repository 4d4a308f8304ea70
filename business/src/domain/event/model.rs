use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::domain::product::model::Product;

/// The mutation a product event describes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventAction {
    Create,
    Update,
    Delete,
}

/// Product snapshot embedded in an event.
///
/// Created and Updated events carry the full record; Deleted events carry
/// only the id, so every field besides the id is optional and omitted from
/// the payload when absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_eur: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

/// Immutable record of a completed product mutation, built fresh per
/// mutation and handed to the publisher. Never persisted by this system.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEvent {
    pub event_id: String,
    #[serde(serialize_with = "serialize_timestamp_millis")]
    pub timestamp: DateTime<Utc>,
    pub action: EventAction,
    pub product: ProductSnapshot,
}

impl ProductEvent {
    pub fn created(product: &Product) -> Self {
        Self::with_snapshot(EventAction::Create, ProductSnapshot::full(product))
    }

    pub fn updated(product: &Product) -> Self {
        Self::with_snapshot(EventAction::Update, ProductSnapshot::full(product))
    }

    pub fn deleted(product_id: i64) -> Self {
        Self::with_snapshot(EventAction::Delete, ProductSnapshot::id_only(product_id))
    }

    fn with_snapshot(action: EventAction, product: ProductSnapshot) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            action,
            product,
        }
    }

    /// Message key: the product id the event concerns.
    pub fn key(&self) -> String {
        self.product.id.to_string()
    }
}

impl ProductSnapshot {
    fn full(product: &Product) -> Self {
        Self {
            id: product.id,
            code: Some(product.code.clone()),
            name: Some(product.name.clone()),
            price_eur: Some(product.price_eur.clone()),
            description: product.description.clone(),
            is_available: Some(product.is_available),
        }
    }

    fn id_only(id: i64) -> Self {
        Self {
            id,
            code: None,
            name: None,
            price_eur: None,
            description: None,
            is_available: None,
        }
    }
}

/// UTC instant with millisecond precision and a literal `Z` suffix.
fn serialize_timestamp_millis<S>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
}
