//! Business entity kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::schema::EntitySchema;

/// The business entities that flow through the cleaning pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    #[serde(alias = "user")]
    Users,
    #[serde(alias = "card")]
    Cards,
    #[serde(alias = "store")]
    Stores,
    #[serde(alias = "product")]
    Products,
    #[serde(alias = "order")]
    Orders,
    #[serde(alias = "event")]
    Events,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Users,
        EntityKind::Cards,
        EntityKind::Stores,
        EntityKind::Products,
        EntityKind::Orders,
        EntityKind::Events,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Users => "users",
            EntityKind::Cards => "cards",
            EntityKind::Stores => "stores",
            EntityKind::Products => "products",
            EntityKind::Orders => "orders",
            EntityKind::Events => "events",
        }
    }

    /// Warehouse table the cleaned entity is loaded into by default.
    pub fn default_destination(self) -> &'static str {
        match self {
            EntityKind::Users => "dim_users",
            EntityKind::Cards => "dim_card_details",
            EntityKind::Stores => "dim_store_details",
            EntityKind::Products => "dim_products",
            EntityKind::Orders => "orders_table",
            EntityKind::Events => "dim_date_times",
        }
    }

    pub fn schema(self) -> &'static EntitySchema {
        EntitySchema::for_entity(self)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an entity name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntity(pub String);

impl fmt::Display for UnknownEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown entity '{}'", self.0)
    }
}

impl std::error::Error for UnknownEntity {}

impl FromStr for EntityKind {
    type Err = UnknownEntity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "users" | "user" => Ok(EntityKind::Users),
            "cards" | "card" => Ok(EntityKind::Cards),
            "stores" | "store" => Ok(EntityKind::Stores),
            "products" | "product" => Ok(EntityKind::Products),
            "orders" | "order" => Ok(EntityKind::Orders),
            "events" | "event" => Ok(EntityKind::Events),
            _ => Err(UnknownEntity(s.to_string())),
        }
    }
}
