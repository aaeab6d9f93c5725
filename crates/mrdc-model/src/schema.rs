//! Declared column kinds and per-entity schemas.
//!
//! Raw extracts arrive with whatever dtypes the source produced. Each entity
//! declares the columns its cleaner consumes (checked once on entry) and the
//! kinds its typed columns must hold once cleaning is complete (checked after
//! each type-changing step and again on exit).

use std::fmt;

use polars::prelude::{DataFrame, DataType};
use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;
use crate::error::{ModelError, Result};

/// Kind of values a column is declared to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Free text.
    Text,
    /// Whole numbers of any width.
    Integer,
    /// Floating point.
    Float,
    /// Calendar date without time of day.
    Date,
    /// Text restricted to a small enumerated domain.
    ///
    /// Stored as a string column; the domain is enforced by the
    /// group-frequency filter rather than by a categorical dtype.
    Category,
}

impl ColumnKind {
    /// Whether a polars dtype satisfies this kind.
    pub fn accepts(self, dtype: &DataType) -> bool {
        match self {
            ColumnKind::Text | ColumnKind::Category => matches!(dtype, DataType::String),
            ColumnKind::Integer => dtype.is_integer(),
            ColumnKind::Float => dtype.is_float(),
            ColumnKind::Date => matches!(dtype, DataType::Date),
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColumnKind::Text => "text",
            ColumnKind::Integer => "integer",
            ColumnKind::Float => "float",
            ColumnKind::Date => "date",
            ColumnKind::Category => "category",
        };
        f.write_str(label)
    }
}

/// A named column with its declared kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn col(name: &'static str, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec { name, kind }
}

/// Columns consumed and produced by one entity cleaner.
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    pub entity: EntityKind,
    /// Columns that must be present in the raw table.
    pub required: &'static [&'static str],
    /// Typed columns of the cleaned table.
    pub typed: &'static [ColumnSpec],
    /// Column(s) forming the index of the cleaned table.
    pub index: &'static [&'static str],
    /// Column whose missing values cause the row to be dropped.
    pub non_null: Option<&'static str>,
}

static USERS: EntitySchema = EntitySchema {
    entity: EntityKind::Users,
    required: &[
        "first_name",
        "email_address",
        "country",
        "country_code",
        "date_of_birth",
        "join_date",
        "phone_number",
        "index",
    ],
    typed: &[
        col("first_name", ColumnKind::Text),
        col("email_address", ColumnKind::Text),
        col("country", ColumnKind::Category),
        col("country_code", ColumnKind::Category),
        col("date_of_birth", ColumnKind::Date),
        col("join_date", ColumnKind::Date),
        col("phone_number", ColumnKind::Text),
    ],
    index: &["index"],
    non_null: Some("first_name"),
};

static CARDS: EntitySchema = EntitySchema {
    entity: EntityKind::Cards,
    required: &["card_number", "card_provider", "date_payment_confirmed"],
    typed: &[
        col("card_number", ColumnKind::Text),
        col("card_provider", ColumnKind::Category),
        col("date_payment_confirmed", ColumnKind::Date),
    ],
    index: &["card_number"],
    non_null: Some("card_number"),
};

static STORES: EntitySchema = EntitySchema {
    entity: EntityKind::Stores,
    required: &[
        "store_code",
        "country_code",
        "continent",
        "lat",
        "latitude",
        "longitude",
        "staff_numbers",
        "opening_date",
        "index",
    ],
    typed: &[
        col("store_code", ColumnKind::Text),
        col("country_code", ColumnKind::Category),
        col("continent", ColumnKind::Category),
        col("staff_numbers", ColumnKind::Text),
        col("opening_date", ColumnKind::Date),
    ],
    index: &["index"],
    non_null: Some("store_code"),
};

static PRODUCTS: EntitySchema = EntitySchema {
    entity: EntityKind::Products,
    required: &[
        "Unnamed: 0",
        "product_name",
        "category",
        "weight",
        "date_added",
        "removed",
    ],
    typed: &[
        col("product_name", ColumnKind::Text),
        col("category", ColumnKind::Category),
        col("weight", ColumnKind::Float),
        col("date_added", ColumnKind::Date),
        col("removed", ColumnKind::Category),
    ],
    index: &["index"],
    non_null: Some("product_name"),
};

static ORDERS: EntitySchema = EntitySchema {
    entity: EntityKind::Orders,
    required: &[
        "date_uuid",
        "user_uuid",
        "card_number",
        "index",
        "level_0",
        "first_name",
        "last_name",
        "1",
    ],
    typed: &[
        col("date_uuid", ColumnKind::Text),
        col("user_uuid", ColumnKind::Text),
        col("card_number", ColumnKind::Text),
    ],
    index: &["date_uuid", "user_uuid"],
    non_null: None,
};

static EVENTS: EntitySchema = EntitySchema {
    entity: EntityKind::Events,
    required: &["date_uuid", "time_period"],
    typed: &[
        col("date_uuid", ColumnKind::Text),
        col("time_period", ColumnKind::Category),
    ],
    index: &["date_uuid"],
    non_null: Some("date_uuid"),
};

impl EntitySchema {
    pub fn for_entity(entity: EntityKind) -> &'static EntitySchema {
        match entity {
            EntityKind::Users => &USERS,
            EntityKind::Cards => &CARDS,
            EntityKind::Stores => &STORES,
            EntityKind::Products => &PRODUCTS,
            EntityKind::Orders => &ORDERS,
            EntityKind::Events => &EVENTS,
        }
    }

    /// Check that every column the cleaner consumes is present.
    ///
    /// Fails fast on the first absent column.
    pub fn validate_input(&self, df: &DataFrame) -> Result<()> {
        for column in self.required {
            if !has_column(df, column) {
                return Err(ModelError::MissingColumn {
                    entity: self.entity,
                    column: (*column).to_string(),
                });
            }
        }
        Ok(())
    }

    /// Check the typed columns and index of a cleaned table.
    pub fn validate_output(&self, df: &DataFrame) -> Result<()> {
        for column in self.index {
            if !has_column(df, column) {
                return Err(ModelError::MissingColumn {
                    entity: self.entity,
                    column: (*column).to_string(),
                });
            }
        }
        for column in self.typed {
            if !has_column(df, column.name) {
                return Err(ModelError::MissingColumn {
                    entity: self.entity,
                    column: column.name.to_string(),
                });
            }
            expect_kind(df, column.name, column.kind)?;
        }
        Ok(())
    }

    /// Declared kind of a typed column, if any.
    pub fn kind_of(&self, column: &str) -> Option<ColumnKind> {
        self.typed
            .iter()
            .find(|spec| spec.name == column)
            .map(|spec| spec.kind)
    }
}

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

/// Check that an existing column holds values of the given kind.
pub fn expect_kind(df: &DataFrame, column: &str, kind: ColumnKind) -> Result<()> {
    let dtype = df.column(column)?.dtype();
    if kind.accepts(dtype) {
        Ok(())
    } else {
        Err(ModelError::ColumnKind {
            column: column.to_string(),
            expected: kind,
            found: dtype.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_accepts_string_only() {
        assert!(ColumnKind::Category.accepts(&DataType::String));
        assert!(!ColumnKind::Category.accepts(&DataType::Int64));
    }

    #[test]
    fn test_integer_accepts_any_width() {
        assert!(ColumnKind::Integer.accepts(&DataType::Int32));
        assert!(ColumnKind::Integer.accepts(&DataType::UInt64));
        assert!(!ColumnKind::Integer.accepts(&DataType::Float64));
    }

    #[test]
    fn test_every_index_column_is_required_or_renamed() {
        for entity in EntityKind::ALL {
            let schema = entity.schema();
            for column in schema.index {
                let renamed = entity == EntityKind::Products && *column == "index";
                assert!(
                    renamed || schema.required.contains(column),
                    "{entity}: index column {column} not consumed"
                );
            }
        }
    }
}
