//! # Identifier Types
//!
//! String-backed identifiers for catalog and checkout concepts.
//!
//! All identifiers here are opaque strings minted by the external commerce
//! platform (catalog SKU ids, seller ids, assembly bindings, order-form ids).
//! The engine never parses or generates them; the newtypes exist so that an
//! item id cannot be confused with a seller id at a call site.
//!
//! # Examples
//!
//! ```
//! use storefront_assembly::domain::value_objects::{AssemblyId, ItemId};
//!
//! let item = ItemId::new("2000024");
//! let slot = AssemblyId::new("1_basic_toppings");
//! assert_eq!(item.as_str(), "2000024");
//! assert_eq!(slot.to_string(), "1_basic_toppings");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from any string-like value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id! {
    /// Catalog identifier of a line item or composition item (SKU id).
    ItemId
}

string_id! {
    /// Identifier of the seller offering an item.
    SellerId
}

string_id! {
    /// Identifier of an assembly option slot (the `parentAssemblyBinding`
    /// key that ties a child item to its slot on the father item).
    AssemblyId
}

string_id! {
    /// Identifier of an order form owned by the checkout service.
    OrderFormId
}

string_id! {
    /// Identifier of the price table used to price a composition item.
    PriceTableId
}
