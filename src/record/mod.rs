//! Typed, named access to the attributes of an element.
//!
//! Containers and algorithms work with key functions (`Fn(&T) -> K`), which is all most callers
//! need. Collaborators that choose an attribute at runtime (a column picked from a menu, say)
//! describe their element type with [`Record`] instead: the attributes are an enum declared with
//! [`record_fields!`](crate::record_fields), a name is parsed into that enum exactly once, and a
//! misspelled name is reported as an [`UnknownField`] right there rather than turning into an empty
//! search result later on.
//!
//! # Examples
//! ```
//! use keyed_collections::record::{Record, Value, field_key};
//! use keyed_collections::record_fields;
//!
//! struct Customer {
//!     id: u32,
//!     name: String,
//! }
//!
//! record_fields! {
//!     pub enum CustomerField for Customer {
//!         Id => "customer_id",
//!         Name => "name",
//!     }
//! }
//!
//! impl Record for Customer {
//!     type Field = CustomerField;
//!
//!     fn field(&self, field: CustomerField) -> Value {
//!         match field {
//!             CustomerField::Id => self.id.into(),
//!             CustomerField::Name => self.name.as_str().into(),
//!         }
//!     }
//! }
//!
//! let jane = Customer { id: 2, name: String::from("Jane Smith") };
//! let by_name = field_key::<Customer>("name".parse().unwrap());
//! assert_eq!(by_name(&jane), Value::from("Jane Smith"));
//! assert!("age".parse::<CustomerField>().is_err());
//! ```

mod value;

use std::fmt::Debug;
use std::str::FromStr;

pub use value::*;
#[doc(inline)]
pub use crate::util::error::UnknownField;

/// An element type with a fixed set of named attributes.
pub trait Record {
    /// The attributes of this record, usually declared with
    /// [`record_fields!`](crate::record_fields).
    type Field: Copy + Debug + FromStr<Err = UnknownField>;

    /// Returns the value of the provided attribute.
    fn field(&self, field: Self::Field) -> Value;
}

/// Turns an attribute into a key function, for use with the algorithms or the container lookups.
pub fn field_key<R: Record + ?Sized>(field: R::Field) -> impl Fn(&R) -> Value {
    move |record| record.field(field)
}

/// Declares the field enum of a [`Record`] type, mapping each variant to its attribute name.
///
/// The generated enum implements [`FromStr`] (returning [`UnknownField`] for names it doesn't
/// declare) and [`Display`](std::fmt::Display), and lists its variants in `ALL`.
#[macro_export]
macro_rules! record_fields {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $record:ty {
            $($variant:ident => $field_name:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            /// Every field, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The attribute name of this field.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $field_name),+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::record::UnknownField;

            fn from_str(name: &str) -> ::std::result::Result<Self, Self::Err> {
                match name {
                    $($field_name => ::std::result::Result::Ok($name::$variant),)+
                    _ => ::std::result::Result::Err($crate::record::UnknownField {
                        name: ::std::string::String::from(name),
                        record: ::std::stringify!($record),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
