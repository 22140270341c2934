//! # Factory Table
//!
//! Maps discriminator values to constructors and hands back the product as
//! `Box<P>`, where `P` is the capability the caller depends on.
//!
//! Every discriminator maps to exactly one constructor. An unknown discriminator
//! fails with [`FactoryError::UnrecognizedInputKind`] before any constructor runs;
//! there is no default product.
//!
//! ```rust
//! use courier_domain::input::RawInput;
//! use courier_factory::{FactoryTable, RawInputExt};
//! use courier_contracts::Factory;
//!
//! trait Shape: std::fmt::Debug + Send {
//!     fn area(&self) -> f64;
//! }
//!
//! #[derive(Debug)]
//! struct Square(f64);
//! impl Shape for Square {
//!     fn area(&self) -> f64 { self.0 * self.0 }
//! }
//!
//! let shapes = FactoryTable::<dyn Shape>::builder("shapes")
//!     .kind("square", |input| Ok(Box::new(Square(input.parsed("side")?))))
//!     .build()
//!     .unwrap();
//!
//! let square = shapes.create_from(&RawInput::new("square").with_field("side", "3")).unwrap();
//! assert_eq!(square.area(), 9.0);
//! assert!(shapes.create_from(&RawInput::new("circle")).is_err());
//! ```
//!
//! [`FactoryError::UnrecognizedInputKind`]: courier_contracts::FactoryError::UnrecognizedInputKind

mod input;
mod table;

pub use input::RawInputExt;
pub use table::{Constructor, FactoryTable, FactoryTableBuilder};
