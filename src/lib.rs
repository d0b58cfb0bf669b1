//! Bind parameters into SQL templates and materialize the resulting rows
//! into plain Rust records.
//!
//! ```rust,ignore
//! use ormy::{Ormy, Record, params};
//!
//! #[derive(Default, Record)]
//! struct Thing {
//!     #[ormy(name = "col")]
//!     column: String,
//!     two: String,
//! }
//!
//! let ormy = Ormy::new(connection);
//! let mut things = Vec::<Thing>::new();
//! ormy.select("SELECT col, $1 two FROM tmp", params!["Two"])
//!     .all(&mut things)
//!     .await?;
//! ```
pub use ormy_core::*;
pub use ormy_macros::*;
