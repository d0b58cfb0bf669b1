mod as_value;
mod binder;
mod cursor;
mod destination;
mod error;
mod executor;
mod field_map;
mod mapper;
mod ormy;
mod parameters;
mod placeholder;
mod query;
mod record;
mod registry;
mod target;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use binder::*;
pub use cursor::*;
pub use destination::*;
pub use error::*;
pub use executor::*;
pub use field_map::*;
pub use mapper::*;
pub use ormy::*;
pub use parameters::*;
pub use placeholder::{Placeholder, Placeholders, placeholders};
pub use query::*;
pub use record::*;
pub use registry::*;
pub use target::*;
pub use value::*;
pub mod stream {
    pub use ::futures::stream::*;
}
pub use ::futures::future;
