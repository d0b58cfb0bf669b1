mod connection;
mod extract;

pub use connection::*;
