mod binding;
mod collection;
mod concurrency;
mod named;
mod simple;

use binding::binding;
use collection::collection;
use concurrency::concurrency;
use log::LevelFilter;
use named::named;
use ormy::{Executor, Ormy};
use simple::simple;
use std::env;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Runs the whole suite. The executor must accept `CREATE TABLE`, `INSERT`
/// and `SELECT` statements with sqlite compatible literals.
pub async fn execute_tests<E: Executor>(ormy: &Ormy<E>) {
    simple(ormy).await;
    binding(ormy).await;
    named(ormy).await;
    collection(ormy).await;
    concurrency(ormy).await;
}

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        $($code)+
        log::set_max_level(level);
    }};
}
