#![warn(clippy::pedantic)]
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::ptr_as_ptr)]

pub mod aggregator;
pub mod bridge;
pub mod calc_error;
pub mod combination;
pub mod enumerator;
pub mod logging;
pub mod mode;
pub mod plate;
pub mod plate_usage;
pub mod rack;
pub mod settings;
pub mod summary;
pub mod unit;
pub mod weight_result;
