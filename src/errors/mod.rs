pub mod error_mapper;

pub use error_mapper::{map_filter_error, map_load_error};
