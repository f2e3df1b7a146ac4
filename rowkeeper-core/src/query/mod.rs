//! Read pipeline for list requests: filter, rank, then paginate.

pub mod filtering;
pub mod paging;
pub mod params;
pub mod ranking;
