//! Pagination module
//!
//! Cursor pagination over the `/studies` endpoint: the request parameters for
//! one page, and the loop state the driver carries between pages.

mod params;
mod types;

pub use params::{
    PageRequestParams, COUNT_TOTAL_PARAM, PAGE_SIZE_PARAM, PAGE_TOKEN_PARAM, SEARCH_PARAM,
};
pub use types::{
    next_cursor, DriverState, PaginationState, StopReason, NEXT_PAGE_TOKEN_FIELD, STUDIES_FIELD,
    TOTAL_COUNT_FIELD,
};
