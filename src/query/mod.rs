//! SuiteQL query module
//!
//! Drives the paginated query endpoint to completion: repeated signed
//! POSTs, following each page's `next` link until `hasMore` is false.
//! Page fetches are strictly sequential; a next URL is only known after
//! the previous response is parsed.

mod client;
mod types;

pub use client::SuiteQlClient;
pub use types::{error_detail_from_body, QueryPage};
