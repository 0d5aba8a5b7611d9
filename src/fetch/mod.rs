mod fetcher;
mod response;


pub use fetcher::{Fetcher, HttpFetcher};
pub use response::PageResponse;
