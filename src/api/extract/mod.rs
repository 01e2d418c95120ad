//! Custom request extractors.

mod request_url;

pub use request_url::RequestUrl;
