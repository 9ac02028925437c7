//! HTTP client adapters.

mod client;
mod memory;

pub use self::client::ReqwestClient;
pub use self::memory::{MemoryHttpClient, RecordedRequest};
