//! HTTP layer: transport abstraction and the retrying fetcher.

pub mod fetcher;
pub mod retry;
pub mod transport;

pub use fetcher::RetryingFetcher;
pub use retry::{RetryConfig, Sleeper, TokioSleeper};
pub use transport::{RawResponse, ReqwestTransport, Transport};

#[cfg(test)]
pub(crate) mod testing;
