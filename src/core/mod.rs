pub mod client;
pub mod etl;
pub mod normalizer;
pub mod pipeline;
pub mod rate_limiter;
pub mod tabular;

pub use crate::domain::model::{
    CarrierRecord, LineType, LookupOutcome, LookupRequest, LookupSummary, RawLookupResult,
    TransportFailureKind,
};
pub use crate::domain::ports::{CarrierLookup, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
