pub mod types;

pub use types::{
    GREETING, HealthResponse, HealthStatus, PLATFORM_ENV, RootResponse, UNKNOWN_PLATFORM,
};
