//! Info aggregation: the descriptors behind `GET /`.

pub mod request;
pub mod runtime;
pub mod service;
pub mod system;
pub mod uptime;

use serde::Serialize;

pub use request::RequestDescriptor;
pub use runtime::RuntimeDescriptor;
pub use service::ServiceDescriptor;
pub use system::{OsSystemInfo, SystemDescriptor, SystemInfoProvider};
pub use uptime::UptimeReport;

/// One entry of the endpoint catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndpointEntry {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

pub const ENDPOINTS: &[EndpointEntry] = &[
    EndpointEntry {
        path: "/",
        method: "GET",
        description: "Service information",
    },
    EndpointEntry {
        path: "/health",
        method: "GET",
        description: "Health check",
    },
    EndpointEntry {
        path: "/config",
        method: "GET",
        description: "Current configuration",
    },
];

/// Everything `GET /` reports, assembled per request.
#[derive(Debug, Clone, Serialize)]
pub struct InfoDocument {
    pub service: ServiceDescriptor,
    pub system: SystemDescriptor,
    pub runtime: RuntimeDescriptor,
    pub request: RequestDescriptor,
    pub endpoints: &'static [EndpointEntry],
}
