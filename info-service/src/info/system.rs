//! Host facts, queried live from the operating system.
//!
//! OS access goes through [`SystemInfoProvider`] so the aggregation can be
//! exercised against fixed values. Every field degrades on its own: a failed
//! query yields `"unknown"` (or `null` for the CPU count) instead of an error.

use serde::Serialize;
use sysinfo::{CpuRefreshKind, RefreshKind, System};
use tracing::warn;

/// Placeholder for facts the host could not report.
pub const UNKNOWN: &str = "unknown";

/// Source of host facts. `None` means the query failed.
pub trait SystemInfoProvider: Send + Sync {
    fn hostname(&self) -> Option<String>;
    fn platform(&self) -> Option<String>;
    fn platform_version(&self) -> Option<String>;
    fn architecture(&self) -> Option<String>;
    fn cpu_count(&self) -> Option<usize>;
}

/// Queries the running host on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSystemInfo;

impl SystemInfoProvider for OsSystemInfo {
    fn hostname(&self) -> Option<String> {
        match hostname::get() {
            Ok(name) => name.into_string().ok(),
            Err(e) => {
                warn!("Failed to read hostname: {}", e);
                None
            }
        }
    }

    fn platform(&self) -> Option<String> {
        let name = match std::env::consts::OS {
            "linux" => "Linux",
            "macos" => "Darwin",
            "windows" => "Windows",
            "freebsd" => "FreeBSD",
            "" => return None,
            other => other,
        };
        Some(name.to_string())
    }

    /// Kernel release (`uname -r`), or the OS version where there is none.
    fn platform_version(&self) -> Option<String> {
        System::kernel_version().or_else(System::os_version)
    }

    fn architecture(&self) -> Option<String> {
        Some(std::env::consts::ARCH.to_string()).filter(|a| !a.is_empty())
    }

    /// Logical CPUs on the host, ignoring affinity masks and cgroup quotas.
    fn cpu_count(&self) -> Option<usize> {
        let sys = System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::new()));
        match sys.cpus().len() {
            0 => {
                warn!("Failed to read CPU count");
                None
            }
            n => Some(n),
        }
    }
}

/// Fixed answers, for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct FixedSystemInfo {
    pub hostname: Option<String>,
    pub platform: Option<String>,
    pub platform_version: Option<String>,
    pub architecture: Option<String>,
    pub cpu_count: Option<usize>,
}

impl SystemInfoProvider for FixedSystemInfo {
    fn hostname(&self) -> Option<String> {
        self.hostname.clone()
    }

    fn platform(&self) -> Option<String> {
        self.platform.clone()
    }

    fn platform_version(&self) -> Option<String> {
        self.platform_version.clone()
    }

    fn architecture(&self) -> Option<String> {
        self.architecture.clone()
    }

    fn cpu_count(&self) -> Option<usize> {
        self.cpu_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemDescriptor {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub architecture: String,
    pub cpu_count: Option<usize>,
}

impl SystemDescriptor {
    pub fn collect(provider: &dyn SystemInfoProvider) -> Self {
        let or_unknown = |v: Option<String>| v.unwrap_or_else(|| UNKNOWN.to_string());
        Self {
            hostname: or_unknown(provider.hostname()),
            platform: or_unknown(provider.platform()),
            platform_version: or_unknown(provider.platform_version()),
            architecture: or_unknown(provider.architecture()),
            cpu_count: provider.cpu_count().filter(|&n| n > 0),
        }
    }
}
