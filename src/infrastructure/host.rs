//! Host platform detection for the environment descriptor.

/// OS type and kernel release, e.g. `Linux 6.1.0-18-amd64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub os_type: String,
    pub release: String,
}

impl HostInfo {
    /// Detect the running platform.
    ///
    /// The kernel release is read from procfs on Linux; other platforms report
    /// `unknown`.
    pub fn detect() -> Self {
        Self {
            os_type: os_type(std::env::consts::OS).to_string(),
            release: kernel_release().unwrap_or_else(|| "unknown".to_string()),
        }
    }

    /// `"<type> <release>"`
    pub fn describe(&self) -> String {
        format!("{} {}", self.os_type, self.release)
    }
}

/// Map the compile-time OS name to the `uname`-style type name.
fn os_type(os: &str) -> &str {
    match os {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows_NT",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        other => other,
    }
}

fn kernel_release() -> Option<String> {
    if cfg!(target_os = "linux") {
        std::fs::read_to_string("/proc/sys/kernel/osrelease")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    } else {
        None
    }
}
