//! CPU rendering: raster backend selection and the triangle rasterizer.

pub mod raster;

use tracing::info;

/// Environment toggle that forces the serial fallback backend, for
/// environments where fanning out across a thread pool is unwanted.
pub const SERIAL_ENV: &str = "QUADVIEW_SERIAL";

/// How one frame gets rasterized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterBackend {
    /// Framebuffer bands fanned out across a rayon thread pool. Preferred,
    /// but only available when built with the `parallel` feature on a
    /// multi-core host.
    Parallel,
    /// Single-threaded fallback; always available.
    Serial,
}

impl RasterBackend {
    const fn name(self) -> &'static str {
        match self {
            RasterBackend::Parallel => "parallel",
            RasterBackend::Serial => "serial",
        }
    }
}

struct Probe {
    backend: RasterBackend,
    available: fn(bool) -> bool,
}

/// Preference-ordered backend probes. The last entry never fails, so
/// reaching it is policy, not an error.
const PROBES: [Probe; 2] = [
    Probe {
        backend: RasterBackend::Parallel,
        available: parallel_available,
    },
    Probe {
        backend: RasterBackend::Serial,
        available: |_| true,
    },
];

#[cfg(feature = "parallel")]
fn parallel_available(force_serial: bool) -> bool {
    !force_serial
        && std::thread::available_parallelism()
            .map(|n| n.get() > 1)
            .unwrap_or(false)
}

#[cfg(not(feature = "parallel"))]
fn parallel_available(_force_serial: bool) -> bool {
    false
}

/// Choose the raster backend: first available probe wins.
pub fn select_backend(force_serial: bool) -> RasterBackend {
    for probe in &PROBES {
        if (probe.available)(force_serial) {
            info!("raster backend: {}", probe.backend.name());
            return probe.backend;
        }
    }
    RasterBackend::Serial
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forcing_serial_skips_the_preferred_backend() {
        assert_eq!(select_backend(true), RasterBackend::Serial);
    }

    #[test]
    fn selection_always_resolves() {
        // Whatever the build features and host, some backend comes back.
        let backend = select_backend(false);
        assert!(matches!(
            backend,
            RasterBackend::Parallel | RasterBackend::Serial
        ));
    }
}
