//! SIMD-dispatched batch operations
//!
//! Hot loops over color buffers, compiled for several instruction sets via
//! `multiversion` and dispatched at runtime.
//!
//! Supported instruction sets:
//! - x86-64: SSE4.1, AVX2
//! - ARM64: NEON
//!
//! The scalar fallback is always available.

mod batch;
mod gamma;
mod nearest;
mod xyz;

pub use batch::{clamp_colors, colors_to_rgba8, rgba8_to_colors};
pub use gamma::{compress_colors, expand_colors};
pub use nearest::nearest_index;
pub use xyz::colors_to_xyz;

/// Get a description of the active SIMD features
pub fn active_features() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            "AVX2"
        } else if is_x86_feature_detected!("sse4.1") {
            "SSE4.1"
        } else {
            "scalar"
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        "NEON"
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        "scalar"
    }
}
