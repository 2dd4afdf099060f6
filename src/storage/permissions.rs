//! File permissions and timestamps
//!
//! Extracts the metadata fields reported by stat in a platform-aware way.

use std::fs::Metadata;
use std::time::{SystemTime, UNIX_EPOCH};

/// Low nine permission bits formatted as three octal digits.
#[cfg(unix)]
pub fn permission_bits(metadata: &Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;
    format!("{:03o}", metadata.permissions().mode() & 0o777)
}

#[cfg(not(unix))]
pub fn permission_bits(metadata: &Metadata) -> String {
    let bits = if metadata.permissions().readonly() { 0o444 } else { 0o666 };
    format!("{:03o}", bits)
}

pub fn modified_time(metadata: &Metadata) -> f64 {
    metadata.modified().map(epoch_seconds).unwrap_or(0.0)
}

/// Inode change time on Unix, birth time elsewhere.
#[cfg(unix)]
pub fn created_time(metadata: &Metadata) -> f64 {
    use std::os::unix::fs::MetadataExt;
    metadata.ctime() as f64 + metadata.ctime_nsec() as f64 / 1e9
}

#[cfg(not(unix))]
pub fn created_time(metadata: &Metadata) -> f64 {
    metadata.created().map(epoch_seconds).unwrap_or(0.0)
}

fn epoch_seconds(time: SystemTime) -> f64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    }
}
