pub use ffi::{Error, Result, VersionInfo};

mod ffi;

pub fn get_version() -> Result<VersionInfo> {
    ffi::get_version()
}
