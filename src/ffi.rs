use std::{
    ffi::{c_char, CStr},
    fmt,
    str::Utf8Error,
};

// Resolved by the final link. With the `link` feature the build asks for
// libplitedb itself; without it, whoever links the artifact supplies the
// symbol (the test crates define their own).
#[cfg_attr(feature = "link", link(name = "plitedb"))]
extern "C" {
    fn plitedb_version() -> *const c_char;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("plitedb returned no version string")]
    MissingVersion,
    #[error("version string is not valid utf-8: {0}")]
    InvalidEncoding(#[from] Utf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub text: String,
    pub length: usize,
}

impl VersionInfo {
    /// Copies the version text out of foreign memory. plitedb does not
    /// document how long the returned buffer stays valid, so the pointer is
    /// read once here and never retained.
    ///
    /// # Safety
    ///
    /// `ptr`, if non-null, must point to a readable null-terminated byte
    /// sequence that stays valid for the duration of this call.
    pub(crate) unsafe fn from_ptr(ptr: *const c_char) -> Result<Self> {
        if ptr.is_null() {
            return Err(Error::MissingVersion);
        }

        let text = CStr::from_ptr(ptr).to_str()?.to_owned();
        let length = text.len();

        Ok(VersionInfo { text, length })
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Version: {} (len: {})", self.text, self.length)
    }
}

pub(crate) fn get_version() -> Result<VersionInfo> {
    unsafe { VersionInfo::from_ptr(plitedb_version()) }
}
