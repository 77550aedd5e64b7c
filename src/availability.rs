//! Availability of declarations, both overall and per platform.

use std::fmt;
use std::os::raw::c_uint;

use serde::Serialize;

use crate::cxstring;
use crate::ffi;

/// `CXAvailabilityKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AvailabilityKind {
    /// The entity is available.
    Available,
    /// The entity is available, but has been deprecated.
    Deprecated,
    /// The entity is not available; any use of it will be an error.
    NotAvailable,
    /// The entity is available, but not accessible; any use of it will be an error.
    NotAccessible,
}

impl AvailabilityKind {
    pub(crate) fn from_raw(raw: c_uint) -> Self {
        match raw {
            1 => Self::Deprecated,
            2 => Self::NotAvailable,
            3 => Self::NotAccessible,
            _ => Self::Available,
        }
    }
}

impl fmt::Display for AvailabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Available => "Available",
            Self::Deprecated => "Deprecated",
            Self::NotAvailable => "NotAvailable",
            Self::NotAccessible => "NotAccessible",
        };
        f.write_str(s)
    }
}

/// A version number as reported by availability attributes.
///
/// Components libclang leaves out are stored as negative numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Version {
    pub major: i32,
    pub minor: i32,
    pub subminor: i32,
}

impl Version {
    pub fn major(&self) -> Option<u32> {
        u32::try_from(self.major).ok()
    }

    pub fn minor(&self) -> Option<u32> {
        u32::try_from(self.minor).ok()
    }

    pub fn subminor(&self) -> Option<u32> {
        u32::try_from(self.subminor).ok()
    }

    /// True when no component was given.
    pub fn is_absent(&self) -> bool {
        self.major < 0
    }
}

impl From<ffi::CXVersion> for Version {
    fn from(v: ffi::CXVersion) -> Self {
        Version { major: v.Major, minor: v.Minor, subminor: v.Subminor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(major) = self.major() else {
            return f.write_str("<none>");
        };
        write!(f, "{major}")?;
        if let Some(minor) = self.minor() {
            write!(f, ".{minor}")?;
            if let Some(subminor) = self.subminor() {
                write!(f, ".{subminor}")?;
            }
        }
        Ok(())
    }
}

/// Availability of an entity on one platform, copied out of a
/// `CXPlatformAvailability`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformAvailability {
    pub platform: String,
    pub introduced: Version,
    pub deprecated: Version,
    pub obsoleted: Version,
    pub unavailable: bool,
    pub message: String,
}

impl PlatformAvailability {
    /// Copies the fields and disposes the native struct.
    ///
    /// # Safety
    /// `raw` must have been filled in by `clang_getCursorPlatformAvailability`
    /// and not disposed yet.
    pub(crate) unsafe fn take(raw: &mut ffi::CXPlatformAvailability) -> Self {
        let out = PlatformAvailability {
            platform: cxstring::borrowed(raw.Platform),
            introduced: raw.Introduced.into(),
            deprecated: raw.Deprecated.into(),
            obsoleted: raw.Obsoleted.into(),
            unavailable: raw.Unavailable != 0,
            message: cxstring::borrowed(raw.Message),
        };
        ffi::clang_disposeCXPlatformAvailability(raw);
        out
    }
}

/// Result of `Cursor::platform_availability`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CursorAvailability {
    pub always_deprecated: bool,
    pub deprecated_message: String,
    pub always_unavailable: bool,
    pub unavailable_message: String,
    pub platforms: Vec<PlatformAvailability>,
}
