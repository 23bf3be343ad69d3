//! Reference source adapters.
//!
//! Adapters turn source-specific material into the engine's uniform fragment
//! shapes. They never see markup; callers hand them already-extracted text or
//! decoded JSON records.
//!
//! - [`text`]: prose such as `"L-V 9:00 a 19:00 S 9:00 a 14:00"` → [`RawFragment`](crate::normalize::RawFragment)s
//! - [`numeric`]: `{day, from, to, type}` records → [`RawNumericFragment`](crate::normalize::RawNumericFragment)s

pub mod numeric;
pub mod text;
