//! Cloud cover value object
//!
//! Represents observed cloud cover on a 0-9 scale (0 = clear sky,
//! 8 = overcast, 9 = sky obscured).
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::CloudCover;
//!
//! let c = CloudCover::new(6).expect("valid cloud cover");
//! assert_eq!(c.value(), 6);
//!
//! // Invalid values return an error
//! assert!(CloudCover::new(10).is_err());
//! ```

use serde::Serialize;
use std::fmt;

use crate::errors::DomainError;

/// Cloud cover on a 0-9 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct CloudCover(u8);

impl CloudCover {
    /// Maximum value on the scale
    pub const MAX: u8 = 9;

    /// Create a new validated cloud cover value
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCloudCover` if the value is greater than 9.
    pub const fn new(value: u8) -> Result<Self, DomainError> {
        if value > Self::MAX {
            Err(DomainError::InvalidCloudCover(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Get the raw scale value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CloudCover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}
