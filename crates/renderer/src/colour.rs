// SPDX-License-Identifier: MIT

//!
//! The colour type used when drawing a timeline
//!

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can arise when reading a [`Colour`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    #[error("`{0}` is not a hex colour")]
    InvalidHex(String),
}

/// The `Colour` type
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl Colour {
    /// Create a colour from RGB values
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    /// Create a colour from a hex colour (e.g. `#ab66ef`, `ab66ef`, `#ab66efff`).
    /// If the hex value has an alpha component, it is removed.
    pub fn from_hex<S: Into<String>>(hex_colour: S) -> Result<Self, ColourError> {
        let original = hex_colour.into();
        let invalid = || ColourError::InvalidHex(original.clone());
        if !original.is_ascii() {
            return Err(invalid());
        }

        // Drop any alpha component
        let len = original.len();
        let hex_colour = if len == 8 || len == 9 {
            &original[0..(len - 2)]
        } else {
            &original[..]
        };

        // Check the hex length
        let len = hex_colour.len();
        if len != 6 && len != 7 {
            return Err(invalid());
        }
        if len == 7 && !hex_colour.starts_with('#') {
            return Err(invalid());
        }

        // Work backwards so that it's independent of a leading "#"
        let r = u8::from_str_radix(&hex_colour[(len - 6)..(len - 4)], 16);
        let g = u8::from_str_radix(&hex_colour[(len - 4)..(len - 2)], 16);
        let b = u8::from_str_radix(&hex_colour[(len - 2)..len], 16);
        match (r, g, b) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Colour::from_rgb(r, g, b)),
            _ => Err(invalid()),
        }
    }

    /// e.g. `#add8e6`
    pub fn as_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_hex() {
        assert_eq!(
            Colour::from_hex("#ADD8E6").unwrap(),
            Colour::from_rgb(0xad, 0xd8, 0xe6)
        );
        assert_eq!(Colour::from_hex("add8e6").unwrap().as_hex(), "#add8e6");
        assert_eq!(Colour::from_hex("#add8e6ff").unwrap().as_hex(), "#add8e6");
        assert!(Colour::from_hex("#add8e").is_err());
        assert!(Colour::from_hex("#zzzzzz").is_err());
        assert!(Colour::from_hex("xadd8e6").is_err());
    }
}
