/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

#![deny(missing_docs)]

//! Reads and checks the documents that assign thermal zones to HVAC systems.
//!
//! Such a document looks like this:
//!
//! ```json
//! {
//!   "systems": [
//!     { "thermal_zones": ["Zone1", "Zone2"] },
//!     { "thermal_zones": ["Zone3"] }
//!   ]
//! }
//! ```
//!
//! A document is only accepted when every zone it mentions exists in the
//! model and is served by a single system. Checks run in a fixed order
//! (file, syntax, schema, emptiness, duplicates, unknown zones) and stop at
//! the first failure, so a single [`MappingError`] is ever reported.
//!
//! ```
//! use std::collections::HashSet;
//!
//! let known: HashSet<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
//!
//! let doc = mapping::validate_str(r#"{"systems":[{"thermal_zones":["A","B"]}]}"#, &known).unwrap();
//! assert_eq!(doc["systems"][0]["thermal_zones"][1], "B");
//!
//! let err = mapping::validate_str(r#"{"systems":[{"thermal_zones":["Z"]}]}"#, &known).unwrap_err();
//! assert!(matches!(err, mapping::MappingError::UnknownZones { .. }));
//! ```

/// The errors that can come out of a validation
mod error;
pub use error::MappingError;

/// The checks themselves
mod validator;
pub use validator::{
    duplicated_zones, extract_zones, unknown_zones, validate, validate_str, INLINE_DOCUMENT,
};

/// A typed view over a validated document
mod hvac_mapping;
pub use hvac_mapping::{HvacMapping, SystemEntry};
