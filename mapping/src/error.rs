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

/// The reason why an HVAC mapping document was rejected.
///
/// Every variant carries the path of the document (or a placeholder for
/// documents that were never on disk) so the message can be shown as is.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// There is no readable file at the given path
    #[error("HVAC mapping file '{path}' does not exist or cannot be read")]
    PathNotFound {
        /// The path that was given
        path: String,
    },

    /// The file is not valid JSON
    #[error("HVAC mapping file '{path}' is not valid JSON: {reason}")]
    MalformedJson {
        /// The path of the document
        path: String,
        /// What the JSON parser said
        reason: String,
    },

    /// The file is JSON but `systems[*].thermal_zones` cannot be read
    #[error("HVAC mapping file '{path}' does not follow the expected structure: {reason}")]
    InvalidSchema {
        /// The path of the document
        path: String,
        /// What is missing or has the wrong type
        reason: String,
    },

    /// No system mentions any thermal zone
    #[error("HVAC mapping file '{path}' does not assign any thermal zone")]
    EmptyMapping {
        /// The path of the document
        path: String,
    },

    /// Some thermal zones are mentioned more than once
    #[error(
        "HVAC mapping file '{path}' assigns these thermal zones more than once: {}",
        .zones.join(", ")
    )]
    DuplicateZones {
        /// The path of the document
        path: String,
        /// Every zone that appears more than once, each listed once
        zones: Vec<String>,
    },

    /// Some thermal zones are not in the model
    #[error(
        "HVAC mapping file '{path}' refers to thermal zones that are not in the model: {}",
        .zones.join(", ")
    )]
    UnknownZones {
        /// The path of the document
        path: String,
        /// Every zone missing from the model, each listed once
        zones: Vec<String>,
    },
}

impl MappingError {
    /// The path of the document that was rejected
    pub fn path(&self) -> &str {
        match self {
            MappingError::PathNotFound { path }
            | MappingError::MalformedJson { path, .. }
            | MappingError::InvalidSchema { path, .. }
            | MappingError::EmptyMapping { path }
            | MappingError::DuplicateZones { path, .. }
            | MappingError::UnknownZones { path, .. } => path,
        }
    }

    /// The zones that caused the error, if the error is about specific zones
    pub fn zones(&self) -> &[String] {
        match self {
            MappingError::DuplicateZones { zones, .. } | MappingError::UnknownZones { zones, .. } => {
                zones
            }
            _ => &[],
        }
    }
}

impl From<MappingError> for String {
    fn from(e: MappingError) -> String {
        e.to_string()
    }
}
