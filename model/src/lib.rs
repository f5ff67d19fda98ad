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

//! This crate contains the data structure utilized for describing
//! a building before it is handed over to an energy simulation.
//!
//! # Introduction
//!
//! A [`Model`] holds the thermal zones of a building (i.e., [`Space`]s), the
//! [`HVAC`] systems serving them and some [`SiteDetails`] such as the climate
//! zone and the weather file. Models are read from and written to JSON.
//!
//! Objects are added through the `add_*` methods, which wrap them in an
//! `Arc` and return a clone of it. Objects are retrieved by name.
//!
//! # Example
//!
//! ```
//! use model::{Model, Space, hvac::IdealHeaterCooler};
//!
//! let mut model = Model::default();
//! model.add_space(Space::new("Core_ZN"));
//!
//! let mut hvac = IdealHeaterCooler::new("Core HVAC");
//! hvac.push_target_space("Core_ZN");
//! model.add_hvac(hvac.wrap()).unwrap();
//!
//! // Objects that point to spaces that do not exist are rejected
//! let mut hvac = IdealHeaterCooler::new("Lost HVAC");
//! hvac.push_target_space("Attic");
//! assert!(model.add_hvac(hvac.wrap()).is_err());
//!
//! assert!(model.space_names().contains("Core_ZN"));
//! ```

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

/// The model itself
mod model;
pub use crate::model::Model;

/// Some details of the site in which the building(s) is located
mod site_details;
pub use site_details::SiteDetails;

/// Represents a thermal zone within a building. This will
/// often be a room, but it might also be a whole floor
mod space;
pub use space::{Space, SpacePurpose};

/// A collection of elements heating and cooling systems
pub mod hvac;
pub use hvac::HVAC;

/// For printing warning and error messages to the user
pub mod error_msgs;
pub use error_msgs::{print_error, print_warning};
