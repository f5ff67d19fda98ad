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

//! The `typical` measure: it turns a model that has thermal zones into a
//! typical building for a certain climate zone and building-code template.
//!
//! A run may replace the geometry with a preset, validates the HVAC
//! mapping document when HVAC systems are to be read from it, finds the
//! climate zone and then hands the model to a [`ModelGenerator`].
//!
//! ```
//! use typical::{ClimateZone, CreateTypical, MeasureOptions, RunReport, StandardsGenerator};
//! use typical::model::{Model, Space};
//!
//! let mut model = Model::default();
//! model.add_space(Space::new("Kitchen"));
//!
//! let measure = CreateTypical::new(MeasureOptions {
//!     climate_zone: ClimateZone::Cz3C,
//!     ..MeasureOptions::default()
//! });
//! let mut report = RunReport::new();
//! assert!(measure.run(&mut model, &StandardsGenerator, &mut report));
//! assert_eq!(model.hvacs.len(), 1);
//! ```

/// The options of the measure
pub mod options;
pub use options::{ClimateZone, HvacType, MeasureOptions, Template};

/// Messages produced during a run
pub mod report;
pub use report::{MessageLevel, RunReport};

/// The collaborator that builds the typical building
pub mod generator;
pub use generator::{GenerationRequest, ModelGenerator, StandardsGenerator};

/// Default weather files
pub mod weather;
pub use weather::representative_weather_file;

/// Running the measure
pub mod create_typical;
pub use create_typical::CreateTypical;

// Re-exports
pub use mapping;
pub use model;
pub use model::{Float, Model};
pub use presets;
pub use presets::GeometryPreset;
