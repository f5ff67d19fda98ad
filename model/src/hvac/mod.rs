/*
MIT License
Copyright (c) 2021 Germán Molina
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

use serde::{Deserialize, Serialize};
mod electric_heater;
mod ideal_heater_cooler;
pub use crate::hvac::electric_heater::ElectricHeater;
pub use crate::hvac::ideal_heater_cooler::IdealHeaterCooler;
use std::sync::Arc;

/// A collection of elements heating and cooling systems
///
/// ## Example `.json`
///
/// ```json
/// {
///     "type": "IdealHeaterCooler",
///     "name": "Bedrooms heater",
///     "target_spaces": ["Bedroom"]
/// }
/// ```
///
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HVAC {
    /// An ideal heating/cooling device.
    /// Heats and Cools with an efficiency of
    /// 1, and nothing effects its COP or efficiency
    IdealHeaterCooler(Arc<IdealHeaterCooler>),

    /// An electric heater, it can only
    /// heat.
    ElectricHeater(Arc<ElectricHeater>),
}

impl HVAC {
    /// Borrows the name of the HVAC, whatever its kind
    pub fn name(&self) -> &String {
        match self {
            HVAC::IdealHeaterCooler(hvac) => &hvac.name,
            HVAC::ElectricHeater(hvac) => &hvac.name,
        }
    }

    /// The names of the spaces served by this HVAC
    pub fn target_spaces(&self) -> Vec<&String> {
        match self {
            HVAC::IdealHeaterCooler(hvac) => hvac.target_spaces.iter().collect(),
            HVAC::ElectricHeater(hvac) => hvac.target_space().into_iter().collect(),
        }
    }
}

/***********/
/* TESTING */
/***********/
