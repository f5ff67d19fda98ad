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

use crate::hvac::HVAC;
use crate::Float;
use serde::{Deserialize, Serialize};

/// An ideal Heating and Cooling device, with a COP of 1.
///
/// It can serve several thermal zones at once, which is how
/// a multi-zone system is represented.
///
/// ## Example
///
/// #### `.json`
///
/// ```json
/// {
///     "name": "Bedrooms heater",
///     "target_spaces": ["Bedroom"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdealHeaterCooler {
    /// The name of the system
    pub name: String,

    /// The `Space`s that this `IdealHeaterCooler` heats and/or
    /// cools
    #[serde(default)]
    pub target_spaces: Vec<String>,

    /// Max heating power
    #[serde(skip_serializing_if = "Option::is_none")]
    max_heating_power: Option<Float>,

    /// Max cooling power
    #[serde(skip_serializing_if = "Option::is_none")]
    max_cooling_power: Option<Float>,

    /// The temperature below which the system starts heating.
    #[serde(skip_serializing_if = "Option::is_none")]
    heating_setpoint: Option<Float>,

    /// The temperature over which the system starts cooling.
    #[serde(skip_serializing_if = "Option::is_none")]
    cooling_setpoint: Option<Float>,
}

impl IdealHeaterCooler {
    /// Creates a new [`IdealHeaterCooler`] that serves no space
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            target_spaces: Vec::new(),
            max_heating_power: None,
            max_cooling_power: None,
            heating_setpoint: None,
            cooling_setpoint: None,
        }
    }

    /// Wraps the `IdealHeaterCooler` in an [`HVAC`] enum
    pub fn wrap(self) -> HVAC {
        crate::hvac::HVAC::IdealHeaterCooler(std::sync::Arc::new(self))
    }

    /// Borrows the name
    pub fn name(&self) -> &String {
        &self.name
    }

    /// Adds a `Space` to the ones served by this system
    pub fn push_target_space<S: Into<String>>(&mut self, space: S) -> &mut Self {
        self.target_spaces.push(space.into());
        self
    }

    /// Sets the max heating power
    pub fn set_max_heating_power(&mut self, v: Float) -> &mut Self {
        self.max_heating_power = Some(v);
        self
    }

    /// Gets the max heating power, or fails if it has not been set
    pub fn max_heating_power(&self) -> Result<Float, String> {
        self.max_heating_power.ok_or_else(|| {
            format!(
                "IdealHeaterCooler '{}' has no max_heating_power",
                self.name
            )
        })
    }

    /// Sets the max cooling power
    pub fn set_max_cooling_power(&mut self, v: Float) -> &mut Self {
        self.max_cooling_power = Some(v);
        self
    }

    /// Gets the max cooling power, or fails if it has not been set
    pub fn max_cooling_power(&self) -> Result<Float, String> {
        self.max_cooling_power.ok_or_else(|| {
            format!(
                "IdealHeaterCooler '{}' has no max_cooling_power",
                self.name
            )
        })
    }

    /// Sets the heating setpoint
    pub fn set_heating_setpoint(&mut self, v: Float) -> &mut Self {
        self.heating_setpoint = Some(v);
        self
    }

    /// Gets the heating setpoint, or fails if it has not been set
    pub fn heating_setpoint(&self) -> Result<Float, String> {
        self.heating_setpoint
            .ok_or_else(|| format!("IdealHeaterCooler '{}' has no heating_setpoint", self.name))
    }

    /// Sets the cooling setpoint
    pub fn set_cooling_setpoint(&mut self, v: Float) -> &mut Self {
        self.cooling_setpoint = Some(v);
        self
    }

    /// Gets the cooling setpoint, or fails if it has not been set
    pub fn cooling_setpoint(&self) -> Result<Float, String> {
        self.cooling_setpoint
            .ok_or_else(|| format!("IdealHeaterCooler '{}' has no cooling_setpoint", self.name))
    }
}
