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

use crate::Float;
use serde::{Deserialize, Serialize};

/// A simple model of an Electric Heater (e.g., a baseboard). It can only heat
/// and has a COP of 1.
///
/// The thermostat that controls it, if any, is assumed to be in
/// the `target_space`
///
/// ## Examples
///
/// #### `.json`
///
/// ```json
/// {
///     "name": "Bedrooms heater",
///     "target_space": "Bedroom"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElectricHeater {
    /// The name of the system
    pub name: String,

    /// The `Space` that this [`ElectricHeater`] heats
    #[serde(skip_serializing_if = "Option::is_none")]
    target_space: Option<String>,

    /// Max heating power
    #[serde(skip_serializing_if = "Option::is_none")]
    max_heating_power: Option<Float>,

    /// The temperature below which the heater starts heating.
    #[serde(skip_serializing_if = "Option::is_none")]
    heating_setpoint: Option<Float>,
}

impl ElectricHeater {
    /// Creates a new [`ElectricHeater`] that serves no space
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            target_space: None,
            max_heating_power: None,
            heating_setpoint: None,
        }
    }

    /// Wraps the `ElectricHeater` in an `HVAC` enum
    pub fn wrap(self) -> crate::hvac::HVAC {
        crate::hvac::HVAC::ElectricHeater(std::sync::Arc::new(self))
    }

    /// Borrows the name
    pub fn name(&self) -> &String {
        &self.name
    }

    /// Sets the `Space` heated by this heater
    pub fn set_target_space<S: Into<String>>(&mut self, v: S) -> &mut Self {
        self.target_space = Some(v.into());
        self
    }

    /// Gets the target space, or fails if it has not been set
    pub fn target_space(&self) -> Result<&String, String> {
        self.target_space
            .as_ref()
            .ok_or_else(|| format!("ElectricHeater '{}' has no target_space", self.name))
    }

    /// Sets the max heating power
    pub fn set_max_heating_power(&mut self, v: Float) -> &mut Self {
        self.max_heating_power = Some(v);
        self
    }

    /// Gets the max heating power, or fails if it has not been set
    pub fn max_heating_power(&self) -> Result<Float, String> {
        self.max_heating_power
            .ok_or_else(|| format!("ElectricHeater '{}' has no max_heating_power", self.name))
    }

    /// Sets the heating setpoint
    pub fn set_heating_setpoint(&mut self, v: Float) -> &mut Self {
        self.heating_setpoint = Some(v);
        self
    }

    /// Gets the heating setpoint, or fails if it has not been set
    pub fn heating_setpoint(&self) -> Result<Float, String> {
        self.heating_setpoint
            .ok_or_else(|| format!("ElectricHeater '{}' has no heating_setpoint", self.name))
    }
}

#[cfg(test)]
mod testing {

    use super::*;

    #[test]
    fn serde() {
        use json5;
        use std::fs;

        // Hardcode a reference
        let mut hardcoded_ref = ElectricHeater::new("Bedrooms heater");
        hardcoded_ref.set_target_space("Bedroom");

        // Deserialize from hardcoded string and check they are the same
        let from_hardcoded_json: ElectricHeater = json5::from_str(
            "{
            name: \"Bedrooms heater\",
            target_space: 'Bedroom',
        }",
        )
        .unwrap();
        assert_eq!(hardcoded_ref, from_hardcoded_json);

        // Read json file, Deserialize, and compare
        let json_data = fs::read_to_string("./tests/scanner/electric_heater.json").unwrap();
        let from_json_file: ElectricHeater = serde_json::from_str(&json_data).unwrap();
        assert_eq!(hardcoded_ref, from_json_file);

        // Serialize and deserialize again
        let rust_json = serde_json::to_string(&hardcoded_ref).unwrap();
        let from_serialized: ElectricHeater = serde_json::from_str(&rust_json).unwrap();
        assert_eq!(hardcoded_ref, from_serialized);
    }

    #[test]
    fn no_target_space() {
        let heater = ElectricHeater::new("Loose heater");
        assert!(heater.target_space().is_err());
        assert!(heater.wrap().target_spaces().is_empty());
    }
}
