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
use crate::error_msgs::print_warning_no_module;
use crate::hvac::HVAC;
use crate::{SiteDetails, Space};
use serde::{self, de::Visitor};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A structure describing a set of built-environment objects.
///
/// It can be a bunch of zones all in the same building (e.g., an office, a
/// warehouse) or it can be a bunch of zones in different buildings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Model {
    /// The name of the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Some information about the site in which the building(s) are located
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_details: Option<SiteDetails>,

    /// The building-code template (e.g., `"90.1-2004"`) the model
    /// was configured with, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standards_template: Option<String>,

    /// The [`Space`]s (i.e., thermal zones) in the model
    pub spaces: Vec<Arc<Space>>,

    /// The Heating/Cooling devices serving the spaces
    pub hvacs: Vec<HVAC>,
}

struct ModelVisitor {}

impl<'de> Visitor<'de> for ModelVisitor {
    type Value = Model;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("Could not parse Model from JSON")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut model = Model::default();

        // HVACs point to spaces, so they go in after every space is there
        let mut hvacs: Vec<HVAC> = Vec::new();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "name" => {
                    model.name = map.next_value()?;
                }
                "site_details" => {
                    model.site_details = map.next_value()?;
                }
                "standards_template" => {
                    model.standards_template = map.next_value()?;
                }
                "spaces" => {
                    let objs: Vec<Space> = map.next_value()?;
                    for o in objs.into_iter() {
                        model.add_space(o);
                    }
                }
                "hvacs" => {
                    let objs: Vec<HVAC> = map.next_value()?;
                    hvacs.extend(objs);
                }
                _ => {
                    return Err(serde::de::Error::custom(format!(
                        "Field '{}' in model is not serialized",
                        key
                    )));
                }
            }
        }

        for o in hvacs.into_iter() {
            model.add_hvac(o).map_err(serde::de::Error::custom)?;
        }

        Ok(model)
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(ModelVisitor {})
    }
}

impl Model {
    /// Parses a model from JSON
    ///
    /// ```rust
    /// use model::Model;
    ///
    /// let json_str = r#"{
    ///     "spaces": [{ "name": "Core_ZN" }],
    ///     "hvacs": [{
    ///         "type": "IdealHeaterCooler",
    ///         "name": "Core HVAC",
    ///         "target_spaces": ["Core_ZN"]
    ///     }]
    /// }"#;
    ///
    /// let model = Model::from_json(&json_str).unwrap();
    /// assert_eq!(model.spaces.len(), 1);
    /// assert_eq!(model.hvacs.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Parses a `Model` from a text file containing a JSON
    pub fn from_json_file<P: AsRef<Path> + Display>(filename: P) -> Result<Self, String> {
        let jsonstring = match fs::read_to_string(&filename) {
            Ok(v) => v,
            Err(_) => return Err(format!("Could not read JSON file '{}'", filename)),
        };
        Self::from_json(&jsonstring)
    }

    /// Writes the `Model` as a (pretty) JSON string
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }

    /// Writes the `Model` into a JSON file
    pub fn save_json<P: AsRef<Path> + Display>(&self, filename: P) -> Result<(), String> {
        let json = self.to_json()?;
        fs::write(&filename, json)
            .map_err(|e| format!("Could not write JSON file '{}': {}", filename, e))
    }

    /// Adds a [`Space`] to the [`Model`]
    ///
    /// ```rust
    /// use model::{Space, Model};
    ///
    /// let space = Space::new("Bedroom");
    /// let mut model = Model::default();
    /// assert!(model.spaces.is_empty());
    /// model.add_space(space);
    /// assert_eq!(model.spaces.len(), 1);
    ///
    /// // Adding a new space with the same name prints a warning, but still works
    /// let space = Space::new("Bedroom");
    /// model.add_space(space);
    /// assert_eq!(model.spaces.len(), 2);
    /// ```
    pub fn add_space(&mut self, add: Space) -> Arc<Space> {
        if self.get_space(add.name()).is_ok() {
            print_warning_no_module(format!("There is already a Space called '{}'", add.name()))
        }
        let add = Arc::new(add);
        self.spaces.push(Arc::clone(&add));
        add
    }

    /// Retrieves a reference (`Arc`) to a [`Space`] based on its name, from the `spaces`
    /// field
    ///
    /// ```rust
    /// use model::{Space, Model};
    ///
    /// let space = Space::new("Bedroom");
    /// let mut model = Model::default();
    /// model.add_space(space);
    /// assert!(model.get_space("Bedroom").is_ok());
    /// assert!(model.get_space("Walrus Enclosure").is_err());
    /// ```
    pub fn get_space<S: Into<String>>(&self, name: S) -> Result<Arc<Space>, String> {
        let name: String = name.into();
        for i in self.spaces.iter() {
            if i.name() == &name {
                return Ok(i.clone());
            }
        }
        Err(format!("Could not find Space '{}' in model", name))
    }

    /// The names of all the [`Space`]s (i.e., thermal zones) in the model.
    pub fn space_names(&self) -> HashSet<String> {
        self.spaces.iter().map(|s| s.name().clone()).collect()
    }

    /// Adds an [`HVAC`] to the model.
    ///
    /// > Note: It returns a `Result` because  this method can fail.
    /// > Specifically, when the [`HVAC`] serves a `Space` that is not
    /// > in the model.
    ///
    /// ```rust
    /// use model::{Model, Space, hvac::ElectricHeater};
    ///
    /// let mut model = Model::default();
    /// model.add_space(Space::new("Bedroom"));
    ///
    /// let mut heater = ElectricHeater::new("Bedroom heater");
    /// heater.set_target_space("Bedroom");
    /// assert!(model.add_hvac(heater.wrap()).is_ok());
    ///
    /// let mut heater = ElectricHeater::new("Kitchen heater");
    /// heater.set_target_space("Kitchen");
    /// assert!(model.add_hvac(heater.wrap()).is_err());
    /// ```
    pub fn add_hvac(&mut self, add: HVAC) -> Result<HVAC, String> {
        if self.get_hvac(add.name()).is_ok() {
            print_warning_no_module(format!("There is already an HVAC called '{}'", add.name()))
        }

        for space in add.target_spaces() {
            if self.get_space(space).is_err() {
                return Err(format!(
                    "HVAC '{}' serves Space '{}', which is not in the model",
                    add.name(),
                    space
                ));
            }
            if let Some(other) = self
                .hvacs
                .iter()
                .find(|h| h.target_spaces().contains(&space))
            {
                print_warning_no_module(format!(
                    "Space '{}' is served by both HVAC '{}' and HVAC '{}'",
                    space,
                    other.name(),
                    add.name()
                ))
            }
        }

        self.hvacs.push(add.clone());
        Ok(add)
    }

    /// Retrieves a reference (`Arc`) to a [`HVAC`] based on its name, from the `hvacs`
    /// field
    pub fn get_hvac<S: Into<String>>(&self, name: S) -> Result<HVAC, String> {
        let name: String = name.into();
        for i in self.hvacs.iter() {
            if i.name() == &name {
                return Ok(i.clone());
            }
        }
        Err(format!("Could not find HVAC '{}' in model", name))
    }

    /// Removes every [`HVAC`] from the model, returning them
    pub fn take_hvacs(&mut self) -> Vec<HVAC> {
        std::mem::take(&mut self.hvacs)
    }

    /// Borrows the [`SiteDetails`] mutably, creating empty ones if
    /// the model had none
    pub fn site_details_mut(&mut self) -> &mut SiteDetails {
        self.site_details.get_or_insert_with(SiteDetails::default)
    }

    /// Replaces the content of this model with a copy of the content of
    /// `new_model`, keeping the identity of `self`.
    ///
    /// Every object in `self` is removed first. Then, every object obtained
    /// by serializing `new_model` is added through the regular `add_*` methods,
    /// so the two models do not share any object afterwards.
    ///
    /// There is no rollback: if adding fails, `self` is left with only
    /// some of the objects. Errors here should stop whatever is being done
    /// with the model.
    ///
    /// ```rust
    /// use model::{Model, Space};
    ///
    /// let mut existing = Model::default();
    /// existing.add_space(Space::new("Old zone"));
    ///
    /// let mut replacement = Model::default();
    /// replacement.add_space(Space::new("Core_ZN"));
    /// replacement.add_space(Space::new("Perimeter_ZN_1"));
    ///
    /// existing.overwrite(&replacement).unwrap();
    /// assert_eq!(existing.spaces.len(), 2);
    /// assert!(existing.get_space("Old zone").is_err());
    /// ```
    pub fn overwrite(&mut self, new_model: &Model) -> Result<&mut Self, String> {
        // Remove everything
        let removed_spaces = std::mem::take(&mut self.spaces);
        let removed_hvacs = self.take_hvacs();
        self.name = None;
        self.site_details = None;
        self.standards_template = None;
        tracing::debug!(
            "removed {} spaces and {} HVACs from the model",
            removed_spaces.len(),
            removed_hvacs.len()
        );

        // Add a copy of everything
        let json = new_model.to_json()?;
        let copy = Model::from_json(&json)?;
        self.name = copy.name;
        self.site_details = copy.site_details;
        self.standards_template = copy.standards_template;
        for space in copy.spaces.into_iter() {
            self.add_space(Arc::unwrap_or_clone(space));
        }
        for hvac in copy.hvacs.into_iter() {
            self.add_hvac(hvac)?;
        }

        Ok(self)
    }
}

/***********/
/* TESTING */
/***********/
