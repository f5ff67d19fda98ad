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

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One of the systems of an [`HvacMapping`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemEntry {
    /// An optional name for the system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// An optional kind of system (e.g., `"Electric Baseboard"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_type: Option<String>,

    /// The thermal zones served by this system
    pub thermal_zones: Vec<String>,
}

/// A typed view over a document that went through [`crate::validate`].
///
/// Fields other than `name`, `system_type` and `thermal_zones` are
/// ignored.
///
/// ```
/// use mapping::HvacMapping;
///
/// let doc = serde_json::json!({
///     "systems": [
///         { "name": "Offices", "thermal_zones": ["Zone1", "Zone2"] },
///         { "system_type": "Electric Baseboard", "thermal_zones": ["Zone3"] }
///     ]
/// });
/// let mapping = HvacMapping::from_validated(&doc).unwrap();
/// assert_eq!(mapping.systems.len(), 2);
/// assert_eq!(mapping.systems[0].name.as_deref(), Some("Offices"));
/// assert_eq!(mapping.zones().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HvacMapping {
    /// The systems, in the order of the document
    pub systems: Vec<SystemEntry>,
}

impl HvacMapping {
    /// Reads the mapping out of a validated document
    pub fn from_validated(document: &Value) -> Result<Self, String> {
        serde_json::from_value(document.clone())
            .map_err(|e| format!("Could not read HVAC mapping: {}", e))
    }

    /// All the zones in the mapping, system after system
    pub fn zones(&self) -> impl Iterator<Item = &String> {
        self.systems.iter().flat_map(|s| s.thermal_zones.iter())
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn optional_fields() -> Result<(), String> {
        let doc: Value = json5::from_str(
            "{
            systems: [
                { thermal_zones: ['Zone1'] },
                { name: 'Warehouse', system_type: 'Electric Baseboard', thermal_zones: ['Zone3'], notes: 'ignored' },
            ],
            comment: 'also ignored',
        }",
        )
        .map_err(|e| e.to_string())?;

        let mapping = HvacMapping::from_validated(&doc)?;
        assert_eq!(
            mapping.systems[0],
            SystemEntry {
                name: None,
                system_type: None,
                thermal_zones: vec!["Zone1".to_string()]
            }
        );
        assert_eq!(mapping.systems[1].name.as_deref(), Some("Warehouse"));
        assert_eq!(
            mapping.systems[1].system_type.as_deref(),
            Some("Electric Baseboard")
        );
        let zones: Vec<&String> = mapping.zones().collect();
        assert_eq!(zones, vec!["Zone1", "Zone3"]);
        Ok(())
    }

    #[test]
    fn wrong_name_type() {
        let doc = serde_json::json!({
            "systems": [ { "name": 1, "thermal_zones": ["Zone1"] } ]
        });
        assert!(HvacMapping::from_validated(&doc).is_err());
    }
}
