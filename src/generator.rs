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

use crate::options::{ClimateZone, HvacType, Template};
use crate::Float;
use mapping::HvacMapping;
use model::hvac::{ElectricHeater, IdealHeaterCooler};
use model::{Model, Space, SpacePurpose, HVAC};
use serde_json::Value;

/// Everything a [`ModelGenerator`] is asked to do
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    /// The building-code template
    pub template: Template,

    /// The climate zone. It is never [`ClimateZone::LookupFromModel`]
    /// when coming from a run of the measure.
    pub climate_zone: ClimateZone,

    /// The kind of HVAC systems to add
    pub hvac_type: HvacType,

    /// The validated HVAC mapping document, when `hvac_type` is
    /// [`HvacType::JsonSpecified`]
    pub hvac_mapping: Option<&'a Value>,
}

/// Something that turns a model with thermal zones into a typical
/// building: constructions, loads, HVAC systems and so on.
pub trait ModelGenerator {
    /// Modifies `model` in place, following `request`
    fn generate(&self, model: &mut Model, request: &GenerationRequest) -> Result<(), String>;
}

/// The built-in [`ModelGenerator`]. It records the template and the climate
/// zone in the model and replaces its HVAC systems.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardsGenerator;

impl ModelGenerator for StandardsGenerator {
    fn generate(&self, model: &mut Model, request: &GenerationRequest) -> Result<(), String> {
        if request.climate_zone == ClimateZone::LookupFromModel {
            return Err(
                "The climate zone has to be resolved before generating the model".to_string(),
            );
        }

        model.standards_template = Some(request.template.to_string());
        model
            .site_details_mut()
            .set_climate_zone(request.climate_zone.to_string());

        let removed = model.take_hvacs();
        if !removed.is_empty() {
            tracing::debug!("Removed {} existing HVAC systems", removed.len());
        }

        let setpoints = request.template.setpoints();
        let spaces = model.spaces.clone();
        match request.hvac_type {
            HvacType::Inferred => {
                for space in spaces.iter() {
                    let name = space.name();
                    let hvac = if is_storage_only(space) {
                        electric_heater(format!("{} Unit Heater", name), name, setpoints)
                    } else {
                        ideal_loads(format!("{} Ideal Loads", name), &[name], setpoints)
                    };
                    model.add_hvac(hvac)?;
                }
            }
            HvacType::IdealAirLoads => {
                for space in spaces.iter() {
                    let name = space.name();
                    let hvac = ideal_loads(format!("{} Ideal Loads", name), &[name], setpoints);
                    model.add_hvac(hvac)?;
                }
            }
            HvacType::ElectricBaseboard => {
                for space in spaces.iter() {
                    let name = space.name();
                    let hvac = electric_heater(format!("{} Baseboard", name), name, setpoints);
                    model.add_hvac(hvac)?;
                }
            }
            HvacType::JsonSpecified => {
                let document = request.hvac_mapping.ok_or_else(|| {
                    format!("HVAC type '{}' needs an HVAC mapping", HvacType::JsonSpecified)
                })?;
                let mapping = HvacMapping::from_validated(document)?;
                for (i, system) in mapping.systems.iter().enumerate() {
                    let name = system
                        .name
                        .clone()
                        .unwrap_or_else(|| format!("HVAC System {}", i + 1));
                    if system.thermal_zones.is_empty() {
                        tracing::warn!(
                            "HVAC system '{}' serves no thermal zone... ignoring it",
                            name
                        );
                        continue;
                    }
                    let hvac = match system.system_type.as_deref() {
                        Some("Electric Baseboard") => {
                            if system.thermal_zones.len() != 1 {
                                return Err(format!(
                                    "Electric Baseboard '{}' must serve exactly one thermal zone, found {}",
                                    name,
                                    system.thermal_zones.len()
                                ));
                            }
                            electric_heater(name, &system.thermal_zones[0], setpoints)
                        }
                        _ => ideal_loads(name, system.thermal_zones.as_slice(), setpoints),
                    };
                    model.add_hvac(hvac)?;
                }
            }
        }

        tracing::debug!(
            "Model configured with template '{}' for '{}': {} HVAC systems",
            request.template,
            request.climate_zone,
            model.hvacs.len()
        );
        Ok(())
    }
}

/// Spaces that have purposes, all of them being storage
fn is_storage_only(space: &Space) -> bool {
    !space.purposes.is_empty() && space.purposes.iter().all(|p| *p == SpacePurpose::Storage)
}

fn ideal_loads<S: AsRef<str>>(name: String, spaces: &[S], setpoints: (Float, Float)) -> HVAC {
    let (heating, cooling) = setpoints;
    let mut hvac = IdealHeaterCooler::new(name);
    for space in spaces {
        hvac.push_target_space(space.as_ref());
    }
    hvac.set_heating_setpoint(heating).set_cooling_setpoint(cooling);
    hvac.wrap()
}

fn electric_heater(name: String, space: &str, setpoints: (Float, Float)) -> HVAC {
    let (heating, _) = setpoints;
    let mut hvac = ElectricHeater::new(name);
    hvac.set_target_space(space).set_heating_setpoint(heating);
    hvac.wrap()
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    fn office() -> Model {
        let mut model = Model::default();
        for name in ["Office", "Storage room"] {
            let mut space = Space::new(name);
            if name == "Storage room" {
                space.push_purpose(SpacePurpose::Storage);
            } else {
                space.push_purpose(SpacePurpose::Office);
            }
            model.add_space(space);
        }
        model
    }

    fn request<'a>(hvac_type: HvacType) -> GenerationRequest<'a> {
        GenerationRequest {
            template: Template::Ashrae2010,
            climate_zone: ClimateZone::Cz4A,
            hvac_type,
            hvac_mapping: None,
        }
    }

    #[test]
    fn records_template_and_climate_zone() -> Result<(), String> {
        let mut model = office();
        StandardsGenerator.generate(&mut model, &request(HvacType::IdealAirLoads))?;
        assert_eq!(model.standards_template.as_deref(), Some("90.1-2010"));
        let site = model.site_details.as_ref().ok_or("no site details")?;
        assert_eq!(site.climate_zone()?, "ASHRAE 169-2013-4A");
        Ok(())
    }

    #[test]
    fn unresolved_climate_zone() {
        let mut model = office();
        let mut r = request(HvacType::Inferred);
        r.climate_zone = ClimateZone::LookupFromModel;
        assert!(StandardsGenerator.generate(&mut model, &r).is_err());
        assert!(model.standards_template.is_none());
    }

    #[test]
    fn inferred_systems() -> Result<(), String> {
        let mut model = office();
        StandardsGenerator.generate(&mut model, &request(HvacType::Inferred))?;
        assert_eq!(model.hvacs.len(), 2);
        match model.get_hvac("Office Ideal Loads")? {
            HVAC::IdealHeaterCooler(h) => {
                assert_eq!(h.target_spaces, vec!["Office".to_string()]);
                assert!((h.heating_setpoint()? - 21.1).abs() < 1e-5);
                assert!((h.cooling_setpoint()? - 23.9).abs() < 1e-5);
            }
            other => panic!("Expecting IdealHeaterCooler, found {:?}", other),
        }
        assert!(matches!(
            model.get_hvac("Storage room Unit Heater")?,
            HVAC::ElectricHeater(_)
        ));
        Ok(())
    }

    #[test]
    fn electric_baseboards() -> Result<(), String> {
        let mut model = office();
        let mut r = request(HvacType::ElectricBaseboard);
        r.template = Template::DoeRefPre1980;
        StandardsGenerator.generate(&mut model, &r)?;
        for hvac in model.hvacs.iter() {
            match hvac {
                HVAC::ElectricHeater(h) => assert!((h.heating_setpoint()? - 21.0).abs() < 1e-5),
                other => panic!("Expecting ElectricHeater, found {:?}", other),
            }
        }
        Ok(())
    }

    #[test]
    fn existing_hvacs_are_replaced() -> Result<(), String> {
        let mut model = office();
        let mut old = IdealHeaterCooler::new("Old system");
        old.push_target_space("Office");
        model.add_hvac(old.wrap())?;

        StandardsGenerator.generate(&mut model, &request(HvacType::IdealAirLoads))?;
        assert!(model.get_hvac("Old system").is_err());
        assert_eq!(model.hvacs.len(), 2);
        Ok(())
    }

    #[test]
    fn json_specified_systems() -> Result<(), String> {
        let mut model = office();
        let mapping = serde_json::json!({
            "systems": [
                { "thermal_zones": ["Office"] },
                { "name": "Store heater", "system_type": "Electric Baseboard", "thermal_zones": ["Storage room"] },
                { "name": "Spare", "thermal_zones": [] }
            ]
        });
        let mut r = request(HvacType::JsonSpecified);
        r.hvac_mapping = Some(&mapping);
        StandardsGenerator.generate(&mut model, &r)?;

        assert_eq!(model.hvacs.len(), 2);
        assert!(matches!(
            model.get_hvac("HVAC System 1")?,
            HVAC::IdealHeaterCooler(_)
        ));
        assert!(matches!(
            model.get_hvac("Store heater")?,
            HVAC::ElectricHeater(_)
        ));
        assert!(model.get_hvac("Spare").is_err());
        Ok(())
    }

    #[test]
    fn json_specified_without_mapping() {
        let mut model = office();
        assert!(StandardsGenerator
            .generate(&mut model, &request(HvacType::JsonSpecified))
            .is_err());
    }

    #[test]
    fn baseboard_serving_two_zones() {
        let mut model = office();
        let mapping = serde_json::json!({
            "systems": [
                { "system_type": "Electric Baseboard", "thermal_zones": ["Office", "Storage room"] }
            ]
        });
        let mut r = request(HvacType::JsonSpecified);
        r.hvac_mapping = Some(&mapping);
        let e = StandardsGenerator.generate(&mut model, &r).unwrap_err();
        assert!(e.contains("exactly one"));
    }
}
