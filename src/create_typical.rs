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

use crate::generator::{GenerationRequest, ModelGenerator};
use crate::options::{ClimateZone, HvacType, MeasureOptions};
use crate::report::RunReport;
use crate::weather::representative_weather_file;
use model::Model;
use serde_json::Value;

/// The measure that turns a model with thermal zones into a typical
/// building, by means of a [`ModelGenerator`].
#[derive(Debug, Default, Clone)]
pub struct CreateTypical {
    /// The options of the measure
    pub options: MeasureOptions,
}

impl CreateTypical {
    /// Creates the measure
    pub fn new(options: MeasureOptions) -> Self {
        Self { options }
    }

    /// Runs the measure over `model`.
    ///
    /// Returns `true` when everything went well. Otherwise, the reason
    /// is registered as an error in `report` and `false` is returned. The
    /// model may have been partially modified by then.
    pub fn run<G: ModelGenerator + ?Sized>(
        &self,
        model: &mut Model,
        generator: &G,
        report: &mut RunReport,
    ) -> bool {
        match self.try_run(model, generator, report) {
            Ok(()) => true,
            Err(e) => {
                report.error(e);
                false
            }
        }
    }

    fn try_run<G: ModelGenerator + ?Sized>(
        &self,
        model: &mut Model,
        generator: &G,
        report: &mut RunReport,
    ) -> Result<(), String> {
        let options = &self.options;

        // Geometry
        if let Some(geometry) = options.geometry.load()? {
            model.overwrite(&geometry).map_err(|e| {
                format!(
                    "Could not replace the geometry with '{}': {}",
                    options.geometry, e
                )
            })?;
            report.info(format!(
                "Replaced the geometry of the model with '{}' ({} thermal zones)",
                options.geometry,
                model.spaces.len()
            ));
        }

        // HVAC mapping
        let hvac_mapping = self.hvac_mapping(model, report)?;

        // Climate zone
        let climate_zone = options.climate_zone.resolve(model)?;
        report.info(format!("Using climate zone '{}'", climate_zone));

        let request = GenerationRequest {
            template: options.template,
            climate_zone,
            hvac_type: options.hvac_type,
            hvac_mapping: hvac_mapping.as_ref(),
        };
        generator
            .generate(model, &request)
            .map_err(|e| format!("Could not generate the typical building: {}", e))?;
        report.info(format!(
            "Created a typical '{}' building with {} HVAC systems",
            options.template,
            model.hvacs.len()
        ));

        self.assign_weather(model, climate_zone, report);
        Ok(())
    }

    /// Validates the HVAC mapping document against the thermal zones of
    /// the model, when the HVAC type asks for it
    fn hvac_mapping(
        &self,
        model: &Model,
        report: &mut RunReport,
    ) -> Result<Option<Value>, String> {
        let options = &self.options;
        if options.hvac_type != HvacType::JsonSpecified {
            if let Some(path) = &options.hvac_mapping_file {
                report.warning(format!(
                    "Ignoring HVAC mapping file '{}', as the HVAC type is '{}'",
                    path, options.hvac_type
                ));
            }
            return Ok(None);
        }

        let path = options.hvac_mapping_file.as_ref().ok_or_else(|| {
            format!(
                "HVAC type '{}' needs an HVAC mapping file",
                HvacType::JsonSpecified
            )
        })?;
        let document = mapping::validate(path, &model.space_names())?;
        report.info(format!("HVAC mapping file '{}' is valid", path));
        Ok(Some(document))
    }

    /// Sets the weather file given by the user or, if none was given and
    /// the model has none, the one that represents the climate zone
    fn assign_weather(
        &self,
        model: &mut Model,
        climate_zone: ClimateZone,
        report: &mut RunReport,
    ) {
        if let Some(file) = &self.options.weather_file {
            model.site_details_mut().set_weather_file(file);
            report.info(format!("Assigned weather file '{}'", file));
            return;
        }

        let current = model
            .site_details
            .as_ref()
            .and_then(|site| site.weather_file().ok());
        if let Some(file) = current {
            report.info(format!("Keeping weather file '{}'", file));
            return;
        }

        match representative_weather_file(climate_zone) {
            Some(file) => {
                model.site_details_mut().set_weather_file(file);
                report.info(format!(
                    "Assigned weather file '{}', representative of '{}'",
                    file, climate_zone
                ));
            }
            None => report.warning(format!(
                "There is no representative weather file for '{}'",
                climate_zone
            )),
        }
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use crate::report::MessageLevel;
    use crate::StandardsGenerator;
    use model::{Space, HVAC};
    use presets::GeometryPreset;
    use std::cell::Cell;

    /// Counts how many times it was called
    #[derive(Default)]
    struct CountingGenerator {
        calls: Cell<usize>,
    }

    impl ModelGenerator for CountingGenerator {
        fn generate(&self, _model: &mut Model, _request: &GenerationRequest) -> Result<(), String> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    /// Always fails
    struct BrokenGenerator;

    impl ModelGenerator for BrokenGenerator {
        fn generate(&self, _model: &mut Model, _request: &GenerationRequest) -> Result<(), String> {
            Err("out of coffee".to_string())
        }
    }

    fn two_zones() -> Model {
        let mut model = Model::default();
        model.add_space(Space::new("A"));
        model.add_space(Space::new("B"));
        model
    }

    #[test]
    fn default_options() {
        let mut model = two_zones();
        model.site_details_mut().set_climate_zone("ASHRAE 169-2013-4A");
        let mut report = RunReport::new();
        let measure = CreateTypical::default();
        assert!(measure.run(&mut model, &StandardsGenerator, &mut report));
        assert!(!report.has_errors());

        // One system per zone, and Baltimore weather
        assert_eq!(model.hvacs.len(), 2);
        let site = model.site_details.as_ref().unwrap();
        assert_eq!(
            site.weather_file().unwrap(),
            "USA_MD_Baltimore-Washington.Intl.AP.724060_TMY3.epw"
        );
        assert_eq!(model.standards_template.as_deref(), Some("90.1-2004"));
    }

    #[test]
    fn missing_climate_zone_stops_before_generating() {
        let mut model = two_zones();
        let mut report = RunReport::new();
        let generator = CountingGenerator::default();
        assert!(!CreateTypical::default().run(&mut model, &generator, &mut report));
        assert_eq!(generator.calls.get(), 0);
        assert!(report.has_errors());
        assert!(model.site_details.is_none());
    }

    #[test]
    fn explicit_climate_zone() {
        let mut model = two_zones();
        let mut report = RunReport::new();
        let generator = CountingGenerator::default();
        let measure = CreateTypical::new(MeasureOptions {
            climate_zone: ClimateZone::Cz7,
            ..MeasureOptions::default()
        });
        assert!(measure.run(&mut model, &generator, &mut report));
        assert_eq!(generator.calls.get(), 1);
        let site = model.site_details.as_ref().unwrap();
        assert_eq!(
            site.weather_file().unwrap(),
            "USA_MN_Duluth.Intl.AP.727450_TMY3.epw"
        );
    }

    #[test]
    fn json_specified_needs_a_file() {
        let mut model = two_zones();
        let mut report = RunReport::new();
        let generator = CountingGenerator::default();
        let measure = CreateTypical::new(MeasureOptions {
            climate_zone: ClimateZone::Cz4A,
            hvac_type: HvacType::JsonSpecified,
            ..MeasureOptions::default()
        });
        assert!(!measure.run(&mut model, &generator, &mut report));
        assert_eq!(generator.calls.get(), 0);
        let errors = report.messages_of(MessageLevel::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("JSON specified"));
    }

    #[test]
    fn ignored_mapping_file() {
        let mut model = two_zones();
        let mut report = RunReport::new();
        let measure = CreateTypical::new(MeasureOptions {
            climate_zone: ClimateZone::Cz4A,
            hvac_mapping_file: Some("./nowhere.json".to_string()),
            ..MeasureOptions::default()
        });
        assert!(measure.run(&mut model, &CountingGenerator::default(), &mut report));
        assert_eq!(report.messages_of(MessageLevel::Warning).len(), 1);
    }

    #[test]
    fn generator_errors_are_reported() {
        let mut model = two_zones();
        let mut report = RunReport::new();
        let measure = CreateTypical::new(MeasureOptions {
            climate_zone: ClimateZone::Cz4A,
            ..MeasureOptions::default()
        });
        assert!(!measure.run(&mut model, &BrokenGenerator, &mut report));
        let errors = report.messages_of(MessageLevel::Error);
        assert!(errors[0].contains("out of coffee"));

        // No weather after a failure
        assert!(model.site_details.is_none());
    }

    #[test]
    fn weather_file_option_wins() {
        let mut model = two_zones();
        model
            .site_details_mut()
            .set_climate_zone("ASHRAE 169-2013-2B")
            .set_weather_file("old.epw");
        let mut report = RunReport::new();
        let measure = CreateTypical::new(MeasureOptions {
            weather_file: Some("new.epw".to_string()),
            ..MeasureOptions::default()
        });
        assert!(measure.run(&mut model, &CountingGenerator::default(), &mut report));
        assert_eq!(
            model.site_details.as_ref().unwrap().weather_file().unwrap(),
            "new.epw"
        );
    }

    #[test]
    fn existing_weather_file_is_kept() {
        let mut model = two_zones();
        model
            .site_details_mut()
            .set_climate_zone("ASHRAE 169-2013-2B")
            .set_weather_file("old.epw");
        let mut report = RunReport::new();
        let generator = CountingGenerator::default();
        assert!(CreateTypical::default().run(&mut model, &generator, &mut report));
        assert_eq!(
            model.site_details.as_ref().unwrap().weather_file().unwrap(),
            "old.epw"
        );
    }

    #[test]
    fn preset_geometry_replaces_zones() {
        let mut model = two_zones();
        let mut report = RunReport::new();
        let measure = CreateTypical::new(MeasureOptions {
            geometry: GeometryPreset::Warehouse,
            climate_zone: ClimateZone::Cz5B,
            ..MeasureOptions::default()
        });
        assert!(measure.run(&mut model, &StandardsGenerator, &mut report));
        assert!(model.get_space("A").is_err());
        assert_eq!(model.spaces.len(), 3);
        // Storage gets heaters only
        assert!(matches!(
            model.get_hvac("Zone3 Bulk Storage Unit Heater"),
            Ok(HVAC::ElectricHeater(_))
        ));
    }
}
