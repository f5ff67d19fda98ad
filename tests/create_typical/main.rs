use std::cell::RefCell;
use typical::model::{Model, HVAC};
use typical::{
    ClimateZone, CreateTypical, GenerationRequest, GeometryPreset, HvacType, MeasureOptions,
    MessageLevel, ModelGenerator, RunReport, StandardsGenerator, Template,
};

const SMALL_OFFICE: &str = "./tests/create_typical/small_office.json";

/// Keeps the requests it receives and does nothing else
#[derive(Default)]
struct RecordingGenerator {
    requests: RefCell<Vec<(Template, ClimateZone, HvacType, bool)>>,
}

impl ModelGenerator for RecordingGenerator {
    fn generate(&self, _model: &mut Model, request: &GenerationRequest) -> Result<(), String> {
        self.requests.borrow_mut().push((
            request.template,
            request.climate_zone,
            request.hvac_type,
            request.hvac_mapping.is_some(),
        ));
        Ok(())
    }
}

fn json_specified(mapping: &str) -> MeasureOptions {
    MeasureOptions {
        input_file: SMALL_OFFICE.to_string(),
        hvac_type: HvacType::JsonSpecified,
        hvac_mapping_file: Some(mapping.to_string()),
        ..MeasureOptions::default()
    }
}

#[test]
fn json_specified_small_office() {
    let options = json_specified("./tests/create_typical/office_mapping.json");
    let mut model = Model::from_json_file(options.input_file.to_string()).unwrap();
    let mut report = RunReport::new();
    assert!(CreateTypical::new(options).run(&mut model, &StandardsGenerator, &mut report));

    // The systems in the mapping replace the one in the file
    assert_eq!(model.hvacs.len(), 2);
    assert!(model.get_hvac("Core system").is_err());
    match model.get_hvac("Perimeter VAV").unwrap() {
        HVAC::IdealHeaterCooler(h) => assert_eq!(h.target_spaces.len(), 4),
        other => panic!("Expecting IdealHeaterCooler, found {:?}", other),
    }
    assert!(model.get_hvac("Core PSZ").is_ok());

    // Climate zone comes from the file. So does the weather
    let site = model.site_details.as_ref().unwrap();
    assert_eq!(site.climate_zone().unwrap(), "ASHRAE 169-2013-5A");
    assert_eq!(
        site.weather_file().unwrap(),
        "USA_IL_Chicago-OHare.Intl.AP.725300_TMY3.epw"
    );
    assert_eq!(model.standards_template.as_deref(), Some("90.1-2004"));
    assert!(!report.has_errors());
}

#[test]
fn invalid_mapping_stops_the_run() {
    let options = json_specified("./tests/create_typical/repeated_core.json");
    let mut model = Model::from_json_file(options.input_file.to_string()).unwrap();
    let mut report = RunReport::new();
    let generator = RecordingGenerator::default();
    assert!(!CreateTypical::new(options).run(&mut model, &generator, &mut report));

    assert!(generator.requests.borrow().is_empty());
    let errors = report.messages_of(MessageLevel::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Core_ZN"), "{}", errors[0]);

    // Untouched
    assert!(model.get_hvac("Core system").is_ok());
}

#[test]
fn missing_mapping_file() {
    let options = json_specified("./tests/create_typical/not_here.json");
    let mut model = Model::from_json_file(options.input_file.to_string()).unwrap();
    let mut report = RunReport::new();
    let generator = RecordingGenerator::default();
    assert!(!CreateTypical::new(options).run(&mut model, &generator, &mut report));
    assert!(generator.requests.borrow().is_empty());
    assert!(report.messages_of(MessageLevel::Error)[0].contains("not_here.json"));
}

#[test]
fn unknown_climate_zone_stops_before_generating() {
    let mut model = Model::from_json_file(SMALL_OFFICE).unwrap();
    model
        .site_details_mut()
        .set_climate_zone("Somewhere nice");
    let mut report = RunReport::new();
    let generator = RecordingGenerator::default();
    let options = json_specified("./tests/create_typical/office_mapping.json");
    assert!(!CreateTypical::new(options).run(&mut model, &generator, &mut report));
    assert!(generator.requests.borrow().is_empty());

    // The mapping was validated before looking for the climate zone
    assert!(report
        .messages_of(MessageLevel::Info)
        .iter()
        .any(|m| m.contains("office_mapping.json")));
}

#[test]
fn generator_receives_the_options() {
    let mut model = Model::from_json_file(SMALL_OFFICE).unwrap();
    let mut report = RunReport::new();
    let generator = RecordingGenerator::default();
    let options = MeasureOptions {
        climate_zone: ClimateZone::Cz2A,
        template: Template::Ashrae2016,
        hvac_type: HvacType::ElectricBaseboard,
        ..MeasureOptions::default()
    };
    assert!(CreateTypical::new(options).run(&mut model, &generator, &mut report));
    assert_eq!(
        *generator.requests.borrow(),
        vec![(
            Template::Ashrae2016,
            ClimateZone::Cz2A,
            HvacType::ElectricBaseboard,
            false
        )]
    );
}

#[test]
fn preset_geometry_with_mapping() {
    // The mapping is checked against the zones of the preset, not those in
    // the file
    let mut model = Model::from_json_file(SMALL_OFFICE).unwrap();
    let mut report = RunReport::new();
    let options = MeasureOptions {
        geometry: GeometryPreset::Warehouse,
        climate_zone: ClimateZone::Cz6A,
        template: Template::DoeRef1980To2004,
        ..json_specified("./tests/create_typical/warehouse_mapping.json")
    };
    assert!(CreateTypical::new(options).run(&mut model, &StandardsGenerator, &mut report));

    assert_eq!(model.name.as_deref(), Some("Warehouse"));
    assert!(model.get_space("Core_ZN").is_err());
    assert_eq!(model.hvacs.len(), 3);
    assert!(matches!(
        model.get_hvac("HVAC System 3").unwrap(),
        HVAC::ElectricHeater(_)
    ));
    match model.get_hvac("Fine storage heater").unwrap() {
        HVAC::ElectricHeater(h) => {
            assert_eq!(h.target_space().unwrap(), "Zone2 Fine Storage");
            assert!((h.heating_setpoint().unwrap() - 21.0).abs() < 1e-5);
        }
        other => panic!("Expecting ElectricHeater, found {:?}", other),
    }

    // The preset has no site details, so the climate zone option is used
    let site = model.site_details.as_ref().unwrap();
    assert_eq!(
        site.weather_file().unwrap(),
        "USA_MN_Minneapolis-St.Paul.Intl.AP.726580_TMY3.epw"
    );
}

#[test]
fn mapping_for_the_old_geometry_fails_after_preset() {
    let mut model = Model::from_json_file(SMALL_OFFICE).unwrap();
    let mut report = RunReport::new();
    let options = MeasureOptions {
        geometry: GeometryPreset::MidriseApartment,
        climate_zone: ClimateZone::Cz4C,
        ..json_specified("./tests/create_typical/office_mapping.json")
    };
    assert!(!CreateTypical::new(options).run(&mut model, &StandardsGenerator, &mut report));
    let errors = report.messages_of(MessageLevel::Error);
    for zone in ["Core_ZN", "Perimeter_ZN_1", "Perimeter_ZN_4"] {
        assert!(errors[0].contains(zone));
    }
}

#[test]
fn output_round_trip() {
    let mut model = Model::from_json_file(SMALL_OFFICE).unwrap();
    let mut report = RunReport::new();
    assert!(CreateTypical::default().run(&mut model, &StandardsGenerator, &mut report));

    let path = std::env::temp_dir().join("typical_output_round_trip.json");
    let path = path.to_string_lossy().to_string();
    model.save_json(&path).unwrap();
    let again = Model::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(again.spaces.len(), model.spaces.len());
    assert_eq!(again.hvacs.len(), 5);
    assert_eq!(again.standards_template, model.standards_template);
    assert_eq!(again.site_details, model.site_details);
}
