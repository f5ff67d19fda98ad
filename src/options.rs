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

use crate::Float;
use clap::Parser;
use model::Model;
use presets::GeometryPreset;
use std::fmt;
use std::str::FromStr;

/// The options we can pass to the measure
#[derive(Parser, Debug, Default, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct MeasureOptions {
    /// The input model, in JSON format
    #[clap(short = 'i')]
    pub input_file: String,

    /// Specifies the path to which to write the configured model.
    /// If none is given, STDOUT is used
    #[clap(short = 'o')]
    pub output: Option<String>,

    /// The geometry that replaces the one in the model
    #[clap(short = 'g', long = "geometry", default_value_t = GeometryPreset::ExistingGeometry)]
    pub geometry: GeometryPreset,

    /// The climate zone (e.g., "ASHRAE 169-2013-4A")
    #[clap(short = 'z', long = "climate-zone", default_value_t = ClimateZone::LookupFromModel)]
    pub climate_zone: ClimateZone,

    /// The building-code template
    #[clap(short = 't', long = "template", default_value_t = Template::Ashrae2004)]
    pub template: Template,

    /// The kind of HVAC systems to add
    #[clap(short = 's', long = "hvac-type", default_value_t = HvacType::Inferred)]
    pub hvac_type: HvacType,

    /// The JSON file assigning thermal zones to HVAC systems. Only
    /// used when the HVAC type is "JSON specified"
    #[clap(short = 'm', long = "hvac-mapping")]
    pub hvac_mapping_file: Option<String>,

    /// The weather file to assign to the model. If none is given,
    /// a representative one is chosen based on the climate zone
    #[clap(short = 'w', long = "weather-file")]
    pub weather_file: Option<String>,
}

/// The climate zones. The default value means that the climate
/// zone is to be read from the model.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClimateZone {
    /// Use the climate zone written in the model
    #[default]
    LookupFromModel,
    /// Very Hot, Humid
    Cz1A,
    /// Very Hot, Dry
    Cz1B,
    /// Hot, Humid
    Cz2A,
    /// Hot, Dry
    Cz2B,
    /// Warm, Humid
    Cz3A,
    /// Warm, Dry
    Cz3B,
    /// Warm, Marine
    Cz3C,
    /// Mixed, Humid
    Cz4A,
    /// Mixed, Dry
    Cz4B,
    /// Mixed, Marine
    Cz4C,
    /// Cool, Humid
    Cz5A,
    /// Cool, Dry
    Cz5B,
    /// Cool, Marine
    Cz5C,
    /// Cold, Humid
    Cz6A,
    /// Cold, Dry
    Cz6B,
    /// Very Cold
    Cz7,
    /// Subarctic
    Cz8,
}

/// The prefix of the ASHRAE 169-2013 climate zones
const ASHRAE_169_2013: &str = "ASHRAE 169-2013-";

impl ClimateZone {
    /// Every option, in the order shown to the user
    pub const ALL: [ClimateZone; 18] = [
        ClimateZone::LookupFromModel,
        ClimateZone::Cz1A,
        ClimateZone::Cz1B,
        ClimateZone::Cz2A,
        ClimateZone::Cz2B,
        ClimateZone::Cz3A,
        ClimateZone::Cz3B,
        ClimateZone::Cz3C,
        ClimateZone::Cz4A,
        ClimateZone::Cz4B,
        ClimateZone::Cz4C,
        ClimateZone::Cz5A,
        ClimateZone::Cz5B,
        ClimateZone::Cz5C,
        ClimateZone::Cz6A,
        ClimateZone::Cz6B,
        ClimateZone::Cz7,
        ClimateZone::Cz8,
    ];

    /// The short code of the zone (e.g., `"4A"`), or `None` for
    /// [`ClimateZone::LookupFromModel`]
    pub fn code(&self) -> Option<&'static str> {
        let code = match self {
            ClimateZone::LookupFromModel => return None,
            ClimateZone::Cz1A => "1A",
            ClimateZone::Cz1B => "1B",
            ClimateZone::Cz2A => "2A",
            ClimateZone::Cz2B => "2B",
            ClimateZone::Cz3A => "3A",
            ClimateZone::Cz3B => "3B",
            ClimateZone::Cz3C => "3C",
            ClimateZone::Cz4A => "4A",
            ClimateZone::Cz4B => "4B",
            ClimateZone::Cz4C => "4C",
            ClimateZone::Cz5A => "5A",
            ClimateZone::Cz5B => "5B",
            ClimateZone::Cz5C => "5C",
            ClimateZone::Cz6A => "6A",
            ClimateZone::Cz6B => "6B",
            ClimateZone::Cz7 => "7",
            ClimateZone::Cz8 => "8",
        };
        Some(code)
    }

    /// Returns the climate zone itself or, if this is
    /// [`ClimateZone::LookupFromModel`], the one written in the
    /// site details of the model.
    ///
    /// Fails when the model has no climate zone or when it cannot
    /// be understood.
    pub fn resolve(&self, model: &Model) -> Result<ClimateZone, String> {
        if *self != ClimateZone::LookupFromModel {
            return Ok(*self);
        }
        let written = model
            .site_details
            .as_ref()
            .and_then(|site| site.climate_zone().ok())
            .ok_or_else(|| "Could not find a climate zone in the model".to_string())?;
        match written.parse::<ClimateZone>() {
            Ok(ClimateZone::LookupFromModel) | Err(_) => Err(format!(
                "The climate zone in the model ('{}') is not supported",
                written
            )),
            Ok(zone) => Ok(zone),
        }
    }
}

impl fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{}{}", ASHRAE_169_2013, code),
            None => write!(f, "Lookup From Model"),
        }
    }
}

impl FromStr for ClimateZone {
    type Err = String;

    /// Parses either the full name (e.g., `"ASHRAE 169-2013-4A"`) or just
    /// the code (e.g., `"4A"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "Lookup From Model" {
            return Ok(ClimateZone::LookupFromModel);
        }
        let code = s.strip_prefix(ASHRAE_169_2013).unwrap_or(s);
        ClimateZone::ALL
            .iter()
            .find(|z| matches!(z.code(), Some(c) if c.eq_ignore_ascii_case(code)))
            .copied()
            .ok_or_else(|| format!("Unknown climate zone '{}'", s))
    }
}

/// The building-code templates
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// DOE reference buildings, built before 1980
    DoeRefPre1980,
    /// DOE reference buildings, built between 1980 and 2004
    DoeRef1980To2004,
    /// ASHRAE 90.1-2004
    #[default]
    Ashrae2004,
    /// ASHRAE 90.1-2007
    Ashrae2007,
    /// ASHRAE 90.1-2010
    Ashrae2010,
    /// ASHRAE 90.1-2013
    Ashrae2013,
    /// ASHRAE 90.1-2016
    Ashrae2016,
    /// ASHRAE 90.1-2019
    Ashrae2019,
}

impl Template {
    /// Every option, in the order shown to the user
    pub const ALL: [Template; 8] = [
        Template::DoeRefPre1980,
        Template::DoeRef1980To2004,
        Template::Ashrae2004,
        Template::Ashrae2007,
        Template::Ashrae2010,
        Template::Ashrae2013,
        Template::Ashrae2016,
        Template::Ashrae2019,
    ];

    /// The heating and cooling setpoints (in C) of the thermostats
    /// of the HVAC systems
    pub fn setpoints(&self) -> (Float, Float) {
        match self {
            Template::DoeRefPre1980 | Template::DoeRef1980To2004 => (21.0, 24.0),
            _ => (21.1, 23.9),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Template::DoeRefPre1980 => "DOE Ref Pre-1980",
            Template::DoeRef1980To2004 => "DOE Ref 1980-2004",
            Template::Ashrae2004 => "90.1-2004",
            Template::Ashrae2007 => "90.1-2007",
            Template::Ashrae2010 => "90.1-2010",
            Template::Ashrae2013 => "90.1-2013",
            Template::Ashrae2016 => "90.1-2016",
            Template::Ashrae2019 => "90.1-2019",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .iter()
            .find(|t| t.to_string() == s.trim())
            .copied()
            .ok_or_else(|| format!("Unknown template '{}'", s))
    }
}

/// The kinds of HVAC systems that can be added
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HvacType {
    /// Chosen based on the purpose of each zone
    #[default]
    Inferred,
    /// Read from an HVAC mapping document
    JsonSpecified,
    /// An ideal heater and cooler per zone
    IdealAirLoads,
    /// An electric baseboard per zone
    ElectricBaseboard,
}

impl HvacType {
    /// Every option, in the order shown to the user
    pub const ALL: [HvacType; 4] = [
        HvacType::Inferred,
        HvacType::JsonSpecified,
        HvacType::IdealAirLoads,
        HvacType::ElectricBaseboard,
    ];
}

impl fmt::Display for HvacType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HvacType::Inferred => "Inferred",
            HvacType::JsonSpecified => "JSON specified",
            HvacType::IdealAirLoads => "Ideal Air Loads",
            HvacType::ElectricBaseboard => "Electric Baseboard",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for HvacType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HvacType::ALL
            .iter()
            .find(|t| t.to_string() == s.trim())
            .copied()
            .ok_or_else(|| format!("Unknown HVAC type '{}'", s))
    }
}

/***********/
/* TESTING */
/***********/
