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

//! Functions for creating the preset geometries that can replace the
//! geometry of a model.
//!
//! The zoning follows the usual prototype buildings: a core and four
//! perimeter zones per floor in offices, three zones with different
//! uses in a warehouse, and so on.

use model::{Float, Model, Space, SpacePurpose};
use std::fmt;
use std::str::FromStr;

/// The geometries that can be chosen
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GeometryPreset {
    /// Keep whatever geometry the model has
    #[default]
    ExistingGeometry,

    /// A single-storey office with a core and four perimeter zones
    SmallOffice,

    /// A three-storey office with a core and four perimeter zones
    /// per storey
    MediumOffice,

    /// A warehouse with an office, a fine storage and a bulk storage
    Warehouse,

    /// A storey of an apartment building: four apartments and a corridor
    MidriseApartment,
}

impl GeometryPreset {
    /// Every preset, in the order shown to the user
    pub const ALL: [GeometryPreset; 5] = [
        GeometryPreset::ExistingGeometry,
        GeometryPreset::SmallOffice,
        GeometryPreset::MediumOffice,
        GeometryPreset::Warehouse,
        GeometryPreset::MidriseApartment,
    ];

    /// Builds the replacement model. Returns `None` for
    /// [`GeometryPreset::ExistingGeometry`], as nothing is to be replaced.
    pub fn load(&self) -> Result<Option<Model>, String> {
        let model = match self {
            GeometryPreset::ExistingGeometry => return Ok(None),
            GeometryPreset::SmallOffice => small_office()?,
            GeometryPreset::MediumOffice => medium_office()?,
            GeometryPreset::Warehouse => warehouse()?,
            GeometryPreset::MidriseApartment => midrise_apartment()?,
        };
        Ok(Some(model))
    }
}

impl fmt::Display for GeometryPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GeometryPreset::ExistingGeometry => "Existing Geometry",
            GeometryPreset::SmallOffice => "Small Office",
            GeometryPreset::MediumOffice => "Medium Office",
            GeometryPreset::Warehouse => "Warehouse",
            GeometryPreset::MidriseApartment => "Midrise Apartment",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for GeometryPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeometryPreset::ALL
            .iter()
            .find(|p| p.to_string() == s)
            .copied()
            .ok_or_else(|| format!("Unknown geometry preset '{}'", s))
    }
}

/// Characteristics of a zone in a preset
pub struct ZoneOptions<'a> {
    /// The name of the zone
    pub name: &'a str,

    /// Floor area, in m2
    pub floor_area: Float,

    /// Floor to ceiling height, in m
    pub height: Float,

    /// The storey, counting from 0
    pub storey: usize,

    /// What the zone is used for
    pub purpose: SpacePurpose,
}

/// Adds a zone to the model
pub fn add_zone(model: &mut Model, options: &ZoneOptions) -> Result<(), String> {
    if options.floor_area <= 0.0 || options.height <= 0.0 {
        return Err(format!(
            "Zone '{}' needs a positive floor_area and height",
            options.name
        ));
    }
    let mut space = Space::new(options.name);
    space
        .set_floor_area(options.floor_area)
        .set_volume(options.floor_area * options.height)
        .set_storey(options.storey)
        .push_purpose(options.purpose);
    model.add_space(space);
    Ok(())
}

/// Adds a core and four perimeter zones to a storey of an office.
fn add_office_storey(
    model: &mut Model,
    names: [&str; 5],
    areas: [Float; 5],
    height: Float,
    storey: usize,
) -> Result<(), String> {
    for (name, floor_area) in names.into_iter().zip(areas) {
        add_zone(
            model,
            &ZoneOptions {
                name,
                floor_area,
                height,
                storey,
                purpose: SpacePurpose::Office,
            },
        )?;
    }
    Ok(())
}

/// A single-storey office with zones `Core_ZN` and `Perimeter_ZN_1` to
/// `Perimeter_ZN_4`.
pub fn small_office() -> Result<Model, String> {
    let mut model = Model::default();
    model.name = Some(GeometryPreset::SmallOffice.to_string());
    add_office_storey(
        &mut model,
        [
            "Core_ZN",
            "Perimeter_ZN_1",
            "Perimeter_ZN_2",
            "Perimeter_ZN_3",
            "Perimeter_ZN_4",
        ],
        [149.66, 113.45, 67.30, 113.45, 67.30],
        3.05,
        0,
    )?;
    Ok(model)
}

/// A three-storey office. Each storey has a core and four perimeter zones
/// (e.g., `Core_bottom` and `Perimeter_bot_ZN_1`).
pub fn medium_office() -> Result<Model, String> {
    let mut model = Model::default();
    model.name = Some(GeometryPreset::MediumOffice.to_string());
    let areas = [983.54, 207.34, 131.26, 207.34, 131.26];
    for (storey, (core, perimeter)) in [("bottom", "bot"), ("mid", "mid"), ("top", "top")]
        .iter()
        .enumerate()
    {
        let core = format!("Core_{}", core);
        let perimeters: Vec<String> = (1..=4)
            .map(|i| format!("Perimeter_{}_ZN_{}", perimeter, i))
            .collect();
        add_office_storey(
            &mut model,
            [
                core.as_str(),
                perimeters[0].as_str(),
                perimeters[1].as_str(),
                perimeters[2].as_str(),
                perimeters[3].as_str(),
            ],
            areas,
            2.74,
            storey,
        )?;
    }
    Ok(model)
}

/// A warehouse with zones `Zone1 Office`, `Zone2 Fine Storage` and
/// `Zone3 Bulk Storage`
pub fn warehouse() -> Result<Model, String> {
    let mut model = Model::default();
    model.name = Some(GeometryPreset::Warehouse.to_string());
    let zones = [
        ("Zone1 Office", 231.14, 4.27, SpacePurpose::Office),
        ("Zone2 Fine Storage", 1284.65, 8.53, SpacePurpose::Storage),
        ("Zone3 Bulk Storage", 3319.35, 8.53, SpacePurpose::Storage),
    ];
    for (name, floor_area, height, purpose) in zones {
        add_zone(
            &mut model,
            &ZoneOptions {
                name,
                floor_area,
                height,
                storey: 0,
                purpose,
            },
        )?;
    }
    Ok(model)
}

/// The ground storey of an apartment building: `G SW Apartment`,
/// `G NW Apartment`, `G NE Apartment`, `G SE Apartment` and `G Corridor`
pub fn midrise_apartment() -> Result<Model, String> {
    let mut model = Model::default();
    model.name = Some(GeometryPreset::MidriseApartment.to_string());
    let zones = [
        ("G SW Apartment", 88.25, SpacePurpose::Apartment),
        ("G NW Apartment", 88.25, SpacePurpose::Apartment),
        ("G NE Apartment", 88.25, SpacePurpose::Apartment),
        ("G SE Apartment", 88.25, SpacePurpose::Apartment),
        ("G Corridor", 47.05, SpacePurpose::Corridor),
    ];
    for (name, floor_area, purpose) in zones {
        add_zone(
            &mut model,
            &ZoneOptions {
                name,
                floor_area,
                height: 3.05,
                storey: 0,
                purpose,
            },
        )?;
    }
    Ok(model)
}
