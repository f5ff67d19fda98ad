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

use core::fmt;

use crate::Float;
use serde::{Deserialize, Serialize};

/// The category of a space.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpacePurpose {
    /// Open or closed offices
    Office,
    /// Corridors, lobbies, stairs
    Corridor,
    /// A dwelling unit
    Apartment,
    /// Storage areas, conditioned or not
    Storage,
    /// Sales floors
    Retail,
    /// Bathroom, toilette, shower, etc.
    Bathroom,
    /// Other
    #[default]
    Other,
}

impl std::fmt::Display for SpacePurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SpacePurpose::Office => "Office",
            SpacePurpose::Corridor => "Corridor",
            SpacePurpose::Apartment => "Apartment",
            SpacePurpose::Storage => "Storage",
            SpacePurpose::Retail => "Retail",
            SpacePurpose::Bathroom => "Bathroom",
            SpacePurpose::Other => "Other",
        };
        write!(f, "{}", s)
    }
}

/// Represents a thermal zone; that is, a region of the building with
/// its own heating and cooling demand. It is often an actual room
/// enclosed by walls, but it can also be a whole floor or the
/// perimeter of a floor.
///
/// ## Examples
///
/// #### `.json`
/// ```json
/// {
///     "name": "Perimeter_ZN_1",
///     "floor_area": 113.45,
///     "volume": 345.6,
///     "storey": 0,
///     "purposes": ["Office"]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Space {
    /// The name of the space
    pub name: String,

    /// Volume of the space, in m3
    #[serde(skip_serializing_if = "Option::is_none")]
    volume: Option<Float>,

    /// Floor area of the space, in m2
    #[serde(skip_serializing_if = "Option::is_none")]
    floor_area: Option<Float>,

    /// The storey in which the space is located,
    /// indexing from 0 (i.e., ground floor is 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    storey: Option<usize>,

    /// The purposes in a room. It can have multiple
    /// purposes (e.g., an Office with its own Bathroom)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub purposes: Vec<SpacePurpose>,
}

impl Space {
    /// Creates a new [`Space`] with nothing but a name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            volume: None,
            floor_area: None,
            storey: None,
            purposes: Vec::new(),
        }
    }

    /// Borrows the name
    pub fn name(&self) -> &String {
        &self.name
    }

    /// Sets the volume
    pub fn set_volume(&mut self, v: Float) -> &mut Self {
        self.volume = Some(v);
        self
    }

    /// Gets the volume, or fails if it has not been set
    pub fn volume(&self) -> Result<Float, String> {
        self.volume
            .ok_or_else(|| format!("Space '{}' has no volume", self.name))
    }

    /// Sets the floor area
    pub fn set_floor_area(&mut self, v: Float) -> &mut Self {
        self.floor_area = Some(v);
        self
    }

    /// Gets the floor area, or fails if it has not been set
    pub fn floor_area(&self) -> Result<Float, String> {
        self.floor_area
            .ok_or_else(|| format!("Space '{}' has no floor_area", self.name))
    }

    /// Sets the storey
    pub fn set_storey(&mut self, v: usize) -> &mut Self {
        self.storey = Some(v);
        self
    }

    /// Gets the storey, or fails if it has not been set
    pub fn storey(&self) -> Result<usize, String> {
        self.storey
            .ok_or_else(|| format!("Space '{}' has no storey", self.name))
    }

    /// Adds a purpose to the space
    pub fn push_purpose(&mut self, p: SpacePurpose) -> &mut Self {
        self.purposes.push(p);
        self
    }
}

/***********/
/* TESTING */
/***********/
