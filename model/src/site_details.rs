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

/// Some information about the site in which the building(s) are located
///
/// # Examples
///
///  #### `.json`
/// ```json
/// {
///     "climate_zone": "ASHRAE 169-2013-4A",
///     "weather_file": "USA_MD_Baltimore-Washington.Intl.AP.724060_TMY3.epw",
///     "altitude": 47.0
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteDetails {
    /// The climate zone of the site (e.g., `"ASHRAE 169-2013-4A"`).
    ///
    /// It is kept as written by the user; its interpretation is left to
    /// whoever configures the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    climate_zone: Option<String>,

    /// The weather file that will be used when simulating the model
    #[serde(skip_serializing_if = "Option::is_none")]
    weather_file: Option<String>,

    /// The altitude of the site.
    #[serde(skip_serializing_if = "Option::is_none")]
    altitude: Option<Float>,

    /// In degrees. South is negative and North is positive
    #[serde(skip_serializing_if = "Option::is_none")]
    latitude: Option<Float>,

    /// In degrees. West is negative, east is positive.
    #[serde(skip_serializing_if = "Option::is_none")]
    longitude: Option<Float>,
}

impl SiteDetails {
    /// Creates an empty [`SiteDetails`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the climate zone
    pub fn set_climate_zone<S: Into<String>>(&mut self, v: S) -> &mut Self {
        self.climate_zone = Some(v.into());
        self
    }

    /// Gets the climate zone, or fails if it has not been set
    pub fn climate_zone(&self) -> Result<&String, String> {
        self.climate_zone
            .as_ref()
            .ok_or_else(|| "Site details have no climate_zone".to_string())
    }

    /// Sets the weather file
    pub fn set_weather_file<S: Into<String>>(&mut self, v: S) -> &mut Self {
        self.weather_file = Some(v.into());
        self
    }

    /// Gets the weather file, or fails if it has not been set
    pub fn weather_file(&self) -> Result<&String, String> {
        self.weather_file
            .as_ref()
            .ok_or_else(|| "Site details have no weather_file".to_string())
    }

    /// Sets the altitude
    pub fn set_altitude(&mut self, v: Float) -> &mut Self {
        self.altitude = Some(v);
        self
    }

    /// Gets the altitude, or fails if it has not been set
    pub fn altitude(&self) -> Result<Float, String> {
        self.altitude
            .ok_or_else(|| "Site details have no altitude".to_string())
    }

    /// Sets the latitude
    pub fn set_latitude(&mut self, v: Float) -> &mut Self {
        self.latitude = Some(v);
        self
    }

    /// Gets the latitude, or fails if it has not been set
    pub fn latitude(&self) -> Result<Float, String> {
        self.latitude
            .ok_or_else(|| "Site details have no latitude".to_string())
    }

    /// Sets the longitude
    pub fn set_longitude(&mut self, v: Float) -> &mut Self {
        self.longitude = Some(v);
        self
    }

    /// Gets the longitude, or fails if it has not been set
    pub fn longitude(&self) -> Result<Float, String> {
        self.longitude
            .ok_or_else(|| "Site details have no longitude".to_string())
    }
}

/***********/
/* TESTING */
/***********/
