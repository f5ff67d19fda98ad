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

use crate::options::ClimateZone;

/// The weather file usually used to represent a climate zone
/// (e.g., Baltimore for 4A). Returns `None` for
/// [`ClimateZone::LookupFromModel`], which is not a climate zone.
pub fn representative_weather_file(zone: ClimateZone) -> Option<&'static str> {
    let file = match zone {
        ClimateZone::LookupFromModel => return None,
        ClimateZone::Cz1A => "USA_FL_Miami.Intl.AP.722020_TMY3.epw",
        ClimateZone::Cz1B => "SAU_Riyadh.404380_IWEC.epw",
        ClimateZone::Cz2A => "USA_TX_Houston-Bush.Intercontinental.AP.722430_TMY3.epw",
        ClimateZone::Cz2B => "USA_AZ_Phoenix-Sky.Harbor.Intl.AP.722780_TMY3.epw",
        ClimateZone::Cz3A => "USA_TN_Memphis.Intl.AP.723340_TMY3.epw",
        ClimateZone::Cz3B => "USA_TX_El.Paso.Intl.AP.722700_TMY3.epw",
        ClimateZone::Cz3C => "USA_CA_San.Francisco.Intl.AP.724940_TMY3.epw",
        ClimateZone::Cz4A => "USA_MD_Baltimore-Washington.Intl.AP.724060_TMY3.epw",
        ClimateZone::Cz4B => "USA_NM_Albuquerque.Intl.AP.723650_TMY3.epw",
        ClimateZone::Cz4C => "USA_WA_Seattle-Tacoma.Intl.AP.727930_TMY3.epw",
        ClimateZone::Cz5A => "USA_IL_Chicago-OHare.Intl.AP.725300_TMY3.epw",
        ClimateZone::Cz5B => "USA_CO_Boulder.724699_TMY2.epw",
        ClimateZone::Cz5C => "CAN_BC_Vancouver.718920_CWEC.epw",
        ClimateZone::Cz6A => "USA_MN_Minneapolis-St.Paul.Intl.AP.726580_TMY3.epw",
        ClimateZone::Cz6B => "USA_MT_Helena.Rgnl.AP.727720_TMY3.epw",
        ClimateZone::Cz7 => "USA_MN_Duluth.Intl.AP.727450_TMY3.epw",
        ClimateZone::Cz8 => "USA_AK_Fairbanks.Intl.AP.702610_TMY3.epw",
    };
    Some(file)
}
