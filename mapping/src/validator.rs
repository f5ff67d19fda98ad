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

use crate::MappingError;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// The name given to documents validated through [`validate_str`], which
/// never lived in a file.
pub const INLINE_DOCUMENT: &str = "<inline document>";

/// Reads the HVAC mapping document in `document_path` and checks it against
/// the thermal zones in the model (i.e., `known_zone_names`).
///
/// The document is returned untouched when it passes every check.
pub fn validate<P: AsRef<Path>>(
    document_path: P,
    known_zone_names: &HashSet<String>,
) -> Result<Value, MappingError> {
    let path = document_path.as_ref().display().to_string();
    let bytes = match fs::read(document_path.as_ref()) {
        Ok(v) => v,
        Err(_) => return Err(MappingError::PathNotFound { path }),
    };
    let document: Value =
        serde_json::from_slice(&bytes).map_err(|e| MappingError::MalformedJson {
            path: path.clone(),
            reason: e.to_string(),
        })?;
    check(&path, document, known_zone_names)
}

/// Same as [`validate`], but over a document that is already in memory.
///
/// Errors refer to the document as [`INLINE_DOCUMENT`].
pub fn validate_str(json: &str, known_zone_names: &HashSet<String>) -> Result<Value, MappingError> {
    let document: Value = serde_json::from_str(json).map_err(|e| MappingError::MalformedJson {
        path: INLINE_DOCUMENT.to_string(),
        reason: e.to_string(),
    })?;
    check(INLINE_DOCUMENT, document, known_zone_names)
}

/// Every check after parsing, in order
fn check(
    path: &str,
    document: Value,
    known_zone_names: &HashSet<String>,
) -> Result<Value, MappingError> {
    let zones = extract_zones(&document).map_err(|reason| MappingError::InvalidSchema {
        path: path.to_string(),
        reason,
    })?;

    if zones.is_empty() {
        return Err(MappingError::EmptyMapping {
            path: path.to_string(),
        });
    }

    let duplicated = duplicated_zones(&zones);
    if !duplicated.is_empty() {
        return Err(MappingError::DuplicateZones {
            path: path.to_string(),
            zones: duplicated,
        });
    }

    let unknown = unknown_zones(&zones, known_zone_names);
    if !unknown.is_empty() {
        return Err(MappingError::UnknownZones {
            path: path.to_string(),
            zones: unknown,
        });
    }

    tracing::debug!(
        "HVAC mapping '{}' assigns {} thermal zones",
        path,
        zones.len()
    );
    Ok(document)
}

/// Reads `systems[*].thermal_zones` and puts all the zones in a single list,
/// in the order in which they appear in the document.
///
/// Fails with a description of the problem when the document does not have
/// that shape.
///
/// ```
/// let doc = serde_json::json!({
///     "systems": [
///         { "thermal_zones": ["Zone1", "Zone2"] },
///         { "thermal_zones": ["Zone3"] }
///     ]
/// });
/// assert_eq!(mapping::extract_zones(&doc).unwrap(), vec!["Zone1", "Zone2", "Zone3"]);
/// ```
pub fn extract_zones(document: &Value) -> Result<Vec<String>, String> {
    if !document.is_object() {
        return Err("the document is not a JSON object".to_string());
    }
    let systems = match document.get("systems") {
        Some(Value::Array(systems)) => systems,
        Some(_) => return Err("field 'systems' is not an array".to_string()),
        None => return Err("missing field 'systems'".to_string()),
    };

    let mut zones = Vec::new();
    for (i, system) in systems.iter().enumerate() {
        let thermal_zones = match system.get("thermal_zones") {
            Some(Value::Array(z)) => z,
            Some(_) => {
                return Err(format!(
                    "field 'thermal_zones' of system {} is not an array",
                    i
                ))
            }
            None => return Err(format!("system {} has no field 'thermal_zones'", i)),
        };
        for zone in thermal_zones {
            match zone.as_str() {
                Some(z) => zones.push(z.to_string()),
                None => {
                    return Err(format!(
                        "system {} has a thermal zone that is not a string: {}",
                        i, zone
                    ))
                }
            }
        }
    }
    Ok(zones)
}

/// The zones that appear more than once in `zones`, anywhere in it.
///
/// Each of them is listed once, in order of first appearance.
///
/// ```
/// let zones: Vec<String> = ["A", "B", "A", "C", "B", "A"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(mapping::duplicated_zones(&zones), vec!["A", "B"]);
/// ```
pub fn duplicated_zones(zones: &[String]) -> Vec<String> {
    let mut count: HashMap<&str, usize> = HashMap::with_capacity(zones.len());
    for z in zones {
        *count.entry(z.as_str()).or_insert(0) += 1;
    }

    let mut reported: HashSet<&str> = HashSet::new();
    let mut duplicated = Vec::new();
    for z in zones {
        if count[z.as_str()] > 1 && reported.insert(z.as_str()) {
            duplicated.push(z.clone());
        }
    }
    duplicated
}

/// The zones in `zones` that are not in `known_zone_names`.
///
/// Each of them is listed once (even if it appears several times in
/// `zones`), in order of first appearance.
///
/// ```
/// use std::collections::HashSet;
///
/// let known: HashSet<String> = ["A"].iter().map(|s| s.to_string()).collect();
/// let zones: Vec<String> = ["Z", "A", "Y", "Z"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(mapping::unknown_zones(&zones, &known), vec!["Z", "Y"]);
/// ```
pub fn unknown_zones(zones: &[String], known_zone_names: &HashSet<String>) -> Vec<String> {
    let mut reported: HashSet<&str> = HashSet::new();
    let mut unknown = Vec::new();
    for z in zones {
        if !known_zone_names.contains(z) && reported.insert(z.as_str()) {
            unknown.push(z.clone());
        }
    }
    unknown
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    fn known(zones: &[&str]) -> HashSet<String> {
        zones.iter().map(|s| s.to_string()).collect()
    }

    fn strings(zones: &[&str]) -> Vec<String> {
        zones.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn extract_in_document_order() -> Result<(), String> {
        let doc: Value = json5::from_str(
            "{
            systems: [
                { thermal_zones: ['B', 'A'] },
                { thermal_zones: [] },
                { thermal_zones: ['C'], name: 'Third', system_type: 'PTAC' },
            ]
        }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(extract_zones(&doc)?, strings(&["B", "A", "C"]));
        Ok(())
    }

    #[test]
    fn extract_bad_shapes() {
        let cases = [
            "[]",
            "\"systems\"",
            "{}",
            "{\"systems\": {}}",
            "{\"systems\": [{}]}",
            "{\"systems\": [{\"thermal_zones\": \"A\"}]}",
            "{\"systems\": [{\"thermal_zones\": [\"A\", 2]}]}",
            "{\"systems\": [\"A\"]}",
            "{\"systems\": null}",
        ];
        for case in cases {
            let doc: Value = serde_json::from_str(case).unwrap();
            assert!(extract_zones(&doc).is_err(), "'{}' should fail", case);
        }
    }

    #[test]
    fn duplicates() {
        assert!(duplicated_zones(&strings(&["A", "B", "C"])).is_empty());
        assert!(duplicated_zones(&[]).is_empty());
        assert_eq!(
            duplicated_zones(&strings(&["A", "B", "B", "A", "B"])),
            strings(&["A", "B"])
        );
    }

    #[test]
    fn unknown_zones_are_deduplicated() {
        let known = known(&["A"]);
        assert_eq!(
            unknown_zones(&strings(&["Z", "Z", "A", "Y", "Z"]), &known),
            strings(&["Z", "Y"])
        );
        assert!(unknown_zones(&strings(&["A", "A"]), &known).is_empty());
    }

    #[test]
    fn zone_names_are_case_sensitive() {
        let known = known(&["Zone1"]);
        let err = validate_str(r#"{"systems":[{"thermal_zones":["zone1"]}]}"#, &known).unwrap_err();
        assert_eq!(err.zones().to_vec(), strings(&["zone1"]));
    }

    #[test]
    fn document_is_returned_untouched() {
        let json = r#"{"systems":[{"thermal_zones":["A"],"system_type":"PSZ-AC","extra":{"x":1}}],"version":2}"#;
        let doc = validate_str(json, &known(&["A"])).unwrap();
        let expected: Value = serde_json::from_str(json).unwrap();
        assert_eq!(doc, expected);
    }

    #[test]
    fn duplicates_are_checked_before_unknown_zones() {
        // 'Z' is both duplicated and unknown
        let err = validate_str(
            r#"{"systems":[{"thermal_zones":["Z"]},{"thermal_zones":["Z"]}]}"#,
            &known(&["A"]),
        )
        .unwrap_err();
        assert!(matches!(err, MappingError::DuplicateZones { .. }));
    }

    #[test]
    fn duplicates_within_one_system() {
        let err = validate_str(r#"{"systems":[{"thermal_zones":["A","A"]}]}"#, &known(&["A"]))
            .unwrap_err();
        assert_eq!(
            err,
            MappingError::DuplicateZones {
                path: INLINE_DOCUMENT.to_string(),
                zones: strings(&["A"])
            }
        );
    }

    #[test]
    fn empty_mapping_is_checked_before_unknown_zones() {
        let err = validate_str(r#"{"systems":[{"thermal_zones":[]}]}"#, &known(&[])).unwrap_err();
        assert!(matches!(err, MappingError::EmptyMapping { .. }));
    }

    #[test]
    fn malformed_inline_document() {
        let err = validate_str("{\"systems\": [", &known(&["A"])).unwrap_err();
        match err {
            MappingError::MalformedJson { path, .. } => assert_eq!(path, INLINE_DOCUMENT),
            _ => panic!("Expecting MalformedJson, found {:?}", err),
        }
    }
}
