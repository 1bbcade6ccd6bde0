//! JSON instance parser.
//!
//! A file holds either one instance object or an array of them:
//!
//! ```json
//! { "name": "example", "costs": [[4, 1, 3], [2, 0, 5], [3, 2, 2]], "optimal_cost": 5 }
//! ```

use crate::dataset::Instance;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use u_assign_core::CostMatrix;

/// Errors that can occur when parsing instances.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid instance '{name}': {source}")]
    InvalidInstance {
        name: String,
        #[source]
        source: u_assign_core::Error,
    },
}

/// Parser for assignment instance files.
#[derive(Debug, Default)]
pub struct InstanceParser;

impl InstanceParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses instances from a JSON file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<Instance>, ParseError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let default_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "instance".to_string());
        self.parse_json_named(&content, &default_name)
    }

    /// Parses instances from a JSON string.
    pub fn parse_json(&self, json: &str) -> Result<Vec<Instance>, ParseError> {
        self.parse_json_named(json, "instance")
    }

    fn parse_json_named(&self, json: &str, default_name: &str) -> Result<Vec<Instance>, ParseError> {
        let raw: RawFile = serde_json::from_str(json)?;
        let raws = match raw {
            RawFile::Single(instance) => vec![instance],
            RawFile::Many(instances) => instances,
        };
        let single = raws.len() == 1;

        raws.into_iter()
            .enumerate()
            .map(|(i, raw)| {
                let fallback = if single {
                    default_name.to_string()
                } else {
                    format!("{}-{}", default_name, i)
                };
                self.convert_raw_instance(raw, fallback)
            })
            .collect()
    }

    /// Converts a raw instance, validating its cost matrix.
    fn convert_raw_instance(
        &self,
        raw: RawInstance,
        fallback_name: String,
    ) -> Result<Instance, ParseError> {
        let name = raw.name.unwrap_or(fallback_name);

        let costs = match raw.costs {
            Some(costs) => costs,
            None => {
                return Err(ParseError::InvalidInstance {
                    source: u_assign_core::Error::missing_input("no cost matrix given"),
                    name,
                })
            }
        };

        if let Err(source) = CostMatrix::from_rows(costs.clone()) {
            return Err(ParseError::InvalidInstance { name, source });
        }

        Ok(Instance {
            name,
            costs,
            optimal_cost: raw.optimal_cost,
        })
    }
}

/// Raw file contents as parsed from JSON.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawFile {
    Many(Vec<RawInstance>),
    Single(RawInstance),
}

/// Raw instance as parsed from JSON.
#[derive(Debug, Deserialize)]
struct RawInstance {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    costs: Option<Vec<Vec<u32>>>,
    #[serde(default)]
    optimal_cost: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_instance() {
        let json = r#"{
            "name": "worked",
            "costs": [[4, 1, 3], [2, 0, 5], [3, 2, 2]],
            "optimal_cost": 5
        }"#;

        let parser = InstanceParser::new();
        let instances = parser.parse_json(json).unwrap();

        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].name, "worked");
        assert_eq!(instances[0].dim(), 3);
        assert_eq!(instances[0].optimal_cost, Some(5));
    }

    #[test]
    fn test_parse_instance_list() {
        let json = r#"[
            { "costs": [[7]] },
            { "name": "pair", "costs": [[1, 2], [2, 1]] }
        ]"#;

        let instances = InstanceParser::new().parse_json(json).unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].name, "instance-0");
        assert_eq!(instances[1].name, "pair");
        assert_eq!(instances[1].optimal_cost, None);
    }

    #[test]
    fn test_missing_costs() {
        for json in [r#"{ "name": "empty" }"#, r#"{ "name": "empty", "costs": null }"#] {
            let err = InstanceParser::new().parse_json(json).unwrap_err();
            match err {
                ParseError::InvalidInstance { name, source } => {
                    assert_eq!(name, "empty");
                    assert!(matches!(source, u_assign_core::Error::MissingInput(_)));
                }
                other => panic!("Expected InvalidInstance, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_non_square_costs() {
        let json = r#"{ "name": "wide", "costs": [[1, 2, 3], [4, 5, 6]] }"#;
        let err = InstanceParser::new().parse_json(json).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidInstance {
                source: u_assign_core::Error::InvalidDimension(_),
                ..
            }
        ));
    }

    #[test]
    fn test_negative_costs_rejected() {
        let json = r#"{ "costs": [[-1, 2], [3, 4]] }"#;
        let err = InstanceParser::new().parse_json(json).unwrap_err();
        assert!(matches!(err, ParseError::JsonError(_)));
    }
}
