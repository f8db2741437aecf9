//! Machine-readable summary of a sweep, written as `sweep.json`.

use crate::constants::MANIFEST_FILE;
use crate::domain::ParameterSet;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Domain of one parameter as it appears in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestParameter {
    pub index: usize,
    /// Omitted for templates without section headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub key: String,
    pub values: Vec<String>,
}

/// One generated directory and the values that vary in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub index: u64,
    pub dir: String,
    pub selection: Vec<usize>,
    pub values: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub template: String,
    pub combinations: u64,
    pub parameters: Vec<ManifestParameter>,
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(template: &Path, sectioned: bool, parameters: &ParameterSet) -> Self {
        let described = parameters
            .parameters()
            .iter()
            .map(|parameter| ManifestParameter {
                index: parameter.index,
                section: sectioned.then(|| parameter.section.clone()),
                key: parameter.key.clone(),
                values: parameter.domain.values().to_vec(),
            })
            .collect();

        Self {
            template: template.display().to_string(),
            combinations: parameters.total_combinations(),
            parameters: described,
            entries: Vec::new(),
        }
    }

    /// Records a processed combination. Keys are `section.key` for sectioned
    /// templates so that repeated keys stay distinct.
    pub fn record(&mut self, index: u64, dir: &str, selection: &[usize], parameters: &ParameterSet) {
        let values = parameters
            .parameters()
            .iter()
            .filter(|parameter| parameter.is_varying())
            .map(|parameter| {
                let value = parameter.value(selection[parameter.index]).to_string();
                let name = match self.parameters[parameter.index].section {
                    Some(ref section) => format!("{}.{}", section, parameter.key),
                    None => parameter.key.clone(),
                };
                (name, value)
            })
            .collect();

        self.entries.push(ManifestEntry {
            index,
            dir: dir.to_string(),
            selection: selection.to_vec(),
            values,
        });
    }

    /// Writes the manifest into `output_root`.
    pub fn write(&self, output_root: &Path) -> Result<()> {
        let path = output_root.join(MANIFEST_FILE);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content).map_err(|source| Error::WriteError { path, source })
    }
}
