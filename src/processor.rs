//! Sweep orchestration and materialization of combinations.
//! Every combination becomes one directory under the output root holding
//! one fully-resolved configuration file.

use crate::{
    combinations::Combination,
    constants::{DEFAULT_TEMPLATE, DIR_PREFIX, MAX_DIR_NAME_LEN, OUTPUT_FILE},
    domain::ParameterSet,
    error::{Error, Result},
    manifest::Manifest,
    template::Template,
};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Inputs of a sweep run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOptions {
    /// Template file to expand
    pub template: PathBuf,
    /// Directory under which combination directories are created
    pub output_dir: PathBuf,
    /// Name of the generated file inside each combination directory
    pub file_name: String,
    /// Only log directory names, create nothing
    pub dry_run: bool,
    /// Write `sweep.json` into the output directory
    pub manifest: bool,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE),
            output_dir: PathBuf::from("."),
            file_name: OUTPUT_FILE.to_string(),
            dry_run: false,
            manifest: false,
        }
    }
}

/// Result of a completed sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepSummary {
    pub parameters: usize,
    pub combinations: u64,
    pub output_dir: PathBuf,
}

/// Outcome of processing one combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub index: u64,
    pub dir_name: String,
    /// Path of the generated file
    pub target: PathBuf,
    /// False on dry runs
    pub written: bool,
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
pub fn title_case(name: &str) -> String {
    let mut previous_alphabetic = false;
    name.chars()
        .map(|c| {
            let mapped: String = if !c.is_alphabetic() {
                c.to_string()
            } else if previous_alphabetic {
                c.to_lowercase().collect()
            } else {
                c.to_uppercase().collect()
            };
            previous_alphabetic = c.is_alphabetic();
            mapped
        })
        .collect()
}

/// Directory name of a combination: prefix and index, then `key=value` for
/// every varying parameter, cut to [`MAX_DIR_NAME_LEN`] characters.
pub fn dir_name(index: u64, parameters: &ParameterSet, selection: &[usize]) -> String {
    let mut name = format!("{}{}_", DIR_PREFIX, index);
    for parameter in parameters.parameters().iter().filter(|p| p.is_varying()) {
        name.push_str(&parameter.key);
        name.push('=');
        name.push_str(parameter.value(selection[parameter.index]));
    }

    match name.char_indices().nth(MAX_DIR_NAME_LEN) {
        Some((cut, _)) => name[..cut].to_string(),
        None => name,
    }
}

/// Renders the configuration file of one combination.
pub fn render(template: &Template, parameters: &ParameterSet, selection: &[usize]) -> String {
    let mut rendered = String::new();
    let mut resolved = parameters.parameters().iter();

    for (section, entries) in template.sections() {
        if template.is_sectioned() {
            rendered.push_str(&format!("[{}]\n", title_case(section)));
        }
        for parameter in resolved.by_ref().take(entries.len()) {
            let value = parameter.render(selection[parameter.index]);
            rendered.push_str(&format!("{}={}\n", parameter.key, value));
        }
        rendered.push('\n');
    }

    rendered
}

/// Materializes combinations of one template into an output root.
pub struct Processor<'a> {
    template: &'a Template,
    parameters: &'a ParameterSet,
    output_root: &'a Path,
    file_name: &'a str,
    dry_run: bool,
}

impl<'a> Processor<'a> {
    pub fn new(
        template: &'a Template,
        parameters: &'a ParameterSet,
        output_root: &'a Path,
        file_name: &'a str,
        dry_run: bool,
    ) -> Self {
        Self { template, parameters, output_root, file_name, dry_run }
    }

    /// Creates the directory of `combination` (an existing one is reused)
    /// and writes its configuration file.
    ///
    /// # Errors
    /// * `Error::CreateDirError` if the directory cannot be created
    /// * `Error::WriteError` if the file cannot be written
    pub fn process(&self, combination: &Combination) -> Result<ProcessResult> {
        let dir_name = dir_name(combination.index, self.parameters, &combination.selection);
        let dir = self.output_root.join(&dir_name);
        let target = dir.join(self.file_name);

        if self.dry_run {
            debug!("Dry run, skipping {}", target.display());
            return Ok(ProcessResult { index: combination.index, dir_name, target, written: false });
        }

        fs::create_dir_all(&dir).map_err(|source| Error::CreateDirError { path: dir.clone(), source })?;
        let content = render(self.template, self.parameters, &combination.selection);
        fs::write(&target, content)
            .map_err(|source| Error::WriteError { path: target.clone(), source })?;

        Ok(ProcessResult { index: combination.index, dir_name, target, written: true })
    }
}

/// Expands the template into one directory per combination.
///
/// # Flow
/// 1. Loads the template (sectioned files get their booleans quoted in place)
/// 2. Resolves every parameter's value domain
/// 3. Materializes combinations `0..total` in increasing order
/// 4. Writes the manifest if requested
///
/// The first failure aborts the sweep; directories written before it stay.
pub fn run_sweep(options: &SweepOptions) -> Result<SweepSummary> {
    if !options.template.is_file() {
        return Err(Error::TemplateNotFound { path: options.template.clone() });
    }
    info!("Template file {} was found", options.template.display());

    let template = Template::load(&options.template)?;
    let parameters = ParameterSet::resolve(&template)?;
    info!(
        "{} parameter(s) in {} template, {} combination(s)",
        parameters.len(),
        if template.is_sectioned() { "sectioned" } else { "flat" },
        parameters.total_combinations()
    );

    let processor = Processor::new(
        &template,
        &parameters,
        &options.output_dir,
        &options.file_name,
        options.dry_run,
    );
    let mut manifest = options
        .manifest
        .then(|| Manifest::new(&options.template, template.is_sectioned(), &parameters));

    for combination in parameters.combinations() {
        let result = processor.process(&combination)?;
        if result.written {
            info!("Processed dir: {}", result.dir_name);
        } else {
            info!("Would create dir: {}", result.dir_name);
        }
        if let Some(manifest) = manifest.as_mut() {
            manifest.record(result.index, &result.dir_name, &combination.selection, &parameters);
        }
    }

    if let Some(manifest) = manifest {
        if options.dry_run {
            debug!("Dry run, manifest not written");
        } else {
            fs::create_dir_all(&options.output_dir).map_err(|source| Error::CreateDirError {
                path: options.output_dir.clone(),
                source,
            })?;
            manifest.write(&options.output_dir)?;
        }
    }

    info!("Finished");
    Ok(SweepSummary {
        parameters: parameters.len(),
        combinations: parameters.total_combinations(),
        output_dir: options.output_dir.clone(),
    })
}
