//! Task files let a calculation be configured from a file instead of typed
//! into the menu. Two forms are accepted:
//!
//! - plain text with a `SPECIES` section (four rows of `name nu n0 mw`, the
//!   name may contain spaces, the last three whitespace-separated tokens are
//!   the numeric fields) and a `TASK` section of `key: value` lines
//!   (`lim_index`, `conversion`, `comparison`)
//! - a `.json` file holding the same request serialized as `FormRequest`
//!
//! Lines starting with `#` are comments. All values stay raw strings here;
//! numeric parsing and validation happen in the engine, so a typo in the file
//! surfaces as the same `ParseError` a form submission would get.

use crate::Stoichiometry::extent_engine::SPECIES_COUNT;
use crate::Stoichiometry::form_request::FormRequest;
use log::{error, info, warn};
use regex::Regex;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const TEMPLATE_FILENAME: &str = "stoich_task_template.txt";

pub struct TaskFile {
    pub file_name: String,
}

impl TaskFile {
    pub fn new(file_name: String) -> Self {
        TaskFile { file_name }
    }
    pub fn load(&self) -> Result<FormRequest, String> {
        load_task(&self.file_name)
    }
}

/// Loads a task file, choosing the format by extension.
pub fn load_task(file_name: &str) -> Result<FormRequest, String> {
    let path = Path::new(file_name);
    if !path.exists() {
        return Err(format!("File '{}' does not exist", file_name));
    }
    let result = if path.extension().is_some_and(|ext| ext == "json") {
        load_task_from_json(file_name)
    } else {
        load_task_from_text(file_name)
    };
    match &result {
        Ok(_) => info!("task loaded from '{}'", file_name),
        Err(e) => error!("failed to load task from '{}': {}", file_name, e),
    }
    result
}

pub fn load_task_from_json(file_name: &str) -> Result<FormRequest, String> {
    let content = fs::read_to_string(file_name)
        .map_err(|e| format!("Failed to read file '{}': {}", file_name, e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Error parsing JSON task '{}': {}", file_name, e))
}

/// Parses the plain-text SPECIES/TASK format.
pub fn load_task_from_text(file_name: &str) -> Result<FormRequest, String> {
    let content = fs::read_to_string(file_name)
        .map_err(|e| format!("Failed to open file '{}': {}", file_name, e))?;
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let species_at = lines
        .iter()
        .position(|line| line.to_uppercase() == "SPECIES")
        .ok_or_else(|| format!("No 'SPECIES' header found in file '{}'", file_name))?;
    let task_at = lines
        .iter()
        .position(|line| line.to_uppercase() == "TASK")
        .ok_or_else(|| format!("No 'TASK' header found in file '{}'", file_name))?;
    if task_at < species_at {
        return Err(format!(
            "'TASK' section must follow 'SPECIES' in file '{}'",
            file_name
        ));
    }

    let mut species = Vec::new();
    let mut nu = Vec::new();
    let mut n0 = Vec::new();
    let mut mw = Vec::new();
    for line in &lines[species_at + 1..task_at] {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 4 {
            return Err(format!(
                "species row '{}' must have a name and three numeric fields",
                line
            ));
        }
        let split = tokens.len() - 3;
        species.push(tokens[..split].join(" "));
        nu.push(tokens[split].to_string());
        n0.push(tokens[split + 1].to_string());
        mw.push(tokens[split + 2].to_string());
    }
    if species.len() != SPECIES_COUNT {
        return Err(format!(
            "expected {} species rows, found {}",
            SPECIES_COUNT,
            species.len()
        ));
    }

    let key_value = Regex::new(r"^([A-Za-z_]+)\s*:\s*(.*)$").unwrap();
    let mut lim_index = None;
    let mut conversion = None;
    let mut multi_conv = None;
    for line in &lines[task_at + 1..] {
        let Some(cap) = key_value.captures(line) else {
            return Err(format!("cannot parse task line '{}'", line));
        };
        let value = cap[2].trim().to_string();
        match &cap[1] {
            "lim_index" => lim_index = Some(value),
            "conversion" => conversion = Some(value),
            "comparison" | "multi_conv" => multi_conv = Some(value),
            key => warn!("unknown task key '{}' ignored", key),
        }
    }

    Ok(FormRequest {
        species,
        nu,
        n0,
        mw,
        lim_index: lim_index.ok_or("missing 'lim_index' in TASK section")?,
        conversion: conversion.ok_or("missing 'conversion' in TASK section")?,
        multi_conv: multi_conv.ok_or("missing 'comparison' in TASK section")?,
    })
}

/// Writes a commented task template (the default example system) into `dir`.
pub fn create_template_in(dir: &Path) -> std::io::Result<PathBuf> {
    let form = FormRequest::default();
    let mut text = String::from(
        "# StoichEx task file\n\
         # species rows: name  coefficient  initial_feed(mol)  molar_mass(g/mol)\n\
         # the limiting reactant must have a negative coefficient\n\
         SPECIES\n",
    );
    for i in 0..SPECIES_COUNT {
        text.push_str(&format!(
            "{}  {}  {}  {}\n",
            form.species[i], form.nu[i], form.n0[i], form.mw[i]
        ));
    }
    text.push_str(&format!(
        "TASK\n\
         lim_index: {}\n\
         conversion: {}\n\
         comparison: {}\n",
        form.lim_index, form.conversion, form.multi_conv
    ));
    let path = dir.join(TEMPLATE_FILENAME);
    fs::write(&path, text)?;
    info!("task template written to {:?}", path);
    Ok(path)
}

/// Template into the current directory, for the CLI menu.
pub fn create_template() -> std::io::Result<PathBuf> {
    create_template_in(&env::current_dir()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stoichiometry::form_request::process_stoichiometry;
    use tempfile::tempdir;

    #[test]
    fn test_template_round_trip() {
        let dir = tempdir().unwrap();
        let path = create_template_in(dir.path()).unwrap();
        let form = load_task(path.to_str().unwrap()).unwrap();
        assert_eq!(form, FormRequest::default());
        // and the template actually computes
        let (main, _) = process_stoichiometry(&form).unwrap();
        assert_eq!(main.extent, 50.0);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("task.json");
        let json = serde_json::to_string_pretty(&FormRequest::default()).unwrap();
        fs::write(&path, json).unwrap();
        let form = load_task(path.to_str().unwrap()).unwrap();
        assert_eq!(form, FormRequest::default());
    }

    #[test]
    fn test_species_name_with_spaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("task.txt");
        fs::write(
            &path,
            "SPECIES\n\
             carbon monoxide  -1.0  100.0  28.0\n\
             O2  -0.5  80.0  32.0\n\
             CO2  1.0  0.0  44.0\n\
             N2  0.0  10.0  28.0\n\
             TASK\n\
             lim_index: 1\n\
             conversion: 0.25\n\
             comparison: 0.1, 0.9\n",
        )
        .unwrap();
        let form = load_task(path.to_str().unwrap()).unwrap();
        assert_eq!(form.species[0], "carbon monoxide");
        assert_eq!(form.mw[1], "32.0");
        assert_eq!(form.multi_conv, "0.1, 0.9");
    }

    #[test]
    fn test_missing_sections_and_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("task.txt");
        fs::write(&path, "TASK\nlim_index: 1\n").unwrap();
        assert!(load_task(path.to_str().unwrap())
            .unwrap_err()
            .contains("SPECIES"));

        fs::write(
            &path,
            "SPECIES\nA -1 1 1\nB -1 1 1\nC 1 0 1\nD 0 0 1\nTASK\nconversion: 0.5\ncomparison: 0.5\n",
        )
        .unwrap();
        assert!(load_task(path.to_str().unwrap())
            .unwrap_err()
            .contains("lim_index"));
    }

    #[test]
    fn test_wrong_species_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("task.txt");
        fs::write(
            &path,
            "SPECIES\nA -1 1 1\nB -1 1 1\nTASK\nlim_index: 1\nconversion: 0.5\ncomparison: 0.5\n",
        )
        .unwrap();
        assert!(load_task(path.to_str().unwrap())
            .unwrap_err()
            .contains("expected 4 species rows"));
    }

    #[test]
    fn test_missing_file() {
        assert!(load_task("no_such_task.txt").unwrap_err().contains("does not exist"));
    }
}
