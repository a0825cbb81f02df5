//! # Extent-of-Reaction Engine
//!
//! ## Aim
//! This module is the computational core of the crate. It turns a table of
//! four chemical species (stoichiometric coefficient, initial feed, molar
//! mass) plus a limiting-reactant index and a conversion level into the main
//! stoichiometric table (change, final flow, mole fraction, final mass, mass
//! fraction) and a comparison table of final flows across several conversion
//! levels.
//!
//! ## Main Data Structures and Logic
//! - `SpeciesRow`: one species of the reaction system
//! - `ReactionTable`: fixed array of exactly 4 rows, addressed positionally
//! - `CalculationRequest`: table + 1-based limiting index + conversion + comparison conversions
//! - `MainResult` / `ComparisonResult`: the two derived tables
//! - `StoichError`: parse / index / validation failures
//!
//! ## Key Methods
//! - `parse_table()`: four parallel string columns -> `ReactionTable`
//! - `parse_conversions()`: comma-separated text -> `Vec<f64>`
//! - `compute()`: the whole calculation; pure function of its inputs
//!
//! ## Interesting Features
//! - A zero total of final flows is NOT an error: the mole/mass fractions
//!   become non-finite (NaN or inf) and are carried through to presentation
//! - A zero initial feed of the limiting reactant gives xi = 0 at any
//!   conversion, which is likewise a legal result

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The system is fixed at four species; the input form has four rows.
pub const SPECIES_COUNT: usize = 4;

/// error types of the stoichiometry engine
#[derive(Debug, Error, PartialEq)]
pub enum StoichError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Index error: limiting reactant index {0} is outside the valid range 1..=4")]
    IndexError(i64),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// One chemical species of the reaction system.
/// The sign convention for the coefficient: negative = reactant,
/// positive = product, zero = inert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRow {
    pub name: String,
    /// stoichiometric coefficient nu
    pub coefficient: f64,
    /// initial feed n0, mol. Negative feeds are not rejected
    pub initial_feed: f64,
    /// g/mol. Expected positive but not enforced
    pub molar_mass: f64,
}

/// Row order is meaningful: the limiting reactant is selected by position.
pub type ReactionTable = [SpeciesRow; SPECIES_COUNT];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub table: ReactionTable,
    /// 1-based index into the table
    pub lim_index: usize,
    /// intended domain [0,1], deliberately not clamped
    pub conversion: f64,
    pub comparison_conversions: Vec<f64>,
}

/// One row of the main stoichiometric table: the input species extended with
/// the five derived columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainRow {
    pub species: SpeciesRow,
    /// nu * xi, mol
    pub change: f64,
    /// n0 + change, mol
    pub final_flow: f64,
    pub mole_fraction: f64,
    /// final_flow * molar_mass, g
    pub final_mass: f64,
    pub mass_fraction: f64,
}

/// The main stoichiometric table at the requested conversion. Computed fresh
/// per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainResult {
    pub conversion: f64,
    /// extent of reaction xi = n0_lim * X / |nu_lim|
    pub extent: f64,
    pub rows: [MainRow; SPECIES_COUNT],
}

/// Final flows of every species at each of the comparison conversions.
/// The numeric block is a 4 x k matrix: row per species, column per
/// conversion level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub species: Vec<String>,
    pub initial_feed: Vec<f64>,
    pub conversions: Vec<f64>,
    pub final_flows: DMatrix<f64>,
}

impl ComparisonResult {
    /// Column headers carry the literal conversion value; rounding is left to
    /// the rendering layer.
    pub fn column_labels(&self) -> Vec<String> {
        self.conversions.iter().map(|x| format!("X = {}", x)).collect()
    }
}

/// Parses one numeric form field, naming the field and the offending token on
/// failure.
pub fn parse_real(field: &str, raw: &str) -> Result<f64, StoichError> {
    raw.trim().parse::<f64>().map_err(|_| {
        StoichError::ParseError(format!("{}: '{}' is not a valid number", field, raw.trim()))
    })
}

/// Builds a `ReactionTable` from the four parallel string columns of the
/// input form. All four sequences must have length 4; every numeric field
/// must parse as a real number; species names must be non-empty.
pub fn parse_table(
    species: &[String],
    coeff_strs: &[String],
    feed_strs: &[String],
    mass_strs: &[String],
) -> Result<ReactionTable, StoichError> {
    for (column, len) in [
        ("species", species.len()),
        ("coefficient", coeff_strs.len()),
        ("initial feed", feed_strs.len()),
        ("molar mass", mass_strs.len()),
    ] {
        if len != SPECIES_COUNT {
            return Err(StoichError::ParseError(format!(
                "{} column has {} entries, expected {}",
                column, len, SPECIES_COUNT
            )));
        }
    }
    let mut rows = Vec::with_capacity(SPECIES_COUNT);
    for i in 0..SPECIES_COUNT {
        let name = species[i].trim();
        if name.is_empty() {
            return Err(StoichError::ParseError(format!(
                "species name in row {} is empty",
                i + 1
            )));
        }
        rows.push(SpeciesRow {
            name: name.to_string(),
            coefficient: parse_real(&format!("coefficient, row {}", i + 1), &coeff_strs[i])?,
            initial_feed: parse_real(&format!("initial feed, row {}", i + 1), &feed_strs[i])?,
            molar_mass: parse_real(&format!("molar mass, row {}", i + 1), &mass_strs[i])?,
        });
    }
    let table: ReactionTable = rows
        .try_into()
        .expect("row count checked above");
    Ok(table)
}

/// Splits a comma-separated list of conversion levels. Every token must parse
/// as a real number; an empty token (doubled or trailing comma) is a parse
/// error, never silently skipped.
pub fn parse_conversions(raw: &str) -> Result<Vec<f64>, StoichError> {
    raw.split(',')
        .map(|token| parse_real("comparison conversion", token))
        .collect()
}

/// Runs the whole calculation. Pure function: no side effects, identical
/// inputs give identical outputs.
pub fn compute(
    request: &CalculationRequest,
) -> Result<(MainResult, ComparisonResult), StoichError> {
    let table = &request.table;
    if request.lim_index < 1 || request.lim_index > SPECIES_COUNT {
        return Err(StoichError::IndexError(request.lim_index as i64));
    }
    let row_lim = &table[request.lim_index - 1];
    if row_lim.coefficient >= 0.0 {
        return Err(StoichError::ValidationError(
            "the limiting reactant must have a negative coefficient".to_string(),
        ));
    }
    let nu_lim_abs = row_lim.coefficient.abs();
    let n0_lim = row_lim.initial_feed;
    let xi = n0_lim * request.conversion / nu_lim_abs;

    let final_flows: Vec<f64> = table
        .iter()
        .map(|row| row.initial_feed + row.coefficient * xi)
        .collect();
    let final_masses: Vec<f64> = table
        .iter()
        .zip(&final_flows)
        .map(|(row, flow)| flow * row.molar_mass)
        .collect();
    // a zero total is not an error: the fractions become NaN or inf
    let total_flow: f64 = final_flows.iter().sum();
    let total_mass: f64 = final_masses.iter().sum();

    let rows: [MainRow; SPECIES_COUNT] = std::array::from_fn(|i| MainRow {
        species: table[i].clone(),
        change: table[i].coefficient * xi,
        final_flow: final_flows[i],
        mole_fraction: final_flows[i] / total_flow,
        final_mass: final_masses[i],
        mass_fraction: final_masses[i] / total_mass,
    });
    let main = MainResult {
        conversion: request.conversion,
        extent: xi,
        rows,
    };

    let k = request.comparison_conversions.len();
    let mut flows = DMatrix::zeros(SPECIES_COUNT, k);
    for (j, &x) in request.comparison_conversions.iter().enumerate() {
        let xi_x = n0_lim * x / nu_lim_abs;
        for i in 0..SPECIES_COUNT {
            flows[(i, j)] = table[i].initial_feed + table[i].coefficient * xi_x;
        }
    }
    let comp = ComparisonResult {
        species: table.iter().map(|row| row.name.clone()).collect(),
        initial_feed: table.iter().map(|row| row.initial_feed).collect(),
        conversions: request.comparison_conversions.clone(),
        final_flows: flows,
    };
    Ok((main, comp))
}
