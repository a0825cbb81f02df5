use super::extent_engine::{ComparisonResult, MainResult};
use prettytable::{Cell, Row, Table};
use std::fs;
use std::path::{Path, PathBuf};

/// The download endpoint always serves the main table under this name.
pub const CSV_EXPORT_FILENAME: &str = "stoichiometry_results.csv";

pub const MAIN_TABLE_HEADER: [&str; 9] = [
    "Species",
    "Coefficient (nu)",
    "Initial Feed (mol)",
    "Molar Mass (g/mol)",
    "Change (mol)",
    "Final Flow (mol)",
    "Mole Fraction",
    "Final Mass (g)",
    "Mass Fraction",
];

// Minimal quoting: fields with commas, quotes or newlines get wrapped,
// inner quotes doubled.
fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

impl MainResult {
    /// Markup table of the main result. Float columns are rounded to 3
    /// decimal places here and only here; the stored values keep full
    /// precision. Non-finite fractions from a zero total print as NaN/inf.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(Row::new(
            MAIN_TABLE_HEADER.iter().map(|h| Cell::new(h)).collect(),
        ));
        for row in &self.rows {
            table.add_row(Row::new(vec![
                Cell::new(&row.species.name),
                Cell::new(&format!("{:.3}", row.species.coefficient)),
                Cell::new(&format!("{:.3}", row.species.initial_feed)),
                Cell::new(&format!("{:.3}", row.species.molar_mass)),
                Cell::new(&format!("{:.3}", row.change)),
                Cell::new(&format!("{:.3}", row.final_flow)),
                Cell::new(&format!("{:.3}", row.mole_fraction)),
                Cell::new(&format!("{:.3}", row.final_mass)),
                Cell::new(&format!("{:.3}", row.mass_fraction)),
            ]));
        }
        table
    }

    /// Prints the main stoichiometric table to the console
    pub fn pretty_print(&self) {
        println!(
            "__________main stoichiometric table at X = {}__________",
            self.conversion
        );
        self.to_table().printstd();
        println!("_____________________________________________________________");
    }

    pub fn to_markup(&self) -> String {
        self.to_table().to_string()
    }

    /// Comma-separated text with a header row and no index column. Values are
    /// written at full precision; rounding belongs to the markup tables.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(&MAIN_TABLE_HEADER.map(csv_field).join(","));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&format!(
                "{},{},{},{},{},{},{},{},{}\n",
                csv_field(&row.species.name),
                row.species.coefficient,
                row.species.initial_feed,
                row.species.molar_mass,
                row.change,
                row.final_flow,
                row.mole_fraction,
                row.final_mass,
                row.mass_fraction,
            ));
        }
        out
    }

    /// Writes the CSV export into `dir` under the fixed filename.
    pub fn write_csv(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(CSV_EXPORT_FILENAME);
        fs::write(&path, self.to_csv())?;
        Ok(path)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl ComparisonResult {
    /// Markup table of final flows across the comparison conversions, one
    /// column per level, rounded to 2 decimal places at render time.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        let mut header = vec![Cell::new("Species"), Cell::new("Initial Feed")];
        for label in self.column_labels() {
            header.push(Cell::new(&label));
        }
        table.add_row(Row::new(header));
        for i in 0..self.species.len() {
            let mut row = vec![
                Cell::new(&self.species[i]),
                Cell::new(&format!("{:.2}", self.initial_feed[i])),
            ];
            for j in 0..self.conversions.len() {
                row.push(Cell::new(&format!("{:.2}", self.final_flows[(i, j)])));
            }
            table.add_row(Row::new(row));
        }
        table
    }

    /// Prints the comparison table to the console
    pub fn pretty_print(&self) {
        println!("__________final flows at varying conversions__________");
        self.to_table().printstd();
        println!("_____________________________________________________________");
    }

    pub fn to_markup(&self) -> String {
        self.to_table().to_string()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::Stoichiometry::form_request::{FormRequest, process_stoichiometry};
    use crate::Stoichiometry::table_output::{CSV_EXPORT_FILENAME, csv_field};
    use tempfile::tempdir;

    #[test]
    fn test_csv_shape() {
        let (main, _) = process_stoichiometry(&FormRequest::default()).unwrap();
        let csv = main.to_csv();
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines.len(), 5); // header + 4 species rows
        assert!(lines[0].starts_with("Species,Coefficient (nu)"));
        // no row index column
        assert!(lines[1].starts_with("A (Reactant),"));
        // full precision survives into the CSV
        assert!(lines[1].contains("0.16666666666666666"));
    }

    #[test]
    fn test_markup_is_rounded() {
        let (main, comp) = process_stoichiometry(&FormRequest::default()).unwrap();
        let markup = main.to_markup();
        assert!(markup.contains("0.167")); // mole fraction of A, 3 dp
        assert!(!markup.contains("0.16666"));
        let comp_markup = comp.to_markup();
        assert!(comp_markup.contains("X = 0.2"));
        assert!(comp_markup.contains("X = 0.9"));
    }

    #[test]
    fn test_write_csv_fixed_filename() {
        let (main, _) = process_stoichiometry(&FormRequest::default()).unwrap();
        let dir = tempdir().unwrap();
        let path = main.write_csv(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), CSV_EXPORT_FILENAME);
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, main.to_csv());
    }

    #[test]
    fn test_nonfinite_fractions_render() {
        // feeds chosen so every final flow is zero: fractions are 0/0
        let mut form = FormRequest::default();
        form.n0 = vec!["1.0", "2.0", "-1.0", "0.0"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        form.conversion = "1.0".to_string();
        let (main, _) = process_stoichiometry(&form).unwrap();
        let markup = main.to_markup();
        assert!(markup.contains("NaN"));
        // CSV keeps them too, no panic anywhere
        assert!(main.to_csv().contains("NaN"));
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
