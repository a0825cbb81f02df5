/// The input form has a fixed shape: four species rows (name, coefficient,
/// initial feed, molar mass), the 1-based index of the limiting reactant, the
/// conversion level X and a comma-separated list of comparison conversions.
/// Everything arrives as text and is parsed here before any computation;
/// nothing is ever silently defaulted.
use super::extent_engine::{
    CalculationRequest, ComparisonResult, MainResult, StoichError, compute, parse_conversions,
    parse_real, parse_table,
};
use serde::{Deserialize, Serialize};

/// Raw form fields exactly as submitted. The transport layer (web form, CLI
/// prompt, task file) fills this in and echoes it back to the user; it is a
/// per-request value, never process state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRequest {
    pub species: Vec<String>,
    pub nu: Vec<String>,
    pub n0: Vec<String>,
    pub mw: Vec<String>,
    pub lim_index: String,
    pub conversion: String,
    pub multi_conv: String,
}

impl Default for FormRequest {
    /// The example system the input form ships pre-populated with:
    /// A + 2B -> C with inert D, A limiting, X = 0.5.
    fn default() -> Self {
        let to_vec = |vals: [&str; 4]| vals.iter().map(|s| s.to_string()).collect();
        FormRequest {
            species: to_vec(["A (Reactant)", "B (Reactant)", "C (Product)", "D (Inert)"]),
            nu: to_vec(["-1.0", "-2.0", "1.0", "0.0"]),
            n0: to_vec(["100.0", "250.0", "0.0", "50.0"]),
            mw: to_vec(["16.0", "32.0", "44.0", "28.0"]),
            lim_index: "1".to_string(),
            conversion: "0.5".to_string(),
            multi_conv: "0.2, 0.5, 0.8, 0.9".to_string(),
        }
    }
}

impl FormRequest {
    /// Parses every raw field into a typed `CalculationRequest`.
    ///
    /// An unparseable limiting index is a `ParseError`; an integer outside
    /// 1..=4 is an `IndexError` already here, so the caller never holds a
    /// request with an unusable index.
    pub fn to_request(&self) -> Result<CalculationRequest, StoichError> {
        let table = parse_table(&self.species, &self.nu, &self.n0, &self.mw)?;
        let lim_raw = self.lim_index.trim();
        let lim_index: i64 = lim_raw.parse().map_err(|_| {
            StoichError::ParseError(format!(
                "limiting reactant index: '{}' is not a valid integer",
                lim_raw
            ))
        })?;
        if lim_index < 1 || lim_index > 4 {
            return Err(StoichError::IndexError(lim_index));
        }
        let conversion = parse_real("conversion", &self.conversion)?;
        let comparison_conversions = parse_conversions(&self.multi_conv)?;
        Ok(CalculationRequest {
            table,
            lim_index: lim_index as usize,
            conversion,
            comparison_conversions,
        })
    }
}

/// Parse the submitted form and compute both result tables in one call. This
/// is what a form handler runs per submission, and what the CSV export runs
/// again on the resubmitted fields - results are recomputed, never cached.
pub fn process_stoichiometry(
    form: &FormRequest,
) -> Result<(MainResult, ComparisonResult), StoichError> {
    compute(&form.to_request()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_parses() {
        let request = FormRequest::default().to_request().unwrap();
        assert_eq!(request.lim_index, 1);
        assert_eq!(request.conversion, 0.5);
        assert_eq!(request.comparison_conversions, vec![0.2, 0.5, 0.8, 0.9]);
        assert_eq!(request.table[0].name, "A (Reactant)");
        assert_eq!(request.table[1].coefficient, -2.0);
        assert_eq!(request.table[3].initial_feed, 50.0);
    }

    #[test]
    fn test_bad_numeric_field() {
        let mut form = FormRequest::default();
        form.n0[2] = "zero".to_string();
        let err = form.to_request().unwrap_err();
        assert!(matches!(err, StoichError::ParseError(_)));
        assert!(err.to_string().contains("zero"));
    }

    #[test]
    fn test_bad_lim_index_text() {
        let mut form = FormRequest::default();
        form.lim_index = "first".to_string();
        assert!(matches!(
            form.to_request().unwrap_err(),
            StoichError::ParseError(_)
        ));
    }

    #[test]
    fn test_negative_lim_index_is_out_of_range() {
        let mut form = FormRequest::default();
        form.lim_index = "-1".to_string();
        assert_eq!(form.to_request().unwrap_err(), StoichError::IndexError(-1));
    }

    #[test]
    fn test_process_recomputes_identically() {
        // the CSV export path resubmits the same fields and recomputes
        let form = FormRequest::default();
        let first = process_stoichiometry(&form).unwrap();
        let second = process_stoichiometry(&form).unwrap();
        assert_eq!(first, second);
    }
}
