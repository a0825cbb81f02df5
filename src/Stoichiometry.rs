/// The module takes as input a table of four chemical species (name,
/// stoichiometric coefficient, initial feed, molar mass), the 1-based index
/// of the limiting reactant, a conversion level X and a list of comparison
/// conversions, and produces the following data:
/// 1) the main stoichiometric table: change, final flow, mole fraction,
///    final mass and mass fraction for every species at the chosen X
/// 2) a comparison table of final flows, one column per comparison conversion
///
/// The computation goes through the extent of reaction: xi = n0_lim * X / |nu_lim|,
/// so the limiting reactant must have a negative coefficient - this is checked
/// and violation is a hard error, not a computed result.
///
///  # Examples
/// ```
/// use StoichEx::Stoichiometry::form_request::{FormRequest, process_stoichiometry};
/// let form = FormRequest::default();
/// let (main_table, comp_table) = process_stoichiometry(&form).unwrap();
/// main_table.pretty_print();
/// comp_table.pretty_print();
/// ```
pub mod extent_engine;
/// The boundary between the raw form fields and the typed engine: all numeric
/// fields arrive as text and are parsed before use. Holds the default example
/// system the input form ships pre-populated with.
pub mod form_request;
/// Rendering of the result records: pretty console tables, markup table
/// strings (rounded at render time only), CSV with a header row and the fixed
/// export filename, JSON.
pub mod table_output;
