pub fn stoich_examples(task: usize) {
    //
    match task {
        0 => {
            // MAIN STOICHIOMETRIC TABLE for the default system A + 2B -> C with inert D
            use crate::Stoichiometry::form_request::{FormRequest, process_stoichiometry};
            let form = FormRequest::default();
            let (main_table, comp_table) = process_stoichiometry(&form).unwrap();
            // xi = 100 * 0.5 / |-1| = 50
            assert_eq!(main_table.extent, 50.0);
            let flows: Vec<f64> = main_table.rows.iter().map(|r| r.final_flow).collect();
            assert_eq!(flows, vec![50.0, 150.0, 50.0, 50.0]);
            main_table.pretty_print();
            comp_table.pretty_print();
        }
        1 => {
            // ZERO TOTAL FLOW: fractions become NaN and are printed as such
            use crate::Stoichiometry::extent_engine::{CalculationRequest, SpeciesRow, compute};
            let species = |name: &str, coefficient: f64, initial_feed: f64, molar_mass: f64| {
                SpeciesRow {
                    name: name.to_string(),
                    coefficient,
                    initial_feed,
                    molar_mass,
                }
            };
            let request = CalculationRequest {
                table: [
                    species("A", -1.0, 1.0, 16.0),
                    species("B", -2.0, 2.0, 32.0),
                    species("C", 1.0, -1.0, 44.0),
                    species("D", 0.0, 0.0, 28.0),
                ],
                lim_index: 1,
                conversion: 1.0,
                comparison_conversions: vec![0.5, 1.0],
            };
            let (main_table, _) = compute(&request).unwrap();
            assert!(main_table.rows[0].mole_fraction.is_nan());
            main_table.pretty_print();
            println!("total final flow is zero, fractions are 0/0");
        }
        2 => {
            // COMPARISON TABLE across conversions; the X = 0.5 column repeats the main table
            use crate::Stoichiometry::form_request::{FormRequest, process_stoichiometry};
            let (main_table, comp_table) = process_stoichiometry(&FormRequest::default()).unwrap();
            let j = comp_table
                .conversions
                .iter()
                .position(|&x| x == 0.5)
                .unwrap();
            for (i, row) in main_table.rows.iter().enumerate() {
                assert_eq!(comp_table.final_flows[(i, j)], row.final_flow);
            }
            println!("column labels: {:?}", comp_table.column_labels());
            comp_table.pretty_print();
        }
        3 => {
            // EXPORT: CSV with the fixed filename and JSON of both tables
            use crate::Stoichiometry::form_request::{FormRequest, process_stoichiometry};
            let (main_table, comp_table) = process_stoichiometry(&FormRequest::default()).unwrap();
            let dir = std::env::current_dir().unwrap();
            let path = main_table.write_csv(&dir).unwrap();
            println!("main table exported to {:?}", path);
            println!("{}", main_table.to_json().unwrap());
            println!("{}", comp_table.to_json().unwrap());
        }
        4 => {
            // TASK FILE: generate a template and solve it
            use crate::Stoichiometry::form_request::process_stoichiometry;
            use crate::Utils::task_file::{TaskFile, create_template};
            let path = create_template().unwrap();
            let form = TaskFile::new(path.to_string_lossy().to_string())
                .load()
                .unwrap();
            let (main_table, comp_table) = process_stoichiometry(&form).unwrap();
            main_table.pretty_print();
            comp_table.pretty_print();
        }
        _ => println!("no such example task: {}", task),
    }
}
