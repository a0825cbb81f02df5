use super::stoich_menu::stoich_menu;
use crate::Examples::stoichiometry_examples::stoich_examples;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => stoich_menu(),
            "2" => examples_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options (1, 2, 0)

Cyan (\x1b[36m) - "Enter your choice:" prompt

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Wellcome to StoichEx: extent-of-reaction tables, final flows,\n
    mole and mass fractions at a chosen conversion of the limiting reactant \n
    (c) Gleb E. Zaslavsky, 2025 \n \x1b[0m"
    );
    println!("\x1b[33m1. Stoichiometric Table Problems\x1b[0m");
    println!("\x1b[33m2. Examples\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    io::stdout().flush().unwrap();
}

fn examples_menu() {
    println!("\n=== Examples ===");
    println!("\x1b[33m0. Default system, both tables\x1b[0m");
    println!("\x1b[33m1. Zero total flow (NaN fractions)\x1b[0m");
    println!("\x1b[33m2. Comparison table across conversions\x1b[0m");
    println!("\x1b[33m3. CSV and JSON export\x1b[0m");
    println!("\x1b[33m4. Task file template round trip\x1b[0m");
    print!("\x1b[36mEnter example number: \x1b[0m");
    io::stdout().flush().unwrap();

    let choice = get_user_input();
    match choice.trim().parse::<usize>() {
        Ok(task) => stoich_examples(task),
        Err(_) => println!("Invalid choice. Please try again."),
    }
}

fn get_user_input() -> String {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input
}
