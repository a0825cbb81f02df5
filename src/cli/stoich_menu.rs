use crate::Stoichiometry::form_request::{FormRequest, process_stoichiometry};
use crate::Utils::task_file::{create_template, load_task};
use log::{error, info};
use std::io::{self, Write};
use std::path::PathBuf;

pub fn stoich_menu() {
    loop {
        println!("\n=== Stoichiometric Table Problems ===");
        println!("\x1b[33m1. Solve from task file\x1b[0m");
        println!("\x1b[33m2. Auto-discover task files\x1b[0m");
        println!("\x1b[33m3. Run default example data\x1b[0m");
        println!("\x1b[33m4. Generate task template\x1b[0m");
        println!("\x1b[33m0. Back to main menu\x1b[0m");
        print!("\x1b[36mEnter your choice: \x1b[0m");
        io::stdout().flush().unwrap();

        let choice = get_user_input();
        match choice.trim() {
            "1" => solve_from_file(),
            "2" => auto_solve_tasks(),
            "3" => solve_form(&FormRequest::default()),
            "4" => match create_template() {
                Ok(path) => println!("Template generated successfully: {:?}", path),
                Err(e) => println!("Failed to generate template: {}", e),
            },
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn solve_from_file() {
    print!("\x1b[36mEnter file path: \x1b[0m");
    io::stdout().flush().unwrap();
    let file_path = get_user_input();
    let path = PathBuf::from(file_path.trim());

    if path.exists() {
        solve_from_file_dialog(path);
    } else {
        println!("File not found: {}", file_path.trim());
    }
}

fn auto_solve_tasks() {
    use std::{env, fs};

    let current_dir = env::current_dir().expect("Failed to get current directory");
    println!("Searching for task files in: {:?}", current_dir);

    let mut found_files = false;

    if let Ok(entries) = fs::read_dir(&current_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if let Some(filename) = path.file_name() {
                let filename_str = filename.to_string_lossy();
                if filename_str.starts_with("task") && path.is_file() {
                    println!("Found task file: {:?}", path);
                    solve_from_file_dialog(path);
                    found_files = true;
                }
            }
        }
    }

    if !found_files {
        println!("No files starting with 'task' found in current directory.");
    }
}

pub fn solve_from_file_dialog(path: PathBuf) {
    match load_task(&path.to_string_lossy()) {
        Ok(form) => {
            println!("Task file parsed successfully");
            print_form(&form);

            print!("\x1b[36mStart calculation? (y/n): \x1b[0m");
            io::stdout().flush().unwrap();
            let choice = get_user_input();

            if choice.trim().to_lowercase() == "y" || choice.trim().to_lowercase() == "yes" {
                solve_form(&form);
            } else {
                println!("Calculation cancelled. Returning to menu.");
            }
        }
        Err(e) => {
            println!("Error parsing task file: {}", e);
        }
    }
}

/// Computes and prints both tables; errors come back to the menu, never panic.
fn solve_form(form: &FormRequest) {
    match process_stoichiometry(form) {
        Ok((main_table, comp_table)) => {
            main_table.pretty_print();
            comp_table.pretty_print();
            offer_csv_export(&main_table);
        }
        Err(e) => {
            error!("calculation failed: {}", e);
            println!("\x1b[31mError: {}\x1b[0m", e);
        }
    }
}

fn offer_csv_export(main_table: &crate::Stoichiometry::extent_engine::MainResult) {
    print!("\x1b[36mExport main table to CSV? (y/n): \x1b[0m");
    io::stdout().flush().unwrap();
    let choice = get_user_input();
    if choice.trim().to_lowercase() == "y" || choice.trim().to_lowercase() == "yes" {
        let dir = std::env::current_dir().expect("Failed to get current directory");
        match main_table.write_csv(&dir) {
            Ok(path) => {
                info!("main table exported to {:?}", path);
                println!("Exported to {:?}", path);
            }
            Err(e) => println!("Failed to write CSV: {}", e),
        }
    }
}

fn print_form(form: &FormRequest) {
    println!("species:   {:?}", form.species);
    println!("nu:        {:?}", form.nu);
    println!("n0:        {:?}", form.n0);
    println!("mw:        {:?}", form.mw);
    println!("lim_index: {}", form.lim_index);
    println!("conversion: {}", form.conversion);
    println!("comparison: {}", form.multi_conv);
}

fn get_user_input() -> String {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input
}
