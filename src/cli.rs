pub mod cli_main;
pub mod stoich_menu;
