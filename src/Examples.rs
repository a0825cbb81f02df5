pub mod stoichiometry_examples;
