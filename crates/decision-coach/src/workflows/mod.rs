pub mod decision;
pub mod options_csv;
