pub mod sheet_test;
