pub mod file_selector;
