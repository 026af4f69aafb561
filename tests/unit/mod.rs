pub mod catalog_tests;
pub mod transcript_tests;
