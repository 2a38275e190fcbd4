// Typefinder - four-letter personality type questionnaire
// Library exports

pub mod assessment;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod profile;
pub mod report;
