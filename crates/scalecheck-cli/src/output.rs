//! JSON output formatting

use scalecheck_core::ScaleValidationResult;
use serde::Serialize;

#[derive(Serialize)]
struct ValidationOutput<'a> {
    status: &'static str,
    input_file: &'a str,
    scale: &'a str,
    processing_time_seconds: f64,
    #[serde(flatten)]
    result: &'a ScaleValidationResult,
}

#[derive(Serialize)]
struct ErrorOutput<'a> {
    status: &'static str,
    input_file: &'a str,
    error: String,
}

/// Print a successful validation as JSON
pub fn print_validation(
    input_file: &str,
    scale: &str,
    result: &ScaleValidationResult,
    processing_time_seconds: f64,
) {
    let output = ValidationOutput {
        status: "success",
        input_file,
        scale,
        processing_time_seconds,
        result,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }
}

/// Print a validation that could not run as JSON
pub fn print_failure(input_file: &str, error: &dyn std::fmt::Display) {
    let output = ErrorOutput {
        status: "error",
        input_file,
        error: error.to_string(),
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing failure: {}", e),
    }
}

/// Print the human-readable feedback block to stderr
pub fn print_feedback(result: &ScaleValidationResult) {
    log::info!("Accuracy {:.1}%", result.accuracy * 100.0);
    eprint!("{}", result.feedback);
}
