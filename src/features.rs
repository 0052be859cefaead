//! Contains code for handling the Cargo features used to compile this crate.

use std::io::{stdout,stderr,Write};

#[cfg(any(feature = "tolerance_10_percent", not(any(feature = "tolerance_25_percent"))))]
/// acceptable proportional variance (acceptable measurement errors) when classifying the observed growth of two passes
pub const PERCENT_TOLERANCE: f64 = 0.10;

#[cfg(all(feature = "tolerance_25_percent", not(feature = "tolerance_10_percent")))]
/// acceptable proportional variance (acceptable measurement errors) when classifying the observed growth of two passes
pub const PERCENT_TOLERANCE: f64 = 0.25;

#[cfg(all(feature = "report_stdout", not(feature = "no_report")))]
/// Function to output an `&str` -- used to sink simulation & growth check reports -- controlled by the crate's features (stdout, stderr, no_report)
pub const OUTPUT: fn(&str) = stdout_write;

#[cfg(all(feature = "report_stderr", not(feature = "report_stdout"), not(feature = "no_report")))]
/// Function to output an `&str` -- used to sink simulation & growth check reports -- controlled by the crate's features (stdout, stderr, no_report)
pub const OUTPUT: fn(&str) = stderr_write;

#[cfg(any(feature = "no_report", not(any(feature = "report_stdout", feature = "report_stderr"))))]
/// Function to output an `&str` -- used to sink simulation & growth check reports -- controlled by the crate's features (stdout, stderr, no_report)
pub const OUTPUT: fn(&str) = null_write;


#[allow(dead_code)]
fn stdout_write(buf: &str) {
    sync_outputs();
    print!("{}", buf);
    sync_outputs();
}

#[allow(dead_code)]
fn stderr_write(buf: &str) {
    sync_outputs();
    eprint!("{}", buf);
    sync_outputs();
}

/// Flushes both stdout and stderr so the next output will be in sync with everything that came before
#[allow(dead_code)]
fn sync_outputs() {
    _ = stdout().flush();
    _ = stderr().flush();
}

#[allow(dead_code)]
fn null_write(_buf: &str) {
    // release compilations will optimize out this call for '_buf' is not used
}
