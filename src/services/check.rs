//! Integrity marker scan over the plain-text output of the check subcommand

use std::io::{BufRead, BufReader};

const NO_ERRORS_MARKER: &str = "no errors were found";

/// Return true if any line of `output`, trimmed, equals the success marker.
#[must_use]
pub fn extract_check_info(output: &[u8]) -> bool {
    let reader = BufReader::new(output);
    for line in reader.split(b'\n') {
        let Ok(line) = line else {
            return false;
        };
        if String::from_utf8_lossy(&line).trim() == NO_ERRORS_MARKER {
            return true;
        }
    }

    log::debug!("Check output did not contain the success marker");
    false
}
