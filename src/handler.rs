//! Diagnostic reporting for failed OpenCL calls.
//!
//! Two styles are offered. [`report`] writes the diagnostic line and lets the
//! error keep propagating, for callers that recover or unwind on their own.
//! [`check`] and [`or_exit`] write the same line and terminate the process,
//! for tools where any runtime failure is final.

use std::process;

use opencl3::error_codes::CL_SUCCESS;
use opencl3::types::cl_int;

use crate::error::{ClutilError, ClutilResult};
use crate::status::status_label;

/// The single diagnostic line written for a failed call.
fn diagnostic(operation: &str, status: cl_int) -> String {
    format!(
        "ERROR: {} {} ({})",
        operation,
        status_label(status),
        status
    )
}

/// Writes a diagnostic line for `err` to the error stream.
///
/// Does not terminate the process. The caller keeps the error and decides
/// what to do with it.
pub fn report(err: &ClutilError) {
    match err.status() {
        Some(status) => eprintln!("ERROR: {} ({})", err, status),
        None => eprintln!("ERROR: {}", err),
    }
}

/// Checks a raw status code returned by an OpenCL call.
///
/// `CL_SUCCESS` returns immediately with no effect. Any other code writes a
/// diagnostic line naming `operation` to the error stream and terminates the
/// process with a failure exit status.
pub fn check(status: cl_int, operation: &str) {
    if status == CL_SUCCESS {
        return;
    }

    eprintln!("{}", diagnostic(operation, status));
    process::exit(1);
}

/// Unwraps `result`, or writes a diagnostic line and terminates the process
/// with a failure exit status.
pub fn or_exit<T>(result: ClutilResult<T>, operation: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            match err.status() {
                Some(status) => eprintln!("ERROR: {} {} ({})", operation, err, status),
                None => eprintln!("ERROR: {} {}", operation, err),
            }
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod test {
    use super::{check, diagnostic};
    use opencl3::error_codes::{CL_DEVICE_NOT_FOUND, CL_SUCCESS};

    #[test]
    fn test_diagnostic_line() {
        assert_eq!(
            diagnostic("clGetPlatformIDs", CL_DEVICE_NOT_FOUND),
            "ERROR: clGetPlatformIDs CL_DEVICE_NOT_FOUND (-1)"
        );
        assert_eq!(
            diagnostic("clBuildProgram", -9999),
            "ERROR: clBuildProgram CL_UNKNOWN_ERROR (-9999)"
        );
    }

    #[test]
    fn test_check_success_is_a_no_op() {
        // Must return without terminating the test process.
        check(CL_SUCCESS, "clGetPlatformIDs");
    }
}
