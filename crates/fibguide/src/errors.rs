//! Error handling and exit codes.

use fibguide_core::calculator::FibError;
use fibguide_core::constants::exit_codes;

/// Map a calculation error to its exit code.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::InvalidArgument(_) => exit_codes::ERROR_INVALID_ARGUMENT,
        FibError::ResourceExhausted { .. } | FibError::Capacity(_) => exit_codes::ERROR_RESOURCE,
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
        FibError::Mismatch => exit_codes::ERROR_MISMATCH,
        FibError::Calculation(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Map any application error to its exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FibError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
