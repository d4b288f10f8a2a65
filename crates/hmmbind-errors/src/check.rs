//! Call-site helpers for turning native return values into [`Result`]s.

use std::ptr::NonNull;

use crate::error::{BindingError, Result};
use crate::status::Status;

/// Check the status returned by a native call.
///
/// `eslOK` maps to `Ok(())`; any other code becomes
/// [`BindingError::Unexpected`] naming `function`.
pub fn check(code: i32, function: &str) -> Result<()> {
    if code == Status::Ok.code() {
        return Ok(());
    }
    tracing::debug!(code, function, "native call returned unexpected status");
    Err(BindingError::unexpected(code, function))
}

/// Check a pointer returned by a native allocator.
pub fn check_alloc<T>(ptr: *mut T, ctype: &str) -> Result<NonNull<T>> {
    NonNull::new(ptr).ok_or_else(|| {
        tracing::debug!(ctype, "native allocation returned null");
        BindingError::allocation(ctype)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn ok_status_passes() {
        assert!(check(0, "esl_sq_Create").is_ok());
    }

    #[test]
    fn failing_status_is_unexpected() {
        let err = check(5, "p7_hmm_Create").unwrap_err();
        assert_eq!(err, BindingError::unexpected(5, "p7_hmm_Create"));
        assert_eq!(err.status(), Some(Status::Mem));
    }

    #[test]
    fn unknown_status_is_unexpected() {
        let err = check(1234, "p7_Pipeline").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(err.to_string().ends_with("unknown error code"));
    }

    #[test]
    fn null_pointer_is_allocation_error() {
        let err = check_alloc(std::ptr::null_mut::<u8>(), "ESL_SQ").unwrap_err();
        assert_eq!(err, BindingError::allocation("ESL_SQ"));
    }

    #[test]
    fn non_null_pointer_passes() {
        let mut value = 42u32;
        let ptr = check_alloc(&mut value as *mut u32, "u32").unwrap();
        assert_eq!(ptr.as_ptr(), &mut value as *mut u32);
    }
}
