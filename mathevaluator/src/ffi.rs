//! C ABI for loading the evaluator as a shared library.
//!
//! Both entry points write the formatted result into a caller supplied
//! buffer, truncated to fit and always NUL terminated, and return 1 on
//! success or 0 (with an empty string) when the expression is malformed.

use crate::result::{EvalResult, DEFAULT_PRECISION};
use crate::session::Session;
use log::warn;
use std::collections::HashMap;
use std::ffi::{c_char, c_int, CStr};
use std::sync::{LazyLock, Mutex};

// Sessions for evaluate_state, created on first use of an id.
static SESSIONS: LazyLock<Mutex<HashMap<c_int, Session>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// # Safety
///
/// `expression` must be null or point to a NUL terminated string, and
/// `result` must be valid for writes of `length` bytes.
#[no_mangle]
pub unsafe extern "C" fn evaluate(
    expression: *const c_char,
    result: *mut c_char,
    length: c_int,
) -> c_int {
    let outcome = match read_expression(expression) {
        Some(expr) => crate::evaluate(expr, None),
        None => EvalResult::Malformed,
    };
    write_result(outcome, result, length)
}

/// Like [`evaluate`], against the session numbered `id`.
///
/// # Safety
///
/// Same requirements as [`evaluate`].
#[no_mangle]
pub unsafe extern "C" fn evaluate_state(
    expression: *const c_char,
    result: *mut c_char,
    length: c_int,
    id: c_int,
) -> c_int {
    let outcome = match read_expression(expression) {
        Some(expr) => {
            // a panic while holding the lock cannot leave a session half
            // updated, so a poisoned map is still usable
            let mut sessions = SESSIONS.lock().unwrap_or_else(|e| e.into_inner());
            sessions.entry(id).or_default().evaluate(expr)
        }
        None => EvalResult::Malformed,
    };
    write_result(outcome, result, length)
}

unsafe fn read_expression<'a>(expression: *const c_char) -> Option<&'a str> {
    if expression.is_null() {
        return None;
    }
    match CStr::from_ptr(expression).to_str() {
        Ok(expr) => Some(expr),
        Err(e) => {
            warn!("expression is not valid utf-8: {}", e);
            None
        }
    }
}

unsafe fn write_result(outcome: EvalResult, result: *mut c_char, length: c_int) -> c_int {
    let text = match outcome {
        EvalResult::Value(_) => outcome.to_string_with(DEFAULT_PRECISION),
        EvalResult::Malformed => String::new(),
    };
    if !result.is_null() && length > 0 {
        let n = text.len().min(length as usize - 1);
        std::ptr::copy_nonoverlapping(text.as_ptr() as *const c_char, result, n);
        *result.add(n) = 0;
    }
    match outcome {
        EvalResult::Value(_) => 1,
        EvalResult::Malformed => 0,
    }
}
