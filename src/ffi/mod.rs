//! C ABI for native widget hosts.
//!
//! The host passes its preference snapshot as a JSON object and receives the
//! [`ViewUpdate`](crate::render::ViewUpdate) JSON for one widget instance.
//! Strings returned by this module must be released with [`ffi_string_free`].

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::ptr;
use std::sync::OnceLock;

use crate::config::WidgetConfig;
use crate::errors::WidgetError;
use crate::preferences::MemoryPreferences;
use crate::render::{ViewUpdate, WidgetRenderer};

/// Semantic version of the Rust core (mirrors `Cargo.toml`).
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Semantic version of the FFI surface. Bumps when ABI/contract changes.
pub const FFI_VERSION: &str = "0.1.0";

/// Returns the core semantic version as a static C string.
#[no_mangle]
pub extern "C" fn ffi_core_version() -> *const c_char {
    static CORE: OnceLock<CString> = OnceLock::new();
    CORE.get_or_init(|| CString::new(CORE_VERSION).unwrap_or_default())
        .as_ptr()
}

/// Returns the FFI interface semantic version as a static C string.
#[no_mangle]
pub extern "C" fn ffi_version() -> *const c_char {
    static FFI: OnceLock<CString> = OnceLock::new();
    FFI.get_or_init(|| CString::new(FFI_VERSION).unwrap_or_default())
        .as_ptr()
}

/// Renders one widget instance.
///
/// `config_json` may be null to use the default configuration. On failure the
/// return value is null and, when `out_error` is non-null, it receives an
/// owned error message.
///
/// # Safety
/// `prefs_json` and a non-null `config_json` must point to NUL-terminated
/// strings; `out_error` must be null or valid for a pointer write.
#[no_mangle]
pub unsafe extern "C" fn ffi_widget_render(
    widget_id: c_int,
    prefs_json: *const c_char,
    config_json: *const c_char,
    out_error: *mut *mut c_char,
) -> *mut c_char {
    clear_error(out_error);
    match render_json(widget_id, prefs_json, config_json) {
        Ok(json) => into_c_string(json),
        Err(err) => {
            tracing::warn!(widget_id, error = %err, "ffi render failed");
            write_error(out_error, &err.to_string());
            ptr::null_mut()
        }
    }
}

/// Releases a string previously returned by this module.
///
/// # Safety
/// `value` must be null or a pointer obtained from this module that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn ffi_string_free(value: *mut c_char) {
    if value.is_null() {
        return;
    }
    drop(CString::from_raw(value));
}

unsafe fn render_json(
    widget_id: c_int,
    prefs_json: *const c_char,
    config_json: *const c_char,
) -> Result<String, WidgetError> {
    let prefs = MemoryPreferences::from_json(&c_string_argument(prefs_json)?)?;
    let config = if config_json.is_null() {
        WidgetConfig::default()
    } else {
        WidgetConfig::from_json(&c_string_argument(config_json)?)?
    };

    let renderer = WidgetRenderer::new(config);
    let widget = renderer.render_store(&prefs);
    ViewUpdate::from_rendered(widget_id, &widget, &renderer.config().scheme).to_json()
}

unsafe fn c_string_argument(ptr: *const c_char) -> Result<String, WidgetError> {
    if ptr.is_null() {
        return Err(WidgetError::InvalidInput(
            "null string pointer received".into(),
        ));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map(str::to_string)
        .map_err(|err| WidgetError::InvalidInput(err.to_string()))
}

fn into_c_string(value: String) -> *mut c_char {
    CString::new(value)
        .map(CString::into_raw)
        .unwrap_or(ptr::null_mut())
}

unsafe fn clear_error(out_error: *mut *mut c_char) {
    if !out_error.is_null() {
        *out_error = ptr::null_mut();
    }
}

unsafe fn write_error(out_error: *mut *mut c_char, message: &str) {
    if !out_error.is_null() {
        *out_error = into_c_string(message.to_string());
    }
}
