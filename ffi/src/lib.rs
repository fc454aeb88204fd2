//! C-ABI wrapper around `gallery-core`.
//!
//! # Overview
//! Exposes the catalog fetch and per-row image fetch through `extern "C"`
//! functions so the mobile host UI can build and parse HTTP requests and
//! responses without linking to serde or the image decoder directly.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-operation `build_*` / `parse_*` mirrors the core API 1:1.
//!   `gallery_parse_fetch_images` goes through the repository, so the host
//!   only ever sees the validated domain list.
//! - A single `FfiGalleryResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly. Image decode failures
//!   come back as errors; the host substitutes its placeholder, the same
//!   policy the in-process `ImageLoader` applies.
//! - The C caller owns all returned pointers and must call the matching
//!   `gallery_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use gallery_core::http::HttpResponse;
use gallery_core::loader::decode_image;
use gallery_core::repository::GalleryRepository;
use gallery_core::DEFAULT_BASE_URL;

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `GalleryClient` bound to `base_url`. A null `base_url`
/// selects the fixed shipped endpoint.
///
/// The caller must free the returned pointer with `gallery_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn gallery_client_new(base_url: *const c_char) -> *mut FfiGalleryClient {
    catch_unwind(|| {
        let url = if base_url.is_null() {
            DEFAULT_BASE_URL
        } else {
            unsafe { CStr::from_ptr(base_url) }.to_str().unwrap_or(DEFAULT_BASE_URL)
        };
        let client = gallery_core::GalleryClient::new(url);
        Box::into_raw(Box::new(FfiGalleryClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a `GalleryClient` created by `gallery_client_new`. Safe to call
/// with null.
#[unsafe(no_mangle)]
pub extern "C" fn gallery_client_free(client: *mut FfiGalleryClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build the HTTP request that fetches the image catalog.
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `gallery_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn gallery_build_fetch_images(
    client: *const FfiGalleryClient,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let req = client.inner.build_fetch_images();
        FfiHttpRequest::from_core(req)
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build the HTTP request that fetches one image resource by its catalog URL.
///
/// Returns null if `client` or `url` is null.
#[unsafe(no_mangle)]
pub extern "C" fn gallery_build_fetch_image(
    client: *const FfiGalleryClient,
    url: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || url.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let url_str = unsafe { CStr::from_ptr(url) }.to_str().unwrap_or("");
        let req = client.inner.build_fetch_image(url_str);
        FfiHttpRequest::from_core(req)
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`, copying the body
/// bytes. A null body is treated as an empty body.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() || resp.body_len == 0 {
        Vec::new()
    } else {
        unsafe { std::slice::from_raw_parts(resp.body, resp.body_len as usize) }.to_vec()
    };
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body,
    }
}

/// Parse a catalog response into the validated domain list.
///
/// Returns a result with `data_tag = ImageList` on success. An entry with a
/// missing name or URL fails the whole list with `error_code = Validation`.
#[unsafe(no_mangle)]
pub extern "C" fn gallery_parse_fetch_images(
    client: *const FfiGalleryClient,
    response: *const FfiHttpResponse,
) -> *mut FfiGalleryResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiGalleryResult::null_arg("client");
        }
        if response.is_null() {
            return FfiGalleryResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let repository = GalleryRepository::new(client.inner.clone());
        match repository.parse_fetch_images(ffi_response_to_core(resp)) {
            Ok(list) => FfiGalleryResult::ok_image_list(list),
            Err(e) => FfiGalleryResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiGalleryResult::panic("panic in gallery_parse_fetch_images"))
}

/// Parse an image response into decoded RGBA pixels.
///
/// Returns a result with `data_tag = Image` on success. On any failure the
/// host shows its placeholder image instead.
#[unsafe(no_mangle)]
pub extern "C" fn gallery_parse_fetch_image(
    client: *const FfiGalleryClient,
    response: *const FfiHttpResponse,
) -> *mut FfiGalleryResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiGalleryResult::null_arg("client");
        }
        if response.is_null() {
            return FfiGalleryResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let decoded = client
            .inner
            .parse_fetch_image(ffi_response_to_core(resp))
            .and_then(|bytes| decode_image(&bytes));
        match decoded {
            Ok(img) => FfiGalleryResult::ok_image(img),
            Err(e) => FfiGalleryResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiGalleryResult::panic("panic in gallery_parse_fetch_image"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by any `gallery_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn gallery_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        if !req.url.is_null() {
            drop(unsafe { CString::from_raw(req.url) });
        }
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Vec::from_raw_parts(req.headers, req.headers_len as usize, req.headers_len as usize)
            };
            for h in headers {
                if !h.key.is_null() {
                    drop(unsafe { CString::from_raw(h.key) });
                }
                if !h.value.is_null() {
                    drop(unsafe { CString::from_raw(h.value) });
                }
            }
        }
    });
}

/// Free an `FfiGalleryResult` returned by any `gallery_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data`
/// points to.
#[unsafe(no_mangle)]
pub extern "C" fn gallery_free_result(result: *mut FfiGalleryResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.data.is_null() {
            match result.data_tag {
                FfiDataTag::ImageList => {
                    let list = unsafe { Box::from_raw(result.data as *mut FfiImageList) };
                    if !list.items.is_null() && list.len > 0 {
                        let items = unsafe {
                            Vec::from_raw_parts(list.items, list.len as usize, list.len as usize)
                        };
                        for item in &items {
                            free_ffi_item_fields(item);
                        }
                    }
                }
                FfiDataTag::Image => {
                    let img = unsafe { Box::from_raw(result.data as *mut FfiImage) };
                    if !img.pixels.is_null() && img.pixels_len > 0 {
                        drop(unsafe {
                            Vec::from_raw_parts(
                                img.pixels,
                                img.pixels_len as usize,
                                img.pixels_len as usize,
                            )
                        });
                    }
                }
                FfiDataTag::None => {}
            }
        }
    });
}

/// Free the C-string fields of an `FfiImageItem` (but not the struct itself).
fn free_ffi_item_fields(item: &FfiImageItem) {
    if !item.name.is_null() {
        drop(unsafe { CString::from_raw(item.name) });
    }
    if !item.image_url.is_null() {
        drop(unsafe { CString::from_raw(item.image_url) });
    }
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn gallery_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
