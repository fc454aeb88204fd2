//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use gallery_core::error::ApiError;
use gallery_core::types::ImageList;
use image::RgbaImage;

/// Opaque handle to a `GalleryClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiGalleryClient {
    pub(crate) inner: gallery_core::GalleryClient,
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP GET request described as C-compatible plain data.
///
/// Built by `gallery_build_*` functions. The C caller executes the request
/// and passes the response back through `gallery_parse_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: gallery_core::HttpRequest) -> *mut Self {
        let url = CString::new(req.url).unwrap().into_raw();

        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let mut ffi_headers: Vec<FfiHeader> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: CString::new(k).unwrap().into_raw(),
                    value: CString::new(v).unwrap().into_raw(),
                })
                .collect();
            let ptr = ffi_headers.as_mut_ptr();
            std::mem::forget(ffi_headers);
            ptr
        };

        let ffi_req = Box::new(FfiHttpRequest {
            url,
            headers,
            headers_len,
        });
        Box::into_raw(ffi_req)
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing an HTTP request,
/// then passes a pointer to a `gallery_parse_*` function. The body is raw
/// bytes because image responses are binary. The FFI layer reads but does
/// not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const u8,
    pub body_len: u32,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiGalleryResult`.
#[repr(C)]
pub enum FfiErrorCode {
    Ok = 0,
    Transport = 1,
    Http = 2,
    Deserialization = 3,
    Validation = 4,
    Panic = 5,
    NullArg = 6,
}

/// Tag that tells `gallery_free_result` what `FfiGalleryResult::data`
/// points to.
#[repr(C)]
pub enum FfiDataTag {
    None = 0,
    ImageList = 1,
    Image = 2,
}

/// A validated catalog entry exposed to C. Both fields are always non-null;
/// entries with missing fields never survive domain mapping.
#[repr(C)]
pub struct FfiImageItem {
    pub name: *mut c_char,
    pub image_url: *mut c_char,
}

/// The validated catalog exposed to C, in server order.
#[repr(C)]
pub struct FfiImageList {
    pub items: *mut FfiImageItem,
    pub len: u32,
}

/// Decoded RGBA8 pixels exposed to C, row-major, `width * height * 4` bytes.
#[repr(C)]
pub struct FfiImage {
    pub width: u32,
    pub height: u32,
    pub pixels: *mut u8,
    pub pixels_len: u32,
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the parsed payload (tagged by `data_tag`).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, and `data` is null.
#[repr(C)]
pub struct FfiGalleryResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiGalleryResult {
    /// Build a success result carrying an `FfiImageList`.
    pub(crate) fn ok_image_list(list: ImageList) -> *mut Self {
        let len = list.images.len() as u32;
        let mut ffi_items: Vec<FfiImageItem> = list
            .images
            .into_iter()
            .map(|item| FfiImageItem {
                name: CString::new(item.name).unwrap().into_raw(),
                image_url: CString::new(item.image_url).unwrap().into_raw(),
            })
            .collect();

        let items = if ffi_items.is_empty() {
            std::ptr::null_mut()
        } else {
            let ptr = ffi_items.as_mut_ptr();
            std::mem::forget(ffi_items);
            ptr
        };

        let ffi_list = Box::new(FfiImageList { items, len });
        let result = Box::new(FfiGalleryResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::ImageList,
            data: Box::into_raw(ffi_list) as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build a success result carrying decoded pixels.
    pub(crate) fn ok_image(img: RgbaImage) -> *mut Self {
        let width = img.width();
        let height = img.height();
        // Boxed slice guarantees capacity == length, which the matching
        // free reconstructs with `Vec::from_raw_parts(ptr, len, len)`.
        let pixels = img.into_raw().into_boxed_slice();
        let pixels_len = pixels.len() as u32;

        let ptr = if pixels.is_empty() {
            std::ptr::null_mut()
        } else {
            Box::into_raw(pixels) as *mut u8
        };

        let ffi_image = Box::new(FfiImage {
            width,
            height,
            pixels: ptr,
            pixels_len,
        });
        let result = Box::new(FfiGalleryResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::Image,
            data: Box::into_raw(ffi_image) as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build an error result from an `ApiError`.
    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        let (error_code, http_status, msg) = match &err {
            ApiError::Transport(_) => (FfiErrorCode::Transport, 0u16, err.to_string()),
            ApiError::Http { status, .. } => (FfiErrorCode::Http, *status, err.to_string()),
            ApiError::Deserialization(_) => (FfiErrorCode::Deserialization, 0, err.to_string()),
            ApiError::Validation(_) => (FfiErrorCode::Validation, 0, err.to_string()),
        };

        let result = Box::new(FfiGalleryResult {
            error_code,
            error_message: CString::new(msg).unwrap().into_raw(),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        let msg = format!("null argument: {name}");
        let result = Box::new(FfiGalleryResult {
            error_code: FfiErrorCode::NullArg,
            error_message: CString::new(msg).unwrap().into_raw(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        let result = Box::new(FfiGalleryResult {
            error_code: FfiErrorCode::Panic,
            error_message: CString::new(msg).unwrap_or_default().into_raw(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }
}
