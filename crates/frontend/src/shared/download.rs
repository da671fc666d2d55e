//! Managed file downloads: fetch the resource with the auth header, wrap the
//! body in a Blob and trigger a synthetic anchor click. The filename comes
//! from the Content-Disposition header when the backend sends one.

use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

/// Extract the filename from a Content-Disposition header value.
///
/// Handles both the quoted form `attachment; filename="report.pdf"` and the
/// bare form `attachment; filename=report.pdf`.
pub fn parse_content_disposition(header: &str) -> Option<String> {
    let (_, rest) = header.split_once("filename=")?;
    let rest = rest.trim();
    let name = if let Some(stripped) = rest.strip_prefix('"') {
        stripped.split('"').next().unwrap_or("")
    } else {
        rest.split(';').next().unwrap_or("").trim()
    };
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Download a backend resource as a file.
///
/// On failure the caller is expected to fall back to `open_in_new_tab`.
pub async fn download_file(path: &str, default_name: &str) -> Result<(), String> {
    let mut builder = Request::get(&api_url(path));
    if let Some(token) = storage::get_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let response = builder
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Download failed: {}", response.status()));
    }

    let filename = response
        .headers()
        .get("content-disposition")
        .and_then(|h| parse_content_disposition(&h))
        .unwrap_or_else(|| default_name.to_string());

    let bytes = response
        .binary()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))?;

    let blob = create_blob(&bytes)?;
    download_blob(&blob, &filename)
}

/// Fallback path: open the raw resource URL directly in a new tab
pub fn open_in_new_tab(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(&api_url(path), "_blank");
    }
}

fn create_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes).buffer());

    Blob::new_with_u8_array_sequence(&array).map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Trigger a browser download of a Blob via a temporary anchor element
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    let _ = Url::revoke_object_url(&url);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quoted_filename() {
        assert_eq!(
            parse_content_disposition("attachment; filename=\"report.pdf\""),
            Some("report.pdf".to_string())
        );
    }

    #[test]
    fn test_parse_bare_filename() {
        assert_eq!(
            parse_content_disposition("attachment; filename=invoice.csv"),
            Some("invoice.csv".to_string())
        );
        assert_eq!(
            parse_content_disposition("attachment; filename=invoice.csv; size=42"),
            Some("invoice.csv".to_string())
        );
    }

    #[test]
    fn test_parse_missing_filename() {
        assert_eq!(parse_content_disposition("attachment"), None);
        assert_eq!(parse_content_disposition("attachment; filename=\"\""), None);
    }
}
