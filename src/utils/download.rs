use crate::booking::error::SinkError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{window, Blob, BlobPropertyBag, HtmlAnchorElement, Url};

fn download_err(e: JsValue) -> SinkError {
    SinkError::Download(format!("{:?}", e))
}

/// Offers `contents` to the visitor as a JSON file download.
pub fn download_json(file_name: &str, contents: &str) -> Result<(), SinkError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| SinkError::Download("no document".to_string()))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(download_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(download_err)?;

    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(download_err)?
        .dyn_into()
        .map_err(|_| SinkError::Download("created element is not an anchor".to_string()))?;
    link.set_href(&url);
    link.set_download(file_name);
    link.click();

    // The download has its own reference to the blob by now
    if let Err(e) = Url::revoke_object_url(&url) {
        log::warn!("Could not release export blob url: {:?}", e);
    }
    Ok(())
}
