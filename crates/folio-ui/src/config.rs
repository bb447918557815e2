//! Page configuration loading
//!
//! A page may embed overrides as
//! `<script type="application/json" id="folio-config">{...}</script>`.
//! Without that element the built-in defaults apply.

use folio_core::PortfolioConfig;
use web_sys::Document;

use crate::error::Result;

/// Id of the embedded configuration element
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Read the embedded configuration, if any.
///
/// # Errors
///
/// Returns `UiError::Config` if the element exists but holds invalid JSON
/// or values out of range
pub fn read_config(document: &Document) -> Result<PortfolioConfig> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(PortfolioConfig::default());
    };
    let text = element.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(PortfolioConfig::default());
    }
    Ok(PortfolioConfig::from_json(&text)?)
}
