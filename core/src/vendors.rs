use std::sync::OnceLock;

use mac_oui::Oui;
use pnet::util::MacAddr;

use netwatch_common::error::LookupError;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// Retrieves or initializes the **Organizationally unique identifier**
/// database used for linking a vendor to a MAC address.
fn oui_db() -> Option<&'static Oui> {
    OUI_DB.get_or_init(|| Oui::default().ok()).as_ref()
}

/// Vendor-database lookup keyed by hardware address.
pub trait VendorLookup: Send + Sync {
    fn vendor(&self, mac: MacAddr) -> Result<String, LookupError>;
}

/// The IEEE OUI registry embedded in `mac_oui`.
pub struct OuiVendorDb;

impl VendorLookup for OuiVendorDb {
    fn vendor(&self, mac: MacAddr) -> Result<String, LookupError> {
        let db = oui_db()
            .ok_or_else(|| LookupError::Io(std::io::Error::other("OUI database unavailable")))?;

        match db.lookup_by_mac(&mac.to_string()) {
            Ok(Some(entry)) => Ok(entry.company_name.clone()),
            _ => Err(LookupError::NotFound),
        }
    }
}
