//! Wire format for `POST /waitlist`

use crate::state::{normalize_phone, Lead};
use serde::Serialize;

/// Unit suffix shown on size options but not accepted by the API
const SIZE_UNIT_SUFFIX: &str = " empleados";

/// JSON body sent to the waitlist endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistPayload {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub company_name: String,
    pub company_niche: String,
    pub company_size: String,
}

impl From<&Lead> for WaitlistPayload {
    fn from(lead: &Lead) -> Self {
        Self {
            email: lead.email.clone(),
            phone: lead.phone.as_deref().map(normalize_phone),
            company_name: lead.company.clone(),
            company_niche: lead.sector.clone(),
            company_size: strip_size_unit(&lead.size).to_string(),
        }
    }
}

/// "11-50 empleados" -> "11-50"
fn strip_size_unit(size: &str) -> &str {
    size.strip_suffix(SIZE_UNIT_SUFFIX).unwrap_or(size)
}
