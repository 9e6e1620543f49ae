//! The lead collected by the waitlist form

/// User-supplied fields gathered before submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lead {
    pub email: String,
    /// Only present when the form variant collects it
    pub phone: Option<String>,
    pub company: String,
    pub sector: String,
    pub size: String,
}
