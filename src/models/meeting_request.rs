use serde::{Deserialize, Serialize};

const DEFAULT_PURPOSE: &str = "a meeting";

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct MeetingRequest {
    pub purpose: Option<String>,
    pub address1: String,
    pub address2: String,
}

impl MeetingRequest {
    /// Purpose as it should read inside the prompt
    pub fn purpose_or_default(&self) -> &str {
        match self.purpose.as_deref().map(str::trim) {
            Some(purpose) if !purpose.is_empty() => purpose,
            _ => DEFAULT_PURPOSE,
        }
    }

    pub fn has_both_addresses(&self) -> bool {
        !self.address1.trim().is_empty() && !self.address2.trim().is_empty()
    }
}
