use bon::Builder;
use chrono::Local;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Body of a lead-creation request. Absent fields are left out of the JSON.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq, Builder)]
pub struct NewLead {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl NewLead {
    pub fn without(&self, field: LeadField) -> NewLead {
        let mut lead = self.clone();
        match field {
            LeadField::Name => lead.name = None,
            LeadField::Email => lead.email = None,
            LeadField::Phone => lead.phone = None,
        }
        lead
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Phone,
}

impl LeadField {
    pub const ALL: [LeadField; 3] = [LeadField::Name, LeadField::Email, LeadField::Phone];
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LeadField::Name => "Name",
            LeadField::Email => "Email",
            LeadField::Phone => "Phone",
        };
        write!(f, "{label}")
    }
}

/// Per-run lead values. The time-of-day suffix keeps repeated runs against a
/// shared backend from colliding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadIdentity {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl LeadIdentity {
    pub fn now() -> Self {
        Self::from_timestamp(&Local::now().format("%H%M%S").to_string())
    }

    pub fn from_timestamp(timestamp: &str) -> Self {
        let tail_start = timestamp
            .char_indices()
            .rev()
            .nth(4)
            .map(|(i, _)| i)
            .unwrap_or(0);
        LeadIdentity {
            name: format!("test_user_{}", timestamp),
            email: format!("test_{}@example.com", timestamp),
            phone: format!("98765{}", &timestamp[tail_start..]),
        }
    }

    pub fn to_new_lead(&self) -> NewLead {
        NewLead::builder()
            .name(self.name.clone())
            .email(self.email.clone())
            .phone(self.phone.clone())
            .build()
    }
}
