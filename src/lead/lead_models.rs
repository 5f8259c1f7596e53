use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Lost,
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadStatus::New => write!(f, "New"),
            LeadStatus::Contacted => write!(f, "Contacted"),
            LeadStatus::Qualified => write!(f, "Qualified"),
            LeadStatus::Lost => write!(f, "Lost"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum LeadSource {
    Website,
    Referral,
    #[serde(rename = "Cold Call")]
    ColdCall,
    Event,
}

impl std::fmt::Display for LeadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadSource::Website => write!(f, "Website"),
            LeadSource::Referral => write!(f, "Referral"),
            LeadSource::ColdCall => write!(f, "Cold Call"),
            LeadSource::Event => write!(f, "Event"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeadNote {
    pub id: String,
    pub date: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: String,
    pub status: LeadStatus,
    pub value: f64,
    #[serde(alias = "lastContact")]
    pub last_contact: String,
    pub source: LeadSource,
    #[serde(default)]
    pub notes: Vec<LeadNote>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_status_display() {
        assert_eq!(LeadStatus::New.to_string(), "New");
        assert_eq!(LeadStatus::Contacted.to_string(), "Contacted");
        assert_eq!(LeadStatus::Qualified.to_string(), "Qualified");
        assert_eq!(LeadStatus::Lost.to_string(), "Lost");
    }

    #[test]
    fn test_lead_wire_shape() {
        let json = r#"{"id":"lead_007","name":"Sam Park","company":"Nimbus","email":"sam@nimbus.io",
            "status":"New","value":1500,"last_contact":"2025-09-21","source":"Event"}"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.last_contact, "2025-09-21");
        assert!(lead.notes.is_empty());

        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(value["last_contact"], "2025-09-21");
        assert!(value.get("lastContact").is_none());

        let camel = json.replace("last_contact", "lastContact");
        let lead: Lead = serde_json::from_str(&camel).unwrap();
        assert_eq!(lead.last_contact, "2025-09-21");
    }

    #[test]
    fn test_cold_call_source_uses_spaced_name() {
        let json = serde_json::to_string(&LeadSource::ColdCall).unwrap();
        assert_eq!(json, "\"Cold Call\"");
        assert_eq!(LeadSource::ColdCall.to_string(), "Cold Call");
    }
}
