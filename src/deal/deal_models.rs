use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pipeline stage of a deal. Serialized with the labels shown on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DealStatus {
    New,
    #[serde(rename = "Proposal Sent")]
    Proposal,
    Negotiation,
    #[serde(rename = "Closed - Won")]
    ClosedWon,
    #[serde(rename = "Closed - Lost")]
    ClosedLost,
}

impl std::fmt::Display for DealStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DealStatus::New => write!(f, "New"),
            DealStatus::Proposal => write!(f, "Proposal Sent"),
            DealStatus::Negotiation => write!(f, "Negotiation"),
            DealStatus::ClosedWon => write!(f, "Closed - Won"),
            DealStatus::ClosedLost => write!(f, "Closed - Lost"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub title: String,
    pub contact_name: String,
    pub company: String,
    pub value: f64,
    pub status: DealStatus,
    pub close_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_status_display() {
        assert_eq!(DealStatus::New.to_string(), "New");
        assert_eq!(DealStatus::Proposal.to_string(), "Proposal Sent");
        assert_eq!(DealStatus::Negotiation.to_string(), "Negotiation");
        assert_eq!(DealStatus::ClosedWon.to_string(), "Closed - Won");
        assert_eq!(DealStatus::ClosedLost.to_string(), "Closed - Lost");
    }

    #[test]
    fn test_deal_status_matches_board_labels() {
        let status: DealStatus = serde_json::from_str("\"Closed - Won\"").unwrap();
        assert_eq!(status, DealStatus::ClosedWon);
        assert_eq!(
            serde_json::to_string(&DealStatus::Proposal).unwrap(),
            "\"Proposal Sent\""
        );
    }
}
