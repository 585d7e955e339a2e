use serde::{Deserialize, Serialize};

use crate::ops::snapshot::DocumentRecord;

/// A leave request as the employee app writes it. Store documents carry no
/// enforced schema, so every script decodes through this struct and
/// quarantines documents that do not fit instead of trusting field presence.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub employee_id: String,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: String,
    pub end_date: String,
    pub status: LeaveStatus,
    pub submitted_at: bson::DateTime,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Vacation,
    Sick,
    Personal,
    Emergency,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Vacation => "vacation",
            LeaveType::Sick => "sick",
            LeaveType::Personal => "personal",
            LeaveType::Emergency => "emergency",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveRequest {
    pub fn from_record(record: &DocumentRecord) -> Result<Self, bson::de::Error> {
        bson::from_document(record.data.clone())
    }

    /// Identity key for deduplication. Order-sensitive and case-sensitive:
    /// two requests are duplicates only when employee, type and date range
    /// match exactly.
    pub fn dedup_key(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            self.employee_id,
            self.leave_type.as_str(),
            self.start_date,
            self.end_date
        )
    }
}
