// src/models/reports.rs
//
// Reports datatypes.
// https://docs.developer.amazonservices.com/en_UK/reports/Reports_Datatypes.html
//
// Report types, processing statuses and schedules are free-form strings.

use super::common::DateTime;
use crate::literal::flag;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportInfo {
    pub report_id: String,
    pub report_type: String,
    pub report_request_id: String,
    pub available_date: DateTime,
    #[serde(with = "flag")]
    pub acknowledged: bool,
    pub acknowledged_date: DateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportRequestInfo {
    pub report_request_id: String,
    pub report_type: String,
    pub start_date: DateTime,
    pub end_date: DateTime,
    #[serde(with = "flag")]
    pub scheduled: bool,
    pub submitted_date: DateTime,
    pub report_processing_status: String,
    pub generated_report_id: String,
    pub started_processing_date: DateTime,
    pub completed_date: DateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportSchedule {
    pub report_type: String,
    pub schedule: String,
    pub scheduled_date: DateTime,
}
