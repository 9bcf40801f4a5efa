// src/models/feeds.rs
//
// Feeds datatypes.
// https://docs.developer.amazonservices.com/en_UK/feeds/Feeds_Datatypes.html

use super::common::DateTime;
use serde::{Deserialize, Serialize};

/// Status of a submitted feed. `FeedType` and `FeedProcessingStatus` are
/// free text in the documentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeedSubmissionInfo {
    pub feed_submission_id: String,
    pub feed_type: String,
    pub submitted_date: DateTime,
    pub feed_processing_status: String,
    pub started_processing_date: DateTime,
    pub completed_processing_date: DateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission() -> serde_json::Value {
        json!({
            "FeedSubmissionId": "2291326430",
            "FeedType": "_POST_PRODUCT_DATA_",
            "SubmittedDate": "2009-02-20T02:10:35+00:00",
            "FeedProcessingStatus": "_DONE_",
            "StartedProcessingDate": "2009-02-20T02:10:37+00:00",
            "CompletedProcessingDate": "2009-02-20T02:14:53+00:00"
        })
    }

    #[test]
    fn test_feed_submission_info_round_trips() {
        let info: FeedSubmissionInfo = serde_json::from_value(submission()).unwrap();
        assert_eq!(info.feed_processing_status, "_DONE_");
        assert!(info.submitted_date.to_utc().unwrap() < info.completed_processing_date.to_utc().unwrap());
        assert_eq!(serde_json::to_value(&info).unwrap(), submission());
    }

    #[test]
    fn test_feed_submission_info_requires_every_field() {
        let full = submission();
        for key in full.as_object().unwrap().keys() {
            let mut partial = full.clone();
            partial.as_object_mut().unwrap().remove(key);
            let err = serde_json::from_value::<FeedSubmissionInfo>(partial).unwrap_err();
            assert!(err.to_string().contains(key.as_str()), "{}: {}", key, err);
        }
    }
}
