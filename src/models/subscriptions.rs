// src/models/subscriptions.rs
//
// Subscriptions datatypes.
// https://docs.developer.amazonservices.com/en_UK/subscriptions/Subscriptions_Datatypes.html

use crate::literal::flag;
use serde::{Deserialize, Serialize};

literal_enum! {
    pub enum AttributeKey {
        SqsQueueUrl => "sqsQueueUrl",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeKeyValue {
    pub key: AttributeKey,
    pub value: String,
}

literal_enum! {
    pub enum DeliveryChannel {
        SQS => "SQS",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Destination {
    pub delivery_channel: DeliveryChannel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_list: Option<Vec<AttributeKeyValue>>,
}

impl Destination {
    /// An SQS destination pointing at `queue_url`.
    pub fn sqs(queue_url: impl Into<String>) -> Self {
        Destination {
            delivery_channel: DeliveryChannel::SQS,
            attribute_list: Some(vec![AttributeKeyValue {
                key: AttributeKey::SqsQueueUrl,
                value: queue_url.into(),
            }]),
        }
    }

    pub fn queue_url(&self) -> Option<&str> {
        self.attribute_list
            .iter()
            .flatten()
            .find(|attr| attr.key == AttributeKey::SqsQueueUrl)
            .map(|attr| attr.value.as_str())
    }
}

/// `NotificationType` is kept as text; the vendor list keeps growing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subscription {
    pub notification_type: String,
    pub destination: Destination,
    #[serde(with = "flag")]
    pub is_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subscription_wire_shape() {
        let subscription = Subscription {
            notification_type: "AnyOfferChanged".to_string(),
            destination: Destination::sqs("https://sqs.us-east-1.amazonaws.com/51471EXAMPLE/mws_notifications"),
            is_enabled: true,
        };
        let value = serde_json::to_value(&subscription).unwrap();
        assert_eq!(value["Destination"]["DeliveryChannel"], "SQS");
        assert_eq!(value["Destination"]["AttributeList"][0]["Key"], "sqsQueueUrl");
        assert_eq!(value["IsEnabled"], json!(true));
    }

    #[test]
    fn test_destination_queue_url_and_unknown_key() {
        let destination: Destination = serde_json::from_value(json!({
            "DeliveryChannel": "SQS",
            "AttributeList": [{"Key": "sqsQueueUrl", "Value": "https://queue"}]
        }))
        .unwrap();
        assert_eq!(destination.queue_url(), Some("https://queue"));

        let bad = json!({
            "DeliveryChannel": "SQS",
            "AttributeList": [{"Key": "snsTopicArn", "Value": "arn"}]
        });
        assert!(serde_json::from_value::<Destination>(bad).is_err());
    }

    #[test]
    fn test_subscription_enabled_as_text() {
        let subscription: Subscription = serde_json::from_value(json!({
            "NotificationType": "AnyOfferChanged",
            "Destination": {"DeliveryChannel": "SQS"},
            "IsEnabled": "true"
        }))
        .unwrap();
        assert!(subscription.is_enabled);
        assert_eq!(subscription.destination.queue_url(), None);
    }
}
