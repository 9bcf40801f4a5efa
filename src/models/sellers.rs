// src/models/sellers.rs
//
// Sellers datatypes.
// https://docs.developer.amazonservices.com/en_UK/sellers/Sellers_Datatypes.html

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Marketplace {
    pub marketplace_id: String,
    pub name: String,
    pub default_country_code: String,
    pub default_currency_code: String,
    pub default_language_code: String,
    pub domain_name: String,
}

literal_enum! {
    pub enum YesNo {
        Yes => "Yes",
        No => "No",
    }
}

impl From<YesNo> for bool {
    fn from(value: YesNo) -> bool {
        value == YesNo::Yes
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Participation {
    pub marketplace_id: String,
    pub seller_id: String,
    pub has_seller_suspended_listings: YesNo,
}
