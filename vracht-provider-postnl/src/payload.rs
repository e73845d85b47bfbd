//! Request body for the PostNL Shipping API `/v1/shipment` call.

use chrono::NaiveDateTime;
use serde::Serialize;

use vracht_core::model::Picking;

use crate::PostnlConfig;

const PRINTER_TYPE: &str = "GraphicFile|PDF";
// Address-type codes from the PostNL API reference.
const CUSTOMER_ADDRESS_TYPE: &str = "02";
const SHIPMENT_ADDRESS_TYPE: &str = "01";
const CONTACT_TYPE: &str = "01";
// "3085" is the standard-shipment product; no other service level is offered.
const PRODUCT_CODE_STANDARD: &str = "3085";

const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Top-level payload of one shipment request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ShipmentRequest {
    customer: Customer,
    message: Message,
    shipments: Shipments,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Customer {
    address: CustomerAddress,
    collection_location: String,
    contact_person: String,
    customer_code: String,
    customer_number: String,
    email: String,
    name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct CustomerAddress {
    address_type: String,
    city: String,
    company_name: String,
    #[serde(rename = "Countrycode")]
    country_code: String,
    house_nr: String,
    street: String,
    #[serde(rename = "Zipcode")]
    zip_code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Message {
    #[serde(rename = "MessageID")]
    message_id: String,
    message_time_stamp: String,
    #[serde(rename = "Printertype")]
    printer_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Shipments {
    addresses: Vec<ShipmentAddress>,
    contacts: Vec<Contact>,
    dimension: Dimension,
    product_code_delivery: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ShipmentAddress {
    address_type: String,
    city: String,
    #[serde(rename = "Countrycode")]
    country_code: String,
    first_name: String,
    house_nr: String,
    house_nr_ext: String,
    name: String,
    street: String,
    #[serde(rename = "Zipcode")]
    zip_code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Contact {
    contact_type: String,
    email: String,
    #[serde(rename = "SMSNr")]
    sms_nr: String,
    tel_nr: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Dimension {
    weight: String,
}

/// Compose the request body for one picking.
///
/// Assumes the recipient already passed validation; building itself cannot
/// fail. The weight is carried in grams, the timestamp as `DD-MM-YYYY
/// HH:MM:SS`, and the message id is the picking's host identifier.
pub(crate) fn build(
    picking: &Picking,
    config: &PostnlConfig,
    weight_kilograms: f64,
    timestamp: NaiveDateTime,
) -> ShipmentRequest {
    let sender = &picking.sender;
    let recipient = &picking.recipient;

    ShipmentRequest {
        customer: Customer {
            address: CustomerAddress {
                address_type: String::from(CUSTOMER_ADDRESS_TYPE),
                city: sender.city.clone().unwrap_or_default(),
                company_name: sender.name.clone(),
                country_code: sender.country_code.clone().unwrap_or_default(),
                house_nr: config.sender_house_number.clone(),
                street: sender.street.clone().unwrap_or_default(),
                zip_code: sender.zip.clone().unwrap_or_default(),
            },
            collection_location: String::new(),
            contact_person: String::new(),
            customer_code: config.customer_code.clone(),
            customer_number: config.customer_number.clone(),
            email: sender.email.clone().unwrap_or_default(),
            name: sender.name.clone(),
        },
        message: Message {
            message_id: picking.id.to_string(),
            message_time_stamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
            printer_type: String::from(PRINTER_TYPE),
        },
        shipments: Shipments {
            addresses: vec![ShipmentAddress {
                address_type: String::from(SHIPMENT_ADDRESS_TYPE),
                city: recipient.city.clone().unwrap_or_default(),
                country_code: recipient.country_code.clone().unwrap_or_default(),
                first_name: String::new(),
                house_nr: recipient.house_number.clone().unwrap_or_default(),
                house_nr_ext: recipient.house_number_ext.clone().unwrap_or_default(),
                name: recipient.name.clone(),
                street: recipient.street.clone().unwrap_or_default(),
                zip_code: recipient.zip.clone().unwrap_or_default(),
            }],
            contacts: vec![Contact {
                contact_type: String::from(CONTACT_TYPE),
                email: recipient.email.clone().unwrap_or_default(),
                sms_nr: recipient.mobile.clone().unwrap_or_default(),
                tel_nr: recipient.phone.clone().unwrap_or_default(),
            }],
            dimension: Dimension {
                // The API expects grams as a string.
                weight: (weight_kilograms * 1000.0).to_string(),
            },
            product_code_delivery: String::from(PRODUCT_CODE_STANDARD),
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use vracht_core::model::{Party, Picking, PickingId};

    use crate::PostnlConfig;

    use super::build;

    fn sample_picking() -> Picking {
        Picking {
            id: PickingId(String::from("81")),
            name: String::from("WH/OUT/00042"),
            sender: Party {
                name: String::from("NL Company"),
                street: Some(String::from("Keizersgracht 22")),
                city: Some(String::from("Amsterdam")),
                zip: Some(String::from("1015 CJ")),
                country_code: Some(String::from("NL")),
                email: Some(String::from("sales@nlcompany.example")),
                ..Party::default()
            },
            recipient: Party {
                name: String::from("NL Partner"),
                street: Some(String::from("Coolsingel")),
                house_number: Some(String::from("10")),
                house_number_ext: Some(String::from("B")),
                city: Some(String::from("Rotterdam")),
                zip: Some(String::from("3011 AD")),
                country_code: Some(String::from("NL")),
                email: Some(String::from("partner@example.nl")),
                phone: Some(String::from("+31454534231")),
                mobile: Some(String::from("+31612345678")),
                ..Party::default()
            },
            shipping_weight: 2.5,
            tracking_ref: None,
        }
    }

    fn noon() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 3, 14)
            .and_then(|date| date.and_hms_opt(12, 30, 5))
            .expect("valid fixture timestamp")
    }

    #[test]
    fn serializes_the_carrier_wire_format() {
        let payload = build(&sample_picking(), &PostnlConfig::default(), 2.5, noon());
        let body = serde_json::to_value(&payload).expect("payload serializes");

        assert_eq!(body["Customer"]["Address"]["AddressType"], "02");
        assert_eq!(body["Customer"]["Address"]["Countrycode"], "NL");
        assert_eq!(body["Customer"]["Address"]["Zipcode"], "1015 CJ");
        assert_eq!(body["Shipments"]["Addresses"][0]["AddressType"], "01");
        assert_eq!(body["Shipments"]["Addresses"][0]["HouseNr"], "10");
        assert_eq!(body["Shipments"]["Addresses"][0]["HouseNrExt"], "B");
        assert_eq!(body["Shipments"]["Contacts"][0]["ContactType"], "01");
        assert_eq!(body["Shipments"]["Contacts"][0]["SMSNr"], "+31612345678");
        assert_eq!(body["Shipments"]["Contacts"][0]["TelNr"], "+31454534231");
        assert_eq!(body["Shipments"]["ProductCodeDelivery"], "3085");
        assert_eq!(body["Message"]["Printertype"], "GraphicFile|PDF");
    }

    #[test]
    fn carries_the_weight_in_grams_as_a_string() {
        let payload = build(&sample_picking(), &PostnlConfig::default(), 2.5, noon());
        let body = serde_json::to_value(&payload).expect("payload serializes");

        assert_eq!(body["Shipments"]["Dimension"]["Weight"], "2500");
    }

    #[test]
    fn stamps_message_id_and_timestamp() {
        let payload = build(&sample_picking(), &PostnlConfig::default(), 2.5, noon());
        let body = serde_json::to_value(&payload).expect("payload serializes");

        assert_eq!(body["Message"]["MessageID"], "81");
        assert_eq!(body["Message"]["MessageTimeStamp"], "14-03-2021 12:30:05");
    }

    #[test]
    fn sender_house_number_comes_from_the_configuration() {
        let config = PostnlConfig {
            sender_house_number: String::from("87"),
            ..PostnlConfig::default()
        };
        let payload = build(&sample_picking(), &config, 2.5, noon());
        let body = serde_json::to_value(&payload).expect("payload serializes");

        assert_eq!(body["Customer"]["Address"]["HouseNr"], "87");
    }

    #[test]
    fn missing_optional_fields_serialize_as_empty_strings() {
        let mut picking = sample_picking();
        picking.recipient.house_number = None;
        picking.recipient.phone = None;

        let payload = build(&picking, &PostnlConfig::default(), 2.5, noon());
        let body = serde_json::to_value(&payload).expect("payload serializes");

        assert_eq!(body["Shipments"]["Addresses"][0]["HouseNr"], "");
        assert_eq!(body["Shipments"]["Contacts"][0]["TelNr"], "");
    }
}
