//! Wire models for the document creation API.
//!
//! All fields are carried verbatim as strings, dates included; the client
//! performs no schema validation. Serialized field names follow the API's
//! snake_case convention.

use serde::{Deserialize, Serialize};

/// A "goods introduction" document describing products put into circulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Document {
    pub description: Option<Description>,
    pub doc_id: Option<String>,
    pub doc_status: Option<String>,
    pub doc_type: Option<String>,
    pub import_request: Option<String>,
    pub owner_inn: Option<String>,
    pub participant_inn: Option<String>,
    pub producer_inn: Option<String>,
    pub production_date: Option<String>,
    pub production_type: Option<String>,
    #[serde(default)]
    pub products: Vec<Product>,
    pub reg_date: Option<String>,
    pub reg_number: Option<String>,
}

/// Participant description block of a [`Document`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Description {
    pub participant_inn: Option<String>,
}

/// A single product record within a [`Document`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Product {
    pub certificate_document: Option<String>,
    pub certificate_document_date: Option<String>,
    pub certificate_document_number: Option<String>,
    pub owner_inn: Option<String>,
    pub producer_inn: Option<String>,
    pub production_date: Option<String>,
    pub tnved_code: Option<String>,
    pub uit_code: Option<String>,
    pub uitu_code: Option<String>,
}

/// Submission envelope posted to the create-document endpoint.
///
/// `product_document` carries the document's JSON as a string, wrapped
/// together with the caller's detached signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateDocumentRequest {
    pub product_document: String,
    pub signature: String,
}

/// Success response body: the identifier assigned to the created document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateDocumentResponse {
    pub value: String,
}

/// Error response body returned with non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ErrorResponse {
    pub error_message: String,
    pub code: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        Document {
            description: Some(Description {
                participant_inn: Some("7700000000".to_string()),
            }),
            doc_id: Some("doc-42".to_string()),
            doc_status: Some("DRAFT".to_string()),
            doc_type: Some("LP_INTRODUCE_GOODS".to_string()),
            import_request: Some("true".to_string()),
            owner_inn: Some("7700000000".to_string()),
            participant_inn: Some("7700000000".to_string()),
            producer_inn: Some("7800000000".to_string()),
            production_date: Some("2020-01-23".to_string()),
            production_type: Some("OWN_PRODUCTION".to_string()),
            products: vec![Product {
                certificate_document: Some("CONFORMITY_CERTIFICATE".to_string()),
                certificate_document_date: Some("2020-01-23".to_string()),
                certificate_document_number: Some("cert-1".to_string()),
                owner_inn: Some("7700000000".to_string()),
                producer_inn: Some("7800000000".to_string()),
                production_date: Some("2020-01-23".to_string()),
                tnved_code: Some("6401".to_string()),
                uit_code: Some("uit-1".to_string()),
                uitu_code: None,
            }],
            reg_date: Some("2020-01-23".to_string()),
            reg_number: Some("reg-1".to_string()),
        }
    }

    #[test]
    fn test_document_round_trip() {
        let document = sample_document();
        let json = serde_json::to_string(&document).unwrap();
        let decoded: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(document, decoded);
    }

    #[test]
    fn test_document_field_names_are_snake_case() {
        let json = serde_json::to_value(sample_document()).unwrap();
        assert!(json.get("doc_id").is_some());
        assert!(json.get("production_date").is_some());
        assert_eq!(
            json["description"]["participant_inn"],
            serde_json::json!("7700000000")
        );
        assert_eq!(json["products"][0]["tnved_code"], serde_json::json!("6401"));
        assert_eq!(
            json["products"][0]["certificate_document_number"],
            serde_json::json!("cert-1")
        );
    }

    #[test]
    fn test_error_response_decoding() {
        let body = r#"{"error_message":"bad doc","code":"E1","description":"invalid field"}"#;
        let error: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(error.error_message, "bad doc");
        assert_eq!(error.code, "E1");
        assert_eq!(error.description, "invalid field");
    }
}
