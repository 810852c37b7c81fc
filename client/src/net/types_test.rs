use super::*;

#[test]
fn login_response_reads_user_data_field() {
    let raw = r#"{"token":"abc","userData":{"name":"Ada","email":"ada@gmail.com"}}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "abc");
    assert_eq!(resp.user_data["name"], "Ada");
}

#[test]
fn login_response_without_user_data_defaults_to_null() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
    assert!(resp.user_data.is_null());
}

#[test]
fn register_request_serializes_camel_case_without_confirmation() {
    let req = RegisterRequest {
        email: "ada@gmail.com".to_owned(),
        password: "secret".to_owned(),
        name: "Ada".to_owned(),
        phone_number: "12345678".to_owned(),
        dob: NaiveDate::from_ymd_opt(1990, 4, 2).unwrap(),
        gender: Gender::Female,
        country: "Finland".to_owned(),
        image: "avatar.png".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["phoneNumber"], "12345678");
    assert_eq!(value["dob"], "1990-04-02");
    assert_eq!(value["gender"], "female");
    assert!(value.get("confirmPassword").is_none());
    assert!(value.get("phone_number").is_none());
}

#[test]
fn gender_from_form_value_accepts_only_known_values() {
    assert_eq!(Gender::from_form_value("male"), Some(Gender::Male));
    assert_eq!(Gender::from_form_value("female"), Some(Gender::Female));
    assert_eq!(Gender::from_form_value("Male"), None);
    assert_eq!(Gender::from_form_value(""), None);
}

#[test]
fn error_body_message_is_optional() {
    let with: ErrorBody = serde_json::from_str(r#"{"message":"Token expired"}"#).unwrap();
    assert_eq!(with.message.as_deref(), Some("Token expired"));
    let without: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(without.message, None);
}

#[test]
fn country_table_parses_id_to_name_mapping() {
    let table: CountryTable = serde_json::from_str(r#"{"FI":"Finland","SE":"Sweden"}"#).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("FI").map(String::as_str), Some("Finland"));
}

#[test]
fn order_parses_backend_listing_shape() {
    let raw = r#"{
        "id": 7,
        "orderNumber": "A-1001",
        "orderDate": "2025-03-14",
        "items": [
            {"id": 1, "rawName": "Oat milk", "weightOrVolume": "1 l", "generalName": "milk", "foodType": "dairy", "quantity": 2},
            {"id": 2, "rawName": "Bananas", "quantity": 6}
        ]
    }"#;
    let order: Order = serde_json::from_str(raw).unwrap();
    assert_eq!(order.order_number, "A-1001");
    assert_eq!(order.order_date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].weight_or_volume.as_deref(), Some("1 l"));
    assert_eq!(order.items[1].general_name, None);
}
