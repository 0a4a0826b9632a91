use crate::ContactInfo;

#[test]
fn given_json_payload_when_parse_then_fields_extracted() {
    let raw = r#"{"fatherName":"Raj","city":"Pune","age":11,"contactNumber":"98765"}"#;

    let info = ContactInfo::parse(raw);

    assert_eq!(info.father_name, "Raj");
    assert_eq!(info.city, "Pune");
    assert_eq!(info.age, "11");
    assert_eq!(info.contact_number, "98765");
}

#[test]
fn given_plain_phone_number_when_parse_then_falls_back() {
    let info = ContactInfo::parse("+91 733 020 2733");

    assert_eq!(info.father_name, "N/A");
    assert_eq!(info.city, "N/A");
    assert_eq!(info.age, "N/A");
    assert_eq!(info.contact_number, "+91 733 020 2733");
}

#[test]
fn given_partial_json_when_parse_then_missing_fields_not_available() {
    let info = ContactInfo::parse(r#"{"city":"Delhi"}"#);

    assert_eq!(info.city, "Delhi");
    assert_eq!(info.father_name, "N/A");
    assert_eq!(info.contact_number, "N/A");
}

#[test]
fn given_numeric_age_when_encode_then_age_written_as_number() {
    let info = ContactInfo {
        father_name: "Raj".into(),
        city: "Pune".into(),
        age: "12".into(),
        contact_number: "555".into(),
    };

    let encoded = info.encode().unwrap();

    assert!(encoded.contains(r#""age":12"#));
    assert_eq!(ContactInfo::parse(&encoded), info);
}

#[test]
fn test_matches_is_case_insensitive_on_father_and_city() {
    let info = ContactInfo::parse(r#"{"fatherName":"Raj Kumar","city":"Pune"}"#);

    assert!(info.matches("kumar"));
    assert!(info.matches("pun"));
    assert!(!info.matches("mumbai"));
}
