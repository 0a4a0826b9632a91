use crate::{ApplicationForm, ContactInfo, CoreError};

fn valid_form() -> ApplicationForm {
    ApplicationForm {
        student_name: "Asha".into(),
        father_name: "Vikram".into(),
        city: "Nagpur".into(),
        age: "10".into(),
        contact_number: "99887".into(),
        course_selected: "basic".into(),
        referred_by: "".into(),
    }
}

fn validation_message(form: &ApplicationForm) -> String {
    match form.validate() {
        Err(CoreError::Validation { message, .. }) => message,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_valid_form_when_validate_then_builds_application() {
    let application = valid_form().validate().unwrap();

    assert_eq!(application.name, "Asha");
    assert_eq!(application.course_selected, "basic");
    assert_eq!(application.referred_by, None);

    let contact = ContactInfo::parse(&application.contact_info);
    assert_eq!(contact.father_name, "Vikram");
    assert_eq!(contact.city, "Nagpur");
    assert_eq!(contact.age, "10");
    assert_eq!(contact.contact_number, "99887");
}

#[test]
fn given_referrer_with_spaces_when_validate_then_trimmed() {
    let mut form = valid_form();
    form.referred_by = "  Mia ".into();

    let application = form.validate().unwrap();

    assert_eq!(application.referred_by.as_deref(), Some("Mia"));
}

#[test]
fn given_missing_fields_when_validate_then_first_failure_reported() {
    let mut form = valid_form();
    form.student_name = " ".into();
    form.city = "".into();
    assert_eq!(validation_message(&form), "Please enter student name");

    let mut form = valid_form();
    form.father_name = "".into();
    assert_eq!(validation_message(&form), "Please enter father name");

    let mut form = valid_form();
    form.city = "".into();
    assert_eq!(validation_message(&form), "Please enter city");

    let mut form = valid_form();
    form.contact_number = "".into();
    assert_eq!(validation_message(&form), "Please enter contact number");

    let mut form = valid_form();
    form.course_selected = "".into();
    assert_eq!(validation_message(&form), "Please select a course");
}

#[test]
fn given_bad_age_when_validate_then_error() {
    for age in ["", "abc", "0", "-4"] {
        let mut form = valid_form();
        form.age = age.into();
        assert_eq!(validation_message(&form), "Please enter a valid age");
    }
}
