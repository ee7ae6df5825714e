//! Ordered validation of a registration form.
//!
//! The API path stops at the first failing [`Rule`] and reports its
//! [`Rule::api_message`]. The aggregate path ([`validate_all`]) evaluates
//! every rule and collects the shorter [`Rule::ui_message`] strings shown by
//! the browser client.

use serde::{Deserialize, Deserializer};

use super::fields;

/// Raw registration body. Every field is optional so that a missing value
/// reaches the matching rule instead of failing deserialization.
///
/// Text fields holding a non-string JSON value (a number, `true`, an object)
/// read as absent, so the body still parses and the rule for that field
/// reports it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default, deserialize_with = "lenient_string")]
    pub firstname: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub lastname: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: Option<String>,
    pub role: Option<RoleValue>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Ok(Some(value)),
        _ => Ok(None),
    }
}

/// A role as sent by clients: either a JSON integer or a string.
///
/// Anything else (floats, booleans, objects) lands in `Other` and is
/// rejected by the role rule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RoleValue {
    Integer(i64),
    Text(String),
    Other(serde_json::Value),
}

impl RoleValue {
    /// The role priority, if the value is a whole number in range.
    pub fn priority(&self) -> Option<i16> {
        match self {
            RoleValue::Integer(n) => fields::parse_role(&n.to_string()),
            RoleValue::Text(s) => fields::parse_role(s),
            RoleValue::Other(_) => None,
        }
    }
}

/// Registration fields that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRegistration {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: i16,
}

/// One registration rule, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Email,
    Presence,
    Phone,
    Password,
    Role,
}

impl Rule {
    /// Evaluation order. The first failing rule decides the API response.
    pub const ORDER: [Rule; 5] = [
        Rule::Email,
        Rule::Presence,
        Rule::Phone,
        Rule::Password,
        Rule::Role,
    ];

    pub fn api_message(self) -> &'static str {
        match self {
            Rule::Email => "Invalid or missing email  - please refer to documentation",
            Rule::Presence => "Missing required information",
            Rule::Phone => "Invalid or missing phone number  - please refer to documentation",
            Rule::Password => "Invalid or missing password  - please refer to documentation",
            Rule::Role => "Invalid or missing role  - please refer to documentation",
        }
    }

    pub fn ui_message(self) -> &'static str {
        match self {
            Rule::Email => "Invalid email format",
            Rule::Presence => "Missing required information",
            Rule::Phone => "Invalid phone number format.",
            Rule::Password => "Password does not meet the requirements.",
            Rule::Role => "Invalid role format.",
        }
    }

    pub fn check(self, form: &RegistrationForm) -> bool {
        match self {
            Rule::Email => form.email.as_deref().is_some_and(fields::is_valid_email),
            Rule::Presence => [&form.firstname, &form.lastname, &form.username]
                .into_iter()
                .all(|f| fields::is_provided(f.as_deref())),
            Rule::Phone => form.phone.as_deref().is_some_and(fields::is_valid_phone),
            Rule::Password => form
                .password
                .as_deref()
                .is_some_and(fields::is_valid_password),
            Rule::Role => form.role.as_ref().and_then(RoleValue::priority).is_some(),
        }
    }
}

/// Run the rules in [`Rule::ORDER`], stopping at the first failure.
pub fn validate_registration(form: &RegistrationForm) -> Result<ValidatedRegistration, Rule> {
    if let Some(failed) = Rule::ORDER.into_iter().find(|rule| !rule.check(form)) {
        return Err(failed);
    }

    Ok(ValidatedRegistration {
        firstname: required(&form.firstname, Rule::Presence)?,
        lastname: required(&form.lastname, Rule::Presence)?,
        username: required(&form.username, Rule::Presence)?,
        email: required(&form.email, Rule::Email)?,
        password: required(&form.password, Rule::Password)?,
        phone: required(&form.phone, Rule::Phone)?,
        role: form
            .role
            .as_ref()
            .and_then(RoleValue::priority)
            .ok_or(Rule::Role)?,
    })
}

/// Evaluate every rule and return the UI message of each failure, in order.
pub fn validate_all(form: &RegistrationForm) -> Vec<&'static str> {
    Rule::ORDER
        .into_iter()
        .filter(|rule| !rule.check(form))
        .map(Rule::ui_message)
        .collect()
}

fn required(value: &Option<String>, rule: Rule) -> Result<String, Rule> {
    value.clone().ok_or(rule)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            firstname: Some("Ada".into()),
            lastname: Some("Lovelace".into()),
            username: Some("ada".into()),
            email: Some("ada@example.com".into()),
            password: Some("Abcdef1!".into()),
            role: Some(RoleValue::Text("3".into())),
            phone: Some("253-555-0100".into()),
        }
    }

    #[test]
    fn valid_form_passes() {
        let validated = validate_registration(&valid_form()).expect("form should validate");
        assert_eq!(validated.username, "ada");
        assert_eq!(validated.role, 3);
    }

    #[test]
    fn revalidating_accepted_form_still_passes() {
        let form = valid_form();
        let first = validate_registration(&form);
        let second = validate_registration(&form);
        assert_eq!(first, second);
        assert!(second.is_ok());
    }

    #[test]
    fn empty_form_fails_on_email_first() {
        assert_matches!(
            validate_registration(&RegistrationForm::default()),
            Err(Rule::Email)
        );
    }

    #[test]
    fn first_failure_wins() {
        let form = RegistrationForm {
            firstname: None,
            password: Some("weak".into()),
            ..valid_form()
        };
        assert_matches!(validate_registration(&form), Err(Rule::Presence));
    }

    #[test]
    fn each_rule_is_reported() {
        let cases = [
            (
                RegistrationForm {
                    email: Some("a@b".into()),
                    ..valid_form()
                },
                Rule::Email,
            ),
            (
                RegistrationForm {
                    username: Some(String::new()),
                    ..valid_form()
                },
                Rule::Presence,
            ),
            (
                RegistrationForm {
                    phone: Some("12345".into()),
                    ..valid_form()
                },
                Rule::Phone,
            ),
            (
                RegistrationForm {
                    password: Some("password12345".into()),
                    ..valid_form()
                },
                Rule::Password,
            ),
            (
                RegistrationForm {
                    role: Some(RoleValue::Text("6".into())),
                    ..valid_form()
                },
                Rule::Role,
            ),
        ];

        for (form, expected) in cases {
            assert_eq!(validate_registration(&form), Err(expected));
        }
    }

    #[test]
    fn role_accepts_integer_and_string() {
        assert_eq!(RoleValue::Integer(5).priority(), Some(5));
        assert_eq!(RoleValue::Text("1".into()).priority(), Some(1));
        assert_eq!(RoleValue::Integer(0).priority(), None);
        assert_eq!(RoleValue::Text("3.5".into()).priority(), None);
    }

    #[test]
    fn role_deserializes_from_any_json_shape() {
        let form: RegistrationForm =
            serde_json::from_str(r#"{"role": 3.5}"#).expect("body should parse");
        assert_matches!(form.role, Some(RoleValue::Other(_)));
        assert!(!Rule::Role.check(&form));

        let form: RegistrationForm =
            serde_json::from_str(r#"{"role": 2}"#).expect("body should parse");
        assert_eq!(form.role, Some(RoleValue::Integer(2)));
    }

    #[test]
    fn non_string_text_fields_read_as_missing() {
        let form: RegistrationForm = serde_json::from_str(
            r#"{"email": "ada@example.com", "firstname": 42, "phone": 2535550100, "lastname": null}"#,
        )
        .expect("body should parse");

        assert_eq!(form.email.as_deref(), Some("ada@example.com"));
        assert_eq!(form.firstname, None);
        assert_eq!(form.lastname, None);
        assert_eq!(form.phone, None);
        assert_eq!(form.username, None);
    }

    #[test]
    fn numeric_phone_fails_the_phone_rule() {
        let mut body = serde_json::json!({
            "firstname": "Ada",
            "lastname": "Lovelace",
            "username": "ada",
            "email": "ada@example.com",
            "password": "Abcdef1!",
            "role": 3,
        });
        body["phone"] = serde_json::json!(2535550100u64);
        let form: RegistrationForm = serde_json::from_value(body).expect("body should parse");

        assert_matches!(validate_registration(&form), Err(Rule::Phone));
    }

    #[test]
    fn validate_all_collects_every_failure() {
        let form = RegistrationForm {
            email: Some("nope".into()),
            phone: None,
            role: Some(RoleValue::Text("0".into())),
            ..valid_form()
        };
        assert_eq!(
            validate_all(&form),
            vec![
                "Invalid email format",
                "Invalid phone number format.",
                "Invalid role format.",
            ]
        );
        assert!(validate_all(&valid_form()).is_empty());
    }
}
