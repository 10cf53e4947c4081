use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use proptest::prelude::*;
use serde_json::{Map, Value};
use tokenmint::{TokenError, TokenFormat, TokenIssuer};

const SECRET: &str = "property-secret";

fn data_with_uid(uid: &str) -> Map<String, Value> {
    let mut data = Map::new();
    data.insert("uid".to_string(), Value::String(uid.to_string()));
    data
}

fn decode_claims(token: &str) -> Value {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    decode::<Value>(token, &DecodingKey::from_secret(SECRET.as_bytes()), &validation)
        .unwrap()
        .claims
}

fn any_format() -> impl Strategy<Value = TokenFormat> {
    prop_oneof![Just(TokenFormat::Legacy), Just(TokenFormat::Current)]
}

proptest! {
    #[test]
    fn valid_current_uids_are_issued(uid in "[A-Za-z0-9:-]{1,64}") {
        let token = TokenIssuer::current(SECRET).set_data(data_with_uid(&uid)).create().unwrap();
        let claims = decode_claims(&token);
        prop_assert_eq!(&claims["uid"], &Value::String(uid));
        prop_assert_eq!(&claims["v"], &Value::from(1));
        prop_assert!(claims.get("iat").is_some());
        prop_assert!(claims.get("claims").is_none());
    }

    #[test]
    fn valid_legacy_uids_are_issued(uid in "\\PC{1,64}") {
        let token = TokenIssuer::legacy(SECRET).set_data(data_with_uid(&uid)).create().unwrap();
        let claims = decode_claims(&token);
        prop_assert_eq!(&claims["d"]["uid"], &Value::String(uid));
        prop_assert_eq!(&claims["v"], &Value::from(0));
    }

    #[test]
    fn current_uids_with_other_characters_are_rejected(
        prefix in "[A-Za-z0-9]{0,10}",
        bad in "[^A-Za-z0-9:-]",
        suffix in "[A-Za-z0-9]{0,10}",
    ) {
        let uid = format!("{prefix}{bad}{suffix}");
        let result = TokenIssuer::current(SECRET).set_data(data_with_uid(&uid)).create();
        prop_assert_eq!(result, Err(TokenError::InvalidSubject { uid }));
    }

    #[test]
    fn over_long_uids_are_rejected(format in any_format(), extra in 1usize..64) {
        let limit = format.max_uid_bytes();
        let uid = "a".repeat(limit + extra);
        let result = TokenIssuer::new(SECRET, format).set_data(data_with_uid(&uid)).create();
        prop_assert_eq!(result, Err(TokenError::SubjectTooLong { limit, actual: limit + extra }));
    }

    #[test]
    fn admin_without_uid_is_issued(format in any_format(), debug in any::<bool>()) {
        let result = TokenIssuer::new(SECRET, format).admin(true).debug(debug).create();
        prop_assert!(result.is_ok());
    }

    #[test]
    fn non_admin_without_uid_is_rejected(format in any_format(), key in "[a-z]{1,8}") {
        prop_assume!(key != "uid");
        let mut data = Map::new();
        data.insert(key, Value::Bool(true));
        let result = TokenIssuer::new(SECRET, format).set_data(data).create();
        prop_assert_eq!(result, Err(TokenError::MissingSubject));
    }

    #[test]
    fn timestamps_surface_as_epoch_seconds(
        format in any_format(),
        exp in 0i64..4_102_444_800,
        nbf in 0i64..4_102_444_800,
    ) {
        let token = TokenIssuer::new(SECRET, format)
            .set_data(data_with_uid("alice-1"))
            .set_option("expires", exp)
            .unwrap()
            .set_option("notBefore", nbf)
            .unwrap()
            .create()
            .unwrap();
        let claims = decode_claims(&token);
        prop_assert_eq!(&claims["exp"], &Value::from(exp));
        prop_assert_eq!(&claims["nbf"], &Value::from(nbf));
    }
}
