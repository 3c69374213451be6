//! Header handling tests
//!
//! The header carries `alg`, an optional `cty` and `typ`. Other members are
//! ignored on load and dropped when the token is re-encoded.

use jwtseal::*;

fn encode_token(header: &str, payload: &str) -> String {
    format!(
        "{}.{}.sig",
        jwtseal::utils::base64url::encode(header),
        jwtseal::utils::base64url::encode(payload)
    )
}

#[test]
fn test_default_header() {
    let token = Token::new();
    assert_eq!(token.header.algorithm, "HS256");
    assert_eq!(token.header.token_type, TYPE_JWT);
    assert!(token.header.content_type.is_empty());
}

#[test]
fn test_header_with_content_type_round_trip() {
    let jwt = TokenBuilder::new()
        .content_type("JWT")
        .subject("nested")
        .sign("secret")
        .unwrap();

    let token = Token::load(&jwt).unwrap();
    assert_eq!(token.header.content_type, "JWT");
    assert!(token.validate("secret").is_ok());
}

#[test]
fn test_header_without_optional_fields() {
    let token = Token::load(&encode_token(r#"{"alg":"HS384"}"#, "{}")).unwrap();
    assert_eq!(token.header.algorithm, "HS384");
    assert!(token.header.token_type.is_empty());
    assert!(token.header.content_type.is_empty());
}

#[test]
fn test_header_with_unknown_fields_ignored() {
    let header = r#"{"alg":"HS256","typ":"JWT","kid":"key-1","x5t":"abc","custom":{"a":1}}"#;
    let token = Token::load(&encode_token(header, "{}")).unwrap();

    assert_eq!(token.header, Header::new("HS256"));
    assert_eq!(
        token.header.to_json().unwrap(),
        r#"{"alg":"HS256","typ":"JWT"}"#
    );
}

#[test]
fn test_header_field_order_on_encode() {
    // Input order does not matter, output is always alg, cty, typ
    let header = r#"{"typ":"JWT","cty":"JWT","alg":"HS512"}"#;
    let token = Token::load(&encode_token(header, "{}")).unwrap();
    assert_eq!(
        token.header.to_json().unwrap(),
        r#"{"alg":"HS512","cty":"JWT","typ":"JWT"}"#
    );
}

#[test]
fn test_header_typ_variations() {
    for typ in ["JWT", "jwt", "at+jwt", "application/jwt"] {
        let header = format!(r#"{{"alg":"HS256","typ":"{typ}"}}"#);
        let token = Token::load(&encode_token(&header, "{}")).unwrap();
        assert_eq!(token.header.token_type, typ);
    }
}

#[test]
fn test_header_with_wrong_types() {
    let token = encode_token(r#"{"alg":256}"#, "{}");
    assert!(matches!(
        Token::load(&token),
        Err(Error::FormatInvalidJson(_))
    ));
}

#[test]
fn test_header_missing_algorithm() {
    let token = Token::load(&encode_token(r#"{"typ":"JWT"}"#, "{}")).unwrap();
    assert!(token.header.algorithm.is_empty());
    assert_eq!(
        token.validate("secret"),
        Err(Error::AlgorithmNotImplemented(String::new()))
    );
}

#[test]
fn test_auth0_style_header() {
    let header = r#"{"alg":"RS256","typ":"JWT","kid":"NjVBRjY5MDlCMUIwNzU4RTA2QzZFMDQ4QzQ2MDAyQjVDNjk1RTM2Qg"}"#;
    let token = Token::load(&encode_token(header, r#"{"sub":"auth0|123"}"#)).unwrap();
    assert_eq!(token.header.algorithm, "RS256");
    assert_eq!(token.payload.subject, "auth0|123");
}
