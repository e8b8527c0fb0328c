use crate::providers::jwt::{sign_access_token, verify_access_token, AccessTokenClaims};

const SECRET: &str = "jwt_secret";

#[test]
fn should_round_trip_claims_through_sign_and_verify() {
    let sub = bson::oid::ObjectId::new().to_hex();
    let token = sign_access_token(
        AccessTokenClaims {
            sub: sub.clone(),
            exp: 2000000000,
        },
        SECRET,
    )
    .unwrap();

    let claims = verify_access_token(&token, SECRET).unwrap();
    assert_eq!(claims.sub, sub);
    assert_eq!(claims.exp, 2000000000);
}

#[test]
fn should_fail_to_verify_with_the_wrong_secret() {
    let token = sign_access_token(
        AccessTokenClaims {
            sub: bson::oid::ObjectId::new().to_hex(),
            exp: 2000000000,
        },
        SECRET,
    )
    .unwrap();

    assert!(verify_access_token(&token, "another_secret").is_err());
}

#[test]
fn should_fail_to_verify_a_tampered_token() {
    let token = sign_access_token(
        AccessTokenClaims {
            sub: bson::oid::ObjectId::new().to_hex(),
            exp: 2000000000,
        },
        SECRET,
    )
    .unwrap();

    let mut tampered = token.clone();
    tampered.truncate(token.len() - 2);
    assert!(verify_access_token(&tampered, SECRET).is_err());
}

#[test]
fn should_fail_to_verify_garbage() {
    assert!(verify_access_token("not_a_token", SECRET).is_err());
}
