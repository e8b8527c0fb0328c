use crate::providers::jwt::{sign_access_token, AccessTokenClaims};

const SECRET: &str = "jwt_secret";

#[test]
fn should_succeed_to_sign_access_token() {
    let token = sign_access_token(
        AccessTokenClaims {
            sub: bson::oid::ObjectId::new().to_hex(),
            exp: 0,
        },
        SECRET,
    )
    .unwrap();
    assert_eq!(token.split('.').count(), 3);
}

#[test]
fn should_sign_identical_claims_identically() {
    let claims = AccessTokenClaims {
        sub: "67b66b733461bada3a2e8153".to_string(),
        exp: 1000,
    };
    let first = sign_access_token(claims.clone(), SECRET).unwrap();
    let second = sign_access_token(claims, SECRET).unwrap();
    assert_eq!(first, second);
}
