//! Unit tests for token issuance and verification

use chrono::{Duration, Utc};

use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::TokenError;
use crate::services::token::{TokenIssuer, TokenIssuerConfig};
use cr_shared::config::{JwtConfig, MAX_ACCESS_TOKEN_EXPIRY_SECONDS};

const SECRET: &str = "test-secret-key-for-token-issuer";

fn create_test_issuer() -> TokenIssuer {
    TokenIssuer::new(TokenIssuerConfig::new(SECRET)).expect("Failed to create token issuer")
}

/// Replaces one character in the middle of the claims segment
fn tamper_claims(payload: &str) -> String {
    let parts: Vec<&str> = payload.split('.').collect();
    assert_eq!(parts.len(), 3);

    let mut claims: Vec<char> = parts[1].chars().collect();
    let idx = claims.len() / 2;
    claims[idx] = if claims[idx] == 'A' { 'B' } else { 'A' };
    let claims: String = claims.into_iter().collect();

    format!("{}.{}.{}", parts[0], claims, parts[2])
}

/// Replaces the character at `idx`
fn replace_char(payload: &str, idx: usize) -> String {
    payload
        .char_indices()
        .map(|(i, c)| {
            if i == idx {
                if c == 'A' {
                    'B'
                } else {
                    'A'
                }
            } else {
                c
            }
        })
        .collect()
}

#[test]
fn test_issue_and_verify_round_trip() {
    let issuer = create_test_issuer();
    let token = issuer.issue("user@example.com").unwrap();

    assert_eq!(token.subject, "user@example.com");
    assert_eq!(token.expires_at - token.issued_at, Duration::hours(1));
    assert_eq!(issuer.verify(&token.payload).unwrap(), "user@example.com");
}

#[test]
fn test_verify_claims_contents() {
    let issuer = create_test_issuer();
    let token = issuer.issue("user@example.com").unwrap();
    let claims = issuer.verify_claims(&token.payload).unwrap();

    assert_eq!(claims.sub, "user@example.com");
    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(claims.aud, JWT_AUDIENCE);
    assert_eq!(claims.iat, token.issued_at.timestamp());
    assert_eq!(claims.exp, token.expires_at.timestamp());
    assert!(!claims.jti.is_empty());
}

#[test]
fn test_tokens_are_unique() {
    let issuer = create_test_issuer();
    let first = issuer.issue("user@example.com").unwrap();
    let second = issuer.issue("user@example.com").unwrap();
    assert_ne!(first.payload, second.payload);
}

#[test]
fn test_tampered_token_reports_signature_mismatch() {
    let issuer = create_test_issuer();
    let token = issuer.issue("user@example.com").unwrap();

    let tampered = tamper_claims(&token.payload);
    assert_ne!(tampered, token.payload);
    assert_eq!(issuer.verify(&tampered), Err(TokenError::InvalidSignature));
}

#[test]
fn test_tampered_header_reports_signature_mismatch() {
    let issuer = create_test_issuer();
    let token = issuer.issue("user@example.com").unwrap();
    let header_len = token.payload.find('.').unwrap();

    for idx in 0..header_len {
        let tampered = replace_char(&token.payload, idx);
        assert_eq!(
            issuer.verify(&tampered),
            Err(TokenError::InvalidSignature),
            "header position {}",
            idx
        );
    }
}

#[test]
fn test_any_altered_character_reports_signature_mismatch() {
    let issuer = create_test_issuer();
    let token = issuer.issue("user@example.com").unwrap();

    for (idx, c) in token.payload.char_indices() {
        if c == '.' {
            continue;
        }
        let tampered = replace_char(&token.payload, idx);
        assert_eq!(
            issuer.verify(&tampered),
            Err(TokenError::InvalidSignature),
            "position {}",
            idx
        );
    }
}

#[test]
fn test_token_from_other_key_rejected() {
    let issuer = create_test_issuer();
    let other = TokenIssuer::new(TokenIssuerConfig::new("a-completely-different-secret")).unwrap();
    let token = other.issue("user@example.com").unwrap();

    assert_eq!(issuer.verify(&token.payload), Err(TokenError::InvalidSignature));
}

#[test]
fn test_expired_token_rejected() {
    let issuer = create_test_issuer();
    let token = issuer
        .issue_at("user@example.com", Utc::now() - Duration::hours(2))
        .unwrap();

    let err = issuer.verify(&token.payload).unwrap_err();
    assert_eq!(err, TokenError::TokenExpired);
    assert!(err.requires_reauthentication());
}

#[test]
fn test_future_token_not_yet_valid() {
    let issuer = create_test_issuer();
    let token = issuer
        .issue_at("user@example.com", Utc::now() + Duration::minutes(10))
        .unwrap();

    assert_eq!(issuer.verify(&token.payload), Err(TokenError::TokenNotYetValid));
}

#[test]
fn test_leeway_tolerates_clock_skew() {
    let mut config = TokenIssuerConfig::new(SECRET);
    config.leeway_seconds = 120;
    let issuer = TokenIssuer::new(config).unwrap();

    let token = issuer
        .issue_at("user@example.com", Utc::now() - Duration::hours(1) - Duration::seconds(30))
        .unwrap();
    assert_eq!(issuer.verify(&token.payload).unwrap(), "user@example.com");
}

#[test]
fn test_wrong_issuer_rejected() {
    let issuer = create_test_issuer();
    let mut config = TokenIssuerConfig::new(SECRET);
    config.issuer = "someone-else".to_string();
    let foreign = TokenIssuer::new(config).unwrap();

    let token = foreign.issue("user@example.com").unwrap();
    assert_eq!(issuer.verify(&token.payload), Err(TokenError::InvalidClaims));
}

#[test]
fn test_wrong_audience_rejected() {
    let issuer = create_test_issuer();
    let now = Utc::now();
    let mut claims =
        Claims::new("user@example.com", now, Duration::hours(1), JWT_ISSUER, JWT_AUDIENCE).unwrap();
    claims.aud = "another-api".to_string();

    let payload = issuer.encode_jwt(&claims).unwrap();
    assert_eq!(issuer.verify(&payload), Err(TokenError::InvalidClaims));
}

#[test]
fn test_malformed_tokens_rejected() {
    let issuer = create_test_issuer();

    for payload in ["", "not-a-token", "a.b", "a.b.c", "...."] {
        let err = issuer.verify(payload).unwrap_err();
        assert!(
            matches!(err, TokenError::InvalidTokenFormat | TokenError::InvalidSignature),
            "unexpected {:?} for {:?}",
            err,
            payload
        );
        assert!(!err.requires_reauthentication());
    }
    assert_eq!(issuer.verify("not-a-token"), Err(TokenError::InvalidTokenFormat));
    assert_eq!(issuer.verify("a.b"), Err(TokenError::InvalidTokenFormat));
}

#[test]
fn test_empty_subject_rejected() {
    let issuer = create_test_issuer();
    assert!(matches!(
        issuer.issue(""),
        Err(TokenError::MissingClaim { ref claim }) if claim == "sub"
    ));
    assert!(issuer.issue("   ").is_err());
}

#[test]
fn test_missing_secret_is_fatal() {
    let result = TokenIssuer::new(TokenIssuerConfig::new(""));
    assert!(matches!(result, Err(TokenError::SigningKeyUnavailable { .. })));
}

#[test]
fn test_non_positive_lifetime_rejected() {
    let result = TokenIssuer::new(TokenIssuerConfig::new(SECRET).with_lifetime_seconds(0));
    assert!(matches!(result, Err(TokenError::InvalidLifetime { seconds: 0 })));
}

#[test]
fn test_oversized_lifetime_rejected_at_construction() {
    for seconds in [
        MAX_ACCESS_TOKEN_EXPIRY_SECONDS + 1,
        10_000_000_000_000,
        i64::MAX,
    ] {
        let result = TokenIssuer::new(TokenIssuerConfig::new(SECRET).with_lifetime_seconds(seconds));
        assert!(
            matches!(result, Err(TokenError::InvalidLifetime { seconds: s }) if s == seconds),
            "lifetime {} accepted",
            seconds
        );
    }

    let issuer = TokenIssuer::new(
        TokenIssuerConfig::new(SECRET).with_lifetime_seconds(MAX_ACCESS_TOKEN_EXPIRY_SECONDS),
    )
    .unwrap();
    assert!(issuer.issue("user@example.com").is_ok());
}

#[test]
fn test_issue_far_in_future_reports_invalid_lifetime() {
    let issuer = create_test_issuer();
    let result = issuer.issue_at("user@example.com", chrono::DateTime::<Utc>::MAX_UTC);
    assert!(matches!(result, Err(TokenError::InvalidLifetime { .. })));
}

#[test]
fn test_from_jwt_config() {
    let jwt = JwtConfig::new("configured-secret").with_access_expiry_minutes(15);
    let config = TokenIssuerConfig::from(&jwt);

    assert_eq!(config.lifetime_seconds, 900);
    assert_eq!(config.issuer, jwt.issuer);

    let issuer = TokenIssuer::new(config).unwrap();
    assert_eq!(issuer.lifetime(), Duration::minutes(15));
}

#[test]
fn test_debug_output_hides_secret() {
    let issuer = create_test_issuer();
    assert!(!format!("{:?}", issuer).contains(SECRET));
}

#[test]
fn test_concurrent_issue_and_verify() {
    let issuer = std::sync::Arc::new(create_test_issuer());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let issuer = issuer.clone();
            std::thread::spawn(move || {
                let subject = format!("user{}@example.com", i);
                let token = issuer.issue(&subject).unwrap();
                issuer.verify(&token.payload).unwrap() == subject
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
