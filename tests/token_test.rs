//! Session token property tests
//!
//! Checks the issue/verify pair across the whole input space rather than a
//! few handpicked values: any subject id with any positive lifetime must
//! round-trip, and no tampered or outlived token may verify.

use assert_matches::assert_matches;
use chrono::Duration;
use proptest::prelude::*;
use uuid::Uuid;
use weathersnap::auth::{TokenError, TokenIssuer};

proptest! {
    #[test]
    fn verify_returns_issued_subject(bytes in any::<[u8; 16]>(), ttl_secs in 1i64..86_400) {
        let issuer = TokenIssuer::new("property-secret", Duration::seconds(ttl_secs));
        let user_id = Uuid::from_bytes(bytes);

        let token = issuer.issue(user_id).unwrap();
        prop_assert_eq!(issuer.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn clipped_signature_never_verifies(bytes in any::<[u8; 16]>()) {
        let issuer = TokenIssuer::new("property-secret", Duration::seconds(3600));

        let mut token = issuer.issue(Uuid::from_bytes(bytes)).unwrap();
        token.pop();
        prop_assert!(issuer.verify(&token).is_err());
    }

    #[test]
    fn outlived_tokens_report_expired(ttl_secs in -86_400i64..=-1) {
        let issuer = TokenIssuer::new("property-secret", Duration::seconds(ttl_secs));

        let token = issuer.issue(Uuid::new_v4()).unwrap();
        prop_assert!(matches!(issuer.verify(&token), Err(TokenError::Expired)));
    }
}

#[test]
fn test_issuers_sharing_a_secret_accept_each_other() {
    let first = TokenIssuer::new("shared-secret", Duration::hours(1));
    let second = TokenIssuer::new("shared-secret", Duration::hours(2));
    let user_id = Uuid::new_v4();

    let token = first.issue(user_id).unwrap();
    assert_eq!(second.verify(&token).unwrap(), user_id);
}

#[test]
fn test_issuers_with_different_secrets_reject_each_other() {
    let first = TokenIssuer::new("first-secret", Duration::hours(1));
    let second = TokenIssuer::new("second-secret", Duration::hours(1));

    let token = first.issue(Uuid::new_v4()).unwrap();
    assert_matches!(second.verify(&token), Err(TokenError::Invalid));
}
