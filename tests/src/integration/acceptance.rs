//! # End-to-End Acceptance Flows
//!
//! Drives the command surface the way a wallet node would: set up ledger
//! state through the confirmed-transaction application path, then issue
//! `createpayload_createdenomination` calls and check both the rejection
//! messages and the exact wire bytes.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use elysium_engine::apply_create_denomination;
    use elysium_registry::LedgerState;
    use elysium_rpc::{codes, DenominationRpc};
    use elysium_types::{PropertyId, SigmaStatus};
    use serde_json::json;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Fixture {
        rpc: DenominationRpc,
        sigma: PropertyId,
        non_sigma: PropertyId,
    }

    /// One Sigma-enabled property with denomination 1 confirmed, and one
    /// property that never opted into Sigma.
    fn fixture() -> Fixture {
        let ledger = Arc::new(LedgerState::with_defaults());
        let sigma = ledger.create_property("Sigma", SigmaStatus::SoftEnabled);
        let non_sigma = ledger.create_property("Non Sigma", SigmaStatus::SoftDisabled);

        let rpc = DenominationRpc::new(ledger.clone());
        let existing = rpc
            .createpayload_createdenomination(&json!(sigma.raw()), &json!("1"))
            .expect("fixture payload");
        apply_create_denomination(ledger.as_ref(), &hex::decode(existing).unwrap())
            .expect("fixture application");

        Fixture {
            rpc,
            sigma,
            non_sigma,
        }
    }

    // =============================================================================
    // ACCEPTANCE SCENARIOS
    // =============================================================================

    /// Create payload for a non-Sigma property should throw.
    #[test]
    fn test_create_payload_for_non_sigma_property() {
        let fx = fixture();

        let err = fx
            .rpc
            .createpayload_createdenomination(&json!(fx.non_sigma.raw()), &json!("1"))
            .unwrap_err();

        assert_eq!(err.code, codes::INVALID_PARAMS);
        assert_eq!(err.message, "Property has not enabled Sigma");
    }

    /// Create payload for a non-existent property should throw.
    #[test]
    fn test_create_payload_for_missing_property() {
        let fx = fixture();

        let err = fx
            .rpc
            .createpayload_createdenomination(&json!(99), &json!("1"))
            .unwrap_err();

        assert_eq!(err.message, "Property identifier does not exist");
    }

    /// Create payload with a duplicated denomination should throw.
    #[test]
    fn test_create_payload_with_duplicated_denomination() {
        let fx = fixture();

        let err = fx
            .rpc
            .createpayload_createdenomination(&json!(fx.sigma.raw()), &json!("1"))
            .unwrap_err();

        assert!(err.message.contains("already exists"), "{}", err.message);
    }

    /// Successful create payload returns the exact wire hex.
    #[test]
    fn test_create_payload_success() {
        let fx = fixture();

        let payload = fx
            .rpc
            .createpayload_createdenomination(&json!(fx.sigma.raw()), &json!("2"))
            .unwrap();

        let raw = format!("00000401{:08x}{:016x}", fx.sigma.raw(), 2);
        assert_eq!(payload, raw);
    }

    /// Decimal-string and integer parameters are interchangeable.
    #[test]
    fn test_string_and_numeric_parameters_agree() {
        let fx = fixture();

        let from_strings = fx
            .rpc
            .createpayload_createdenomination(
                &json!(fx.sigma.raw().to_string()),
                &json!("2"),
            )
            .unwrap();
        let from_numbers = fx
            .rpc
            .createpayload_createdenomination(&json!(fx.sigma.raw()), &json!(2))
            .unwrap();

        assert_eq!(from_strings, from_numbers);
    }

    /// The fixture denomination shows up in listing, in registration order.
    #[test]
    fn test_listdenominations_reflects_confirmed_state() {
        let fx = fixture();

        let denominations = fx.rpc.listdenominations(&json!(fx.sigma.raw())).unwrap();
        assert_eq!(denominations, vec!["1"]);

        // Payload creation alone must not extend the listing.
        fx.rpc
            .createpayload_createdenomination(&json!(fx.sigma.raw()), &json!("2"))
            .unwrap();
        let denominations = fx.rpc.listdenominations(&json!(fx.sigma.raw())).unwrap();
        assert_eq!(denominations, vec!["1"]);
    }
}
