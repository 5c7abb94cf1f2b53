//! # Validation Under Concurrent Mutation
//!
//! Validation requests run read-mostly against the shared ledger while
//! the application path occasionally takes the write side. Each request
//! must observe a consistent snapshot and reach a definite verdict.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use elysium_codec::encode_create_denomination;
    use elysium_engine::{apply_create_denomination, create_denomination, ValidationError};
    use elysium_registry::{DenominationView, LedgerState};
    use elysium_types::{DenominationValue, PropertyId, SigmaStatus};

    const APPLIED_VALUES: u64 = 32;
    const READER_THREADS: usize = 4;
    const READER_ITERATIONS: u64 = 200;

    fn sigma_ledger() -> (Arc<LedgerState>, PropertyId) {
        let ledger = Arc::new(LedgerState::with_defaults());
        let property = ledger.create_property("Sigma", SigmaStatus::SoftEnabled);
        (ledger, property)
    }

    #[test]
    fn test_concurrent_validation_while_applying() {
        let (ledger, property) = sigma_ledger();

        let writer = {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                for value in 1..=APPLIED_VALUES {
                    let payload =
                        encode_create_denomination(property, DenominationValue::new(value));
                    apply_create_denomination(ledger.as_ref(), &payload)
                        .expect("application must not race itself");
                }
            })
        };

        let readers: Vec<_> = (0..READER_THREADS)
            .map(|seed| {
                let ledger = Arc::clone(&ledger);
                thread::spawn(move || {
                    for i in 0..READER_ITERATIONS {
                        let value = DenominationValue::new(1 + (i + seed as u64) % APPLIED_VALUES);
                        let view = ledger.view();
                        match create_denomination(&view, property, value) {
                            // Not applied yet from this snapshot's point of view.
                            Ok(payload) => assert_eq!(payload.len(), 16),
                            Err(ValidationError::DenominationAlreadyExists(existing)) => {
                                assert_eq!(existing, value)
                            }
                            Err(other) => panic!("unexpected rejection: {other}"),
                        }
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }

        // Quiesced state: every applied value is registered exactly once.
        let registered = ledger.list(property);
        assert_eq!(registered.len(), APPLIED_VALUES as usize);
        for value in 1..=APPLIED_VALUES {
            assert!(ledger.contains(property, DenominationValue::new(value)));
        }

        // And validation now gives the settled answers.
        let err = create_denomination(ledger.as_ref(), property, DenominationValue::new(1))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DenominationAlreadyExists(DenominationValue::new(1))
        );
        create_denomination(
            ledger.as_ref(),
            property,
            DenominationValue::new(APPLIED_VALUES + 1),
        )
        .unwrap();
    }
}
