use super::*;

#[test]
fn round_trip_through_memory() {
    let vm = run_code(vec![
        li!(A0, 0xDEAD_BEEFu32),
        store!(Word, 8, ZERO, A0),
        load!(Word, A1, 8, ZERO),
    ]);
    assert_eq!(vm.register(RegisterId::A1), 0xDEAD_BEEF);
}

#[test]
fn misaligned_address_is_fatal() {
    let err = run_code_err(vec![load!(Word, A0, 2, ZERO)]);
    assert!(matches!(
        err,
        ExecError::Memory(MemoryError::Misaligned {
            address: 2,
            alignment: 4
        })
    ));
}

#[test]
fn out_of_range_address_is_fatal() {
    let err = run_code_err(vec![load!(Word, A0, 2048, ZERO)]);
    assert!(matches!(err, ExecError::Memory(MemoryError::OutOfRange { .. })));
}
