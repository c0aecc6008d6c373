use super::*;

#[test]
fn zero_extends() {
    let vm = run_code(vec![
        li!(A0, 0xFFu32),
        store!(Byte, 9, ZERO, A0),
        load!(ByteUnsigned, A1, 9, ZERO),
    ]);
    assert_eq!(vm.register(RegisterId::A1), 0xFF);
}
