use super::*;

#[test]
fn zero_extends() {
    let vm = run_code(vec![
        li!(A0, 0x8000u32),
        store!(Half, 4, ZERO, A0),
        load!(HalfUnsigned, A1, 4, ZERO),
    ]);
    assert_eq!(vm.register(RegisterId::A1), 0x8000);
}
