use super::*;

#[test]
fn shift_into_sign_bit() {
    let vm = run_code(vec![li!(A0, 1), alui!(SLL, A1, A0, 31)]);
    assert_eq!(vm.register(RegisterId::A1), 0x8000_0000);
}

#[test]
fn amount_of_32_is_zero_shift() {
    let vm = run_code(vec![li!(A0, 0x1234u32), alui!(SLL, A1, A0, 32)]);
    assert_eq!(vm.register(RegisterId::A1), 0x1234);
}
