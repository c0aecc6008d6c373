use super::*;

#[test]
fn basic() {
    let vm = run_code(vec![li!(A0, 1), li!(A1, 4), alu!(SLL, A2, A0, A1)]);
    assert_eq!(vm.register(RegisterId::A2), 16);
}

#[test]
fn amount_uses_low_five_bits() {
    let vm = run_code(vec![li!(A0, 1), li!(A1, 33), alu!(SLL, A2, A0, A1)]);
    assert_eq!(vm.register(RegisterId::A2), 2);
}
