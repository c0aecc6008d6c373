use super::*;

#[test]
fn signed_comparison_against_immediate() {
    let vm = run_code(vec![alui!(ADD, A0, ZERO, -5), alui!(SLT, A1, A0, -4)]);
    assert_eq!(vm.register(RegisterId::A1), 1);
}

#[test]
fn equal_is_not_less() {
    let vm = run_code(vec![li!(A0, 7), alui!(SLT, A1, A0, 7)]);
    assert_eq!(vm.register(RegisterId::A1), 0);
}
