use super::*;

#[test]
fn all_ones_is_unsigned_maximum() {
    let vm = run_code(vec![alui!(ADD, A0, ZERO, -1), alu!(SLTU, A1, A0, ZERO)]);
    assert_eq!(vm.register(RegisterId::A1), 0);
}

#[test]
fn zero_is_less_than_all_ones() {
    let vm = run_code(vec![alui!(ADD, A0, ZERO, -1), alu!(SLTU, A1, ZERO, A0)]);
    assert_eq!(vm.register(RegisterId::A1), 1);
}
