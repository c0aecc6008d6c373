use super::*;

#[test]
fn basic() {
    let vm = run_code(vec![li!(A0, 16), alui!(SUB, A0, A0, 4)]);
    assert_eq!(vm.register(RegisterId::A0), 12);
}

#[test]
fn underflow_wraps() {
    let vm = run_code(vec![alui!(SUB, A0, ZERO, 1)]);
    assert_eq!(vm.register(RegisterId::A0), 0xFFFF_FFFF);
}
