use super::*;

#[test]
fn zero_is_at_least_minus_one() {
    let vm = run_code(vec![
        alui!(ADD, A0, ZERO, -1),
        branch!(GE, ZERO, A0, 3),
        li!(A2, 99),
        Instruction::Nop,
    ]);
    assert_eq!(vm.register(RegisterId::A2), 0);
}

#[test]
fn minus_one_is_not_at_least_zero() {
    let vm = run_code(vec![
        alui!(ADD, A0, ZERO, -1),
        branch!(GE, A0, ZERO, 3),
        li!(A2, 99),
        Instruction::Nop,
    ]);
    assert_eq!(vm.register(RegisterId::A2), 99);
}
