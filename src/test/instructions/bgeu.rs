use super::*;

#[test]
fn all_ones_is_unsigned_maximum() {
    let vm = run_code(vec![
        alui!(ADD, A0, ZERO, -1),
        branch!(GEU, A0, ZERO, 3),
        li!(A2, 99),
        Instruction::Nop,
    ]);
    assert_eq!(vm.register(RegisterId::A2), 0);
}

#[test]
fn zero_is_not_unsigned_at_least_one() {
    let vm = run_code(vec![
        li!(A0, 1),
        branch!(GEU, ZERO, A0, 3),
        li!(A2, 99),
        Instruction::Nop,
    ]);
    assert_eq!(vm.register(RegisterId::A2), 99);
}
