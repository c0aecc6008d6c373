use super::*;

#[test]
fn taken() {
    let vm = run_code(vec![
        li!(A0, 5),
        branch!(NE, A0, ZERO, 3),
        li!(A2, 99),
        Instruction::Nop,
    ]);
    assert_eq!(vm.register(RegisterId::A2), 0);
}

#[test]
fn not_taken() {
    let vm = run_code(vec![
        branch!(NE, A0, ZERO, 2),
        li!(A2, 99),
        Instruction::Nop,
    ]);
    assert_eq!(vm.register(RegisterId::A2), 99);
}
