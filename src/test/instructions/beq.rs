use super::*;

#[test]
fn taken() {
    let vm = run_code(vec![
        li!(A0, 5),
        li!(A1, 5),
        branch!(EQ, A0, A1, 4),
        li!(A2, 99),
        Instruction::Nop,
    ]);
    assert_eq!(vm.register(RegisterId::A2), 0);
}

#[test]
fn not_taken() {
    let vm = run_code(vec![
        li!(A0, 5),
        li!(A1, 6),
        branch!(EQ, A0, A1, 4),
        li!(A2, 99),
        Instruction::Nop,
    ]);
    assert_eq!(vm.register(RegisterId::A2), 99);
}
