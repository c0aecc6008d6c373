use super::*;

#[test]
fn links_and_jumps() {
    let vm = run_code(vec![
        jal!(A0, 2),
        li!(A2, 99),
        Instruction::Nop,
    ]);
    assert_eq!(vm.register(RegisterId::A0), 1);
    assert_eq!(vm.register(RegisterId::A2), 0);
}

#[test]
fn zero_destination_discards_the_link() {
    let vm = run_code(vec![
        jal!(ZERO, 2),
        li!(A2, 99),
        Instruction::Nop,
    ]);
    assert_eq!(vm.register(RegisterId::ZERO), 0);
    assert_eq!(vm.register(RegisterId::A2), 0);
}
