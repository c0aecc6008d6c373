use super::*;

#[test]
fn loads_the_resolved_address() {
    let vm = run_code(vec![Instruction::LoadAddress {
        rd: RegisterId::A0,
        address: constants::DATA_BASE + 12,
    }]);
    assert_eq!(vm.register(RegisterId::A0), 268);
}
