use super::*;

#[test]
fn basic() {
    let vm = run_code(vec![
        li!(A0, 0b1100_1010u32),
        li!(A1, 0b1010_1100u32),
        alu!(XOR, A2, A0, A1),
    ]);
    assert_eq!(vm.register(RegisterId::A2), 0b0110_0110);
}

#[test]
fn xor_with_zero_destination_is_suppressed() {
    // A plain xor whose destination is `zero` executes but writes nothing;
    // only the all-zero textual form decodes to the debug dump.
    let vm = run_code(vec![li!(A0, 5), alu!(XOR, ZERO, A0, A0)]);
    assert_eq!(vm.register(RegisterId::ZERO), 0);
    assert_eq!(vm.register(RegisterId::A0), 5);
}
