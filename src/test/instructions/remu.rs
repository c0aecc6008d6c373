use super::*;

#[test]
fn unsigned_remainder() {
    let vm = run_code(vec![
        li!(A0, 0xFFFF_FFFFu32),
        li!(A1, 0x10),
        alu!(REMU, A2, A0, A1),
    ]);
    assert_eq!(vm.register(RegisterId::A2), 0xF);
}

#[test]
fn division_by_zero_yields_all_ones() {
    let vm = run_code(vec![li!(A0, 7), alu!(REMU, A2, A0, ZERO)]);
    assert_eq!(vm.register(RegisterId::A2), 0xFFFF_FFFF);
}
