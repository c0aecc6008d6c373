use super::*;

#[test]
fn sign_follows_the_dividend() {
    let vm = run_code(vec![
        alui!(ADD, A0, ZERO, -7),
        li!(A1, 2),
        alu!(REM, A2, A0, A1),
    ]);
    assert_eq!(vm.register(RegisterId::A2) as i32, -1);
}

#[test]
fn division_by_zero_yields_all_ones() {
    let vm = run_code(vec![li!(A0, 7), alu!(REM, A2, A0, ZERO)]);
    assert_eq!(vm.register(RegisterId::A2), 0xFFFF_FFFF);
}

#[test]
fn minimum_by_minus_one_has_no_remainder() {
    let vm = run_code(vec![
        li!(A0, 0x8000_0000u32),
        alui!(ADD, A1, ZERO, -1),
        alu!(REM, A2, A0, A1),
    ]);
    assert_eq!(vm.register(RegisterId::A2), 0);
}
