use super::*;

#[test]
fn basic() {
    let vm = run_code(vec![
        li!(A0, 0b1100_1010u32),
        li!(A1, 0b1010_1100u32),
        alu!(AND, A2, A0, A1),
    ]);
    assert_eq!(vm.register(RegisterId::A2), 0b1000_1000);
}
