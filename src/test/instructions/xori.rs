use super::*;

#[test]
fn flips_selected_bits() {
    let vm = run_code(vec![li!(A0, 0b1111u32), alui!(XOR, A1, A0, 0b0101)]);
    assert_eq!(vm.register(RegisterId::A1), 0b1010);
}
