use super::*;

#[test]
fn emits_bytes_in_program_order() {
    let (_, output) = run_code_capture(vec![
        li!(A0, 'H' as u32),
        printc!(A0),
        li!(A0, 'i' as u32),
        printc!(A0),
    ]);
    assert_eq!(output, b"Hi");
}

#[test]
fn only_the_low_byte_is_emitted() {
    let (_, output) = run_code_capture(vec![li!(A0, 0x141u32), printc!(A0)]);
    assert_eq!(output, b"A");
}
