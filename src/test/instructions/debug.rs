use super::*;

#[test]
fn dump_advances_the_pc_and_mutates_nothing() {
    let (vm, output) = run_code_capture(vec![
        li!(A0, 7),
        Instruction::DebugDump,
        li!(A1, 9),
    ]);
    assert_eq!(vm.register(RegisterId::A0), 7);
    assert_eq!(vm.register(RegisterId::A1), 9);
    // The dump goes to stderr, never to the program's output sink.
    assert!(output.is_empty());
}
