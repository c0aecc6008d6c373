mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use rvcpu::{constants, RegisterId, StepResult, Vm};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Runs a RISC-V-subset assembly program.")]
struct Args {
    /// The assembly source file
    file: PathBuf,

    /// The function label to call
    #[arg(default_value = "main")]
    entry: String,

    /// Dump the machine state after every step
    #[arg(long)]
    verbose: bool,

    /// Size of the memory in bytes
    #[arg(short, long, default_value_t = constants::DEFAULT_MEM_SIZE)]
    memory: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let program = rvasm::assemble(&source)?;

    let mut vm = Vm::new(args.memory);
    vm.load(program)?;

    let initial_sp = vm.register(RegisterId::SP);
    vm.call_function(&args.entry)?;

    if args.verbose {
        eprintln!("Calling function \"{}\"...", args.entry);
        vm.dump_state();
    }

    if let Err(err) = execute(&mut vm, args.verbose) {
        logging::error(&err.to_string());
        vm.dump_state();
        return Err(err.into());
    }

    if args.verbose {
        eprintln!("Done, machine halted.");
    }

    let final_sp = vm.register(RegisterId::SP);
    if final_sp != initial_sp {
        logging::warning(&format!(
            "stack pointer changed from {:#x} to {:#x}",
            initial_sp, final_sp
        ));
    }

    Ok(())
}

/// Steps the machine to completion. In verbose mode the state dump happens
/// after each instruction's effects are committed.
fn execute(vm: &mut Vm, verbose: bool) -> Result<(), rvcpu::ExecError> {
    if !verbose {
        return vm.run();
    }

    while let StepResult::Running = vm.step()? {
        vm.dump_state();
    }
    io::stdout().flush()?;
    Ok(())
}
