//! The get command.

use keylist::Bindings;

use super::Outcome;
use crate::cli::GetArgs;

/// Run the get command
pub fn run(vars: &mut Bindings, args: &GetArgs) -> Result<Outcome, keylist::Error> {
    let value = vars.get_path(&args.var, args.key.as_deref(), args.ret_var.as_deref())?;
    // With a return variable the result is a found flag; a found value was stored
    // unless the name is empty.
    let stored = match args.ret_var.as_deref() {
        Some(name) if !name.is_empty() => value == "1",
        _ => false,
    };
    Ok(Outcome {
        output: Some(value.to_string()),
        modified: stored,
    })
}
