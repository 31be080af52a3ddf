use crate::cli::ValidateArgs;
use crate::error::Result;
use hhcalc::engine::decomposition;
use hhcalc::engine::error::EngineError;
use tracing::info;

pub fn run(args: ValidateArgs) -> Result<()> {
    info!(
        "Checking a {} × {} × {} grid on {} × {} ranks.",
        args.itot, args.jtot, args.ktot, args.npx, args.npy
    );
    let validation =
        decomposition::validate(args.itot, args.jtot, args.ktot, args.npx, args.npy);

    if !validation.is_valid() {
        return Err(EngineError::Decomposition(validation).into());
    }

    println!("✓ Grid decomposition is valid.");
    Ok(())
}
