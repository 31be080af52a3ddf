use crate::cli::OptionsArgs;
use crate::error::Result;
use hhcalc::core::options::{OptionTable, legal_options};
use hhcalc::core::schemes::{Mode, SchemeOption};

pub fn run(args: OptionsArgs) -> Result<()> {
    let modes = match args.mode {
        Some(mode) => vec![mode],
        None => Mode::ALL.to_vec(),
    };

    let listing: Vec<_> = modes
        .into_iter()
        .map(|mode| render_table(legal_options(mode)))
        .collect();
    print!("{}", listing.join("\n"));
    Ok(())
}

fn option_line<T: SchemeOption>(allowed: &[T], default: T) -> String {
    let labels: Vec<_> = allowed
        .iter()
        .map(|option| {
            if *option == default {
                format!("{}*", option.label())
            } else {
                option.label().to_string()
            }
        })
        .collect();
    format!("  {:<22}{}\n", T::KIND, labels.join(", "))
}

/// One block per mode; the default of each category is marked with `*`.
pub fn render_table(table: &OptionTable) -> String {
    [
        format!("{} mode\n", table.mode.description()),
        option_line(table.advection, table.defaults.advection),
        option_line(table.diffusion, table.defaults.diffusion),
        option_line(table.thermo, table.defaults.thermo),
        option_line(table.radiation, table.defaults.radiation),
        option_line(table.microphysics, table.defaults.microphysics),
    ]
    .concat()
}
