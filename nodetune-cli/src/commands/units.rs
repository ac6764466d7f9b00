use super::ProfileArgs;
use clap::Args;
use nodetune::constants::scripts as const_scripts;
use nodetune::systemd::{
    pre_boot_tuning_unit_options, reboot_unit_options, service_name, to_unit_string,
};

#[derive(Args, Debug)]
pub struct UnitsArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,
}

pub fn execute(args: UnitsArgs) -> anyhow::Result<()> {
    let profile = args.profile.load()?;

    let units = [
        (
            const_scripts::PRE_BOOT_TUNING,
            pre_boot_tuning_unit_options(&profile.spec.cpu.non_isolated),
        ),
        (const_scripts::REBOOT, reboot_unit_options()),
    ];

    for (idx, (name, options)) in units.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("# {}", service_name(name));
        print!("{}", to_unit_string(options)?);
    }
    Ok(())
}
