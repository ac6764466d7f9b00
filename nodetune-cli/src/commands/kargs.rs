use super::ProfileArgs;
use clap::Args;

#[derive(Args, Debug)]
pub struct KargsArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Print arguments on a single line, space separated
    #[arg(long)]
    pub oneline: bool,
}

pub fn execute(args: KargsArgs) -> anyhow::Result<()> {
    let profile = args.profile.load()?;
    let kargs = nodetune::kernel::kernel_args(
        profile.spec.huge_pages.as_ref(),
        profile.spec.cpu.isolated.as_ref(),
    );

    if args.oneline {
        println!("{}", kargs.join(" "));
    } else {
        for arg in kargs {
            println!("{}", arg);
        }
    }
    Ok(())
}
