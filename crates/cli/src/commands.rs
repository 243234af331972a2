use anyhow::{Context, Result};
use buildenv_core::re2::{self, Re2Config};
use buildenv_core::{DefaultThirdPartyConfig, LibraryReport};

pub fn cfg_path_command() -> Result<()> {
    let path = re2::get_uniq_cfg_path().context("failed to resolve re2 config path")?;
    println!("{path}");
    Ok(())
}

pub fn link_args_command(json: bool) -> Result<()> {
    if json {
        let re2 = Re2Config::new(DefaultThirdPartyConfig::from_env());
        let report =
            LibraryReport::for_re2(&re2).context("failed to resolve re2 configuration")?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let args = re2::get_link_args().context("failed to resolve re2 link args")?;
        println!("{}", args.join(" "));
    }
    Ok(())
}
