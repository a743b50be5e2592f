/// `--help` and `--version` output.
use std::ffi::OsStr;
use std::path::Path;

use crate::cli::ArgParser;

const DESCRIPTION: &str = "\
Installs the eduroam CA certificate into the trusted root store and
registers the eduroam wireless network profile.";

const OPTIONS: &str = "\
Options:
  /s, --silent        run unattended: no prompts, no informational output
      --tls           register the EAP-TLS profile variant instead of PEAP
      --cert=<FILE>   install the given CA certificate instead of the embedded one
      --profile=<FILE>
                      register the given profile XML instead of the embedded one
      --json          machine-readable error and status output
      --debug         print step timing to stderr
  /?, --help          print this help
      --version       print version";

/// Print the program name and version.
pub fn version() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

/// Print the version banner followed by usage.
pub fn help(parser: &ArgParser) {
    version();
    println!();
    println!("{DESCRIPTION}");
    println!();
    println!("Usage: {} [OPTIONS]", binary_name(parser));
    println!();
    println!("{OPTIONS}");
}

/// Base name of the invoking executable, falling back to the crate name.
fn binary_name(parser: &ArgParser) -> &str {
    Path::new(parser.invocation_path())
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or(env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_name_strips_path_and_extension() {
        let mut p = ArgParser::new(vec![r"C:\Temp\educonfig.exe".into(), "--help".into()]);
        p.parse();
        // Backslashes are not separators off Windows; the stem still drops
        // the extension.
        let name = binary_name(&p);
        assert!(name.ends_with("educonfig"));
    }

    #[test]
    fn binary_name_falls_back_when_path_is_empty() {
        let p = ArgParser::new(Vec::new());
        assert_eq!(binary_name(&p), env!("CARGO_PKG_NAME"));
    }
}
