/// Enrollment flow: elevation hand-off, confirmation, certificate, profile.
///
/// Certificate and profile installation are independent: a failed
/// certificate install still attempts the profile, and both failures are
/// reflected in the combined exit flags.
use std::path::PathBuf;

use crate::cli::{ArgParser, OutputCtx};
use crate::enroll::{EnrollError, ExitFlags, ProfileType, certificate, profile};
use crate::os;
use crate::types::EnrollReport;

const ENROLL_PROMPT: &str =
    "This will install the eduroam CA certificate and register the wireless profile. Continue?";
const UNSUPPORTED_PROMPT: &str =
    "This system is not supported; enrollment will likely fail. Continue anyway?";
const SUCCESS_MESSAGE: &str =
    "eduroam enrollment completed. You can now connect to the eduroam network.";

/// Run the enrollment decision tree and return the accumulated exit flags.
#[must_use]
pub fn run(parser: &ArgParser, ctx: &OutputCtx) -> ExitFlags {
    if !os::is_elevated() {
        return hand_off_elevated(parser, ctx);
    }

    // Silent runs skip the support gate: unattended deployments target
    // known-good machines.
    if !ctx.silent && !os::system_supported() && !ctx.confirm(UNSUPPORTED_PROMPT) {
        return ExitFlags::SYSTEM_NOT_SUPPORTED;
    }

    if !ctx.confirm(ENROLL_PROMPT) {
        return ExitFlags::NONE;
    }

    let profile_type = selected_profile_type(parser);
    let mut flags = ExitFlags::NONE;

    let certificate_result = {
        let _t = ctx.timer("install_ca_certificate");
        certificate::install(override_path(parser, "--cert").as_deref())
    };
    if let Err(err) = &certificate_result {
        ctx.error(err);
        flags |= ExitFlags::CERT_INSTALL;
    }

    let profile_result = {
        let _t = ctx.timer("install_network_profile");
        profile::install(profile_type, override_path(parser, "--profile").as_deref())
    };
    if let Err(err) = &profile_result {
        ctx.error(err);
        flags |= ExitFlags::PROFILE_INSTALL;
    }

    if flags.is_clean() {
        ctx.info(SUCCESS_MESSAGE);
    }
    ctx.report(&EnrollReport::new(
        profile_type,
        &certificate_result,
        &profile_result,
        flags,
    ));
    flags
}

/// Relaunch elevated, forwarding the switches that shape the elevated run.
///
/// On success the elevated copy owns the rest of the enrollment and this
/// process exits cleanly.
fn hand_off_elevated(parser: &ArgParser, ctx: &OutputCtx) -> ExitFlags {
    ctx.info("Requesting administrator privileges...");

    let mut forward = Vec::new();
    if ctx.silent {
        forward.push("--silent");
    }
    if parser.switch_exists("--tls") {
        forward.push("--tls");
    }

    match os::relaunch_elevated(&forward) {
        Ok(()) => ExitFlags::NONE,
        Err(err) => {
            ctx.error(&EnrollError::NotElevated { source: err });
            ExitFlags::NO_ADMIN
        }
    }
}

fn selected_profile_type(parser: &ArgParser) -> ProfileType {
    if parser.switch_exists("--tls") {
        ProfileType::Tls
    } else {
        ProfileType::Peap
    }
}

fn override_path(parser: &ArgParser, switch: &str) -> Option<PathBuf> {
    parser
        .switch_arguments(switch)
        .and_then(<[String]>::first)
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(args: &[&str]) -> ArgParser {
        let mut p = ArgParser::new(args.iter().map(|s| (*s).to_owned()).collect());
        p.register_alias("/tls", "--tls").unwrap();
        p.parse();
        p
    }

    #[test]
    fn tls_switch_selects_tls_variant() {
        assert_eq!(selected_profile_type(&parser(&["prog", "--tls"])), ProfileType::Tls);
        assert_eq!(selected_profile_type(&parser(&["prog", "/tls"])), ProfileType::Tls);
        assert_eq!(selected_profile_type(&parser(&["prog"])), ProfileType::Peap);
    }

    #[test]
    fn override_path_takes_first_parameter() {
        let p = parser(&["prog", "--cert=/tmp/ca.pem"]);
        assert_eq!(override_path(&p, "--cert"), Some(PathBuf::from("/tmp/ca.pem")));
        assert_eq!(override_path(&p, "--profile"), None);
    }

    #[test]
    fn override_path_accepts_detached_parameter() {
        let p = parser(&["prog", "--profile", "site.xml"]);
        assert_eq!(override_path(&p, "--profile"), Some(PathBuf::from("site.xml")));
    }
}
