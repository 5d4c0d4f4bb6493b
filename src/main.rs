//! Credgate - verify a credential response against a credentials file.

use std::env;
use std::process::ExitCode;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use credgate::credential::Challenge;
use credgate::directory::load_credentials;
use credgate::error::{GateError, GateResult};
use credgate::verify::{Verification, Verifier};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return ExitCode::SUCCESS;
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{} {}", NAME, VERSION);
        return ExitCode::SUCCESS;
    }

    init_logging();

    let credentials_path = match get_arg(&args, "--credentials", "-f") {
        Some(path) => path,
        None => {
            eprintln!("Error: --credentials <PATH> is required");
            return ExitCode::from(2);
        }
    };
    let subject = match get_arg(&args, "--subject", "-u") {
        Some(subject) => subject,
        None => {
            eprintln!("Error: --subject <NAME> is required");
            return ExitCode::from(2);
        }
    };
    let response = match get_arg(&args, "--response", "-r") {
        Some(response) => response,
        None => {
            eprintln!("Error: --response <STRING> is required");
            return ExitCode::from(2);
        }
    };
    let salt_hex = get_arg(&args, "--salt", "-s");

    match run(&credentials_path, &subject, &response, salt_hex.as_deref()) {
        Ok(verification) => {
            // Only the coarse outcome is printed; the rejection detail
            // goes to the operator log.
            println!("{}", verification);
            if verification.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Load the credentials file and verify one response.
fn run(
    credentials_path: &str,
    subject: &str,
    response: &str,
    salt_hex: Option<&str>,
) -> GateResult<Verification> {
    let directory = load_credentials(credentials_path)?;

    let challenge = match salt_hex {
        Some(hex_salt) => {
            let salt = hex::decode(hex_salt).map_err(|e| GateError::Challenge {
                message: format!("salt is not valid hex: {}", e),
            })?;
            Some(Challenge::new(salt)?)
        }
        None => None,
    };

    let verifier = Verifier::new(directory);
    verifier.authenticate(subject, response, challenge.as_ref())
}

/// Get the value of a command line option, `--name VALUE`,
/// `--name=VALUE`, or its short form.
fn get_arg(args: &[String], name: &str, short: &str) -> Option<String> {
    for (i, arg) in args.iter().enumerate() {
        if (arg == name || arg == short) && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
        if let Some(value) = arg.strip_prefix(&format!("{}=", name)) {
            return Some(value.to_string());
        }
    }
    None
}

/// Initialize logging from the environment.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Print help message.
fn print_help() {
    println!(
        r#"{} {}
Verify a credential response against a TOML credentials file.

USAGE:
    {} --credentials <PATH> --subject <NAME> --response <STRING> [OPTIONS]

OPTIONS:
    -f, --credentials <PATH>    Path to the credentials file
    -u, --subject <NAME>        Subject identity to verify
    -r, --response <STRING>     Client response (plaintext password, or
                                the salted digest in challenge mode)
    -s, --salt <HEX>            Challenge salt as hex; enables salted
                                challenge-response mode
    -h, --help                  Print help information
    -V, --version               Print version information

Prints "verified" or "rejected" and exits 0 on success, 1 on rejection,
2 on errors. Rejection details are written to the operator log only
(stderr, controlled by RUST_LOG)."#,
        NAME, VERSION, NAME
    );
}
