//! otpgen - RFC 6238 TOTP command-line tool
//!
//! Generates and verifies time-based one-time passwords from Base32 shared
//! secrets, with clock-drift diagnostics for misbehaving authenticators.

use clap::{Parser, Subcommand};
use otpgen_core::{error::OtpgenError, init_logging};

mod cli;

#[derive(Parser)]
#[command(name = "otpgen", version)]
#[command(about = "Generate and verify RFC 6238 time-based one-time passwords")]
struct Cli {
    #[command(flatten)]
    global: cli::GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current code
    Code {
        /// Compute the code for this Unix time instead of now
        #[arg(long)]
        at: Option<u64>,

        /// Print code, remaining time, counter and timestamp as JSON
        #[arg(long)]
        json: bool,
    },
    /// List codes for the windows around the current one
    Window {
        /// Number of earlier windows
        #[arg(long)]
        past: Option<u32>,

        /// Number of later windows
        #[arg(long)]
        future: Option<u32>,

        #[arg(long)]
        json: bool,
    },
    /// Check a code, tolerating clock drift of a few windows
    Verify {
        code: String,

        /// Windows accepted either side of the current one
        #[arg(long)]
        skew: Option<u32>,

        #[arg(long)]
        json: bool,
    },
    /// Find the clock offset under which an authenticator's code is valid
    FindOffset {
        code: String,

        /// Hours either side of the clock to search
        #[arg(long)]
        range_hours: Option<u32>,

        #[arg(long)]
        json: bool,
    },
    /// Print an otpauth:// URI for provisioning an authenticator app
    Uri {
        /// Account name shown in the authenticator
        #[arg(long)]
        account: String,

        /// Issuer (service) name shown in the authenticator
        #[arg(long)]
        issuer: Option<String>,
    },
    /// Write a configuration file with default settings
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

fn exit_code(error: &OtpgenError) -> i32 {
    match error {
        // Configuration errors (exit code 2)
        OtpgenError::Config(_) | OtpgenError::Toml(_) | OtpgenError::TomlSerialize(_) => 2,
        // OTP errors (exit code 2 - bad secret or parameters)
        OtpgenError::Otp(_) => 2,
        // Runtime errors (exit code 1)
        OtpgenError::Io(_) | OtpgenError::Json(_) => 1,
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.global.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let global = &cli.global;
    let result = match cli.command {
        Commands::Code { at, json } => cli::code::run_code(global, at, json).map(|()| 0),
        Commands::Window { past, future, json } => {
            cli::window::run_window(global, past, future, json).map(|()| 0)
        }
        Commands::Verify { code, skew, json } => {
            cli::verify::run_verify(global, &code, skew, json).map(|valid| if valid { 0 } else { 1 })
        }
        Commands::FindOffset {
            code,
            range_hours,
            json,
        } => cli::find_offset::run_find_offset(global, &code, range_hours, json).map(|()| 0),
        Commands::Uri { account, issuer } => {
            cli::uri::run_uri(global, &account, issuer.as_deref()).map(|()| 0)
        }
        Commands::Init { force } => cli::init::run_init(global, force).map(|()| 0),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(exit_code(&e));
        }
    }
}
