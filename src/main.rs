// src/main.rs
//
// Traceur ASCII — point d’entrée CLI
// ----------------------------------
// But:
// - un seul argument positionnel : l’expression en x
// - mauvais nombre d’arguments : usage sur stderr, code 1
// - erreur d’expression : message sur stderr, code 1, AUCUN tracé partiel
// - succès : grille sur stdout, code 0
//
// Journal : RUST_LOG=graphe_ascii=debug (jetons, RPN) ou =trace (échantillons NaN),
// toujours sur stderr pour ne pas salir le tracé.

use std::process::ExitCode;
use std::sync::Once;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

mod app;
mod noyau;

use app::ConfigTrace;

#[derive(Parser, Debug)]
#[command(name = "graphe-ascii")]
#[command(about = "Trace une expression en x (sin cos tan ctg sqrt ln, + - * / ^) en ASCII")]
#[command(version)]
// -h / -V courts désactivés : "-h" doit rester une expression (identifiant inconnu)
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Expression à tracer, ex: "sin(x) * 0.5" (un '-' en tête est accepté : "-x^2")
    #[arg(allow_hyphen_values = true)]
    expression: String,

    /// Affiche l’aide
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Affiche la version
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,
}

static TRACING_INIT: Once = Once::new();

/// Installe le journal (une seule fois, et seulement si RUST_LOG est défini).
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version : sortie normale
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // usage sur stderr ; si stderr est fermé il n’y a plus personne à prévenir,
            // le code 1 suffit (même politique que `clap::Error::exit`)
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    init_tracing();

    match app::tracer(&cli.expression, &ConfigTrace::default()) {
        Ok(grille) => {
            print!("{grille}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("erreur: {e}");
            ExitCode::from(1)
        }
    }
}
