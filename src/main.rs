// =============================================================================
// RESULTAT — Point d'entrée : démonstration des combinateurs
// =============================================================================
//
// Ce main.rs montre un exemple complet :
//   1. Lire une liste de nombres (chaque élément devient un Result)
//   2. Enchaîner map / and_then / or_else sur ces Results
//   3. Replier la liste avec conjunct (ET) et disjunct (OU)
//   4. Accumuler les valeurs avec sequence
//   5. En mode --strict, relancer la première erreur dans le canal natif
//
// Exemples :
//   resultat --values 32,101,x,-2
//   resultat --scenario sequence -vv
//   RUST_LOG=debug resultat --strict --values 1,deux,3
//
// =============================================================================

use std::num::ParseIntError;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{debug, info, warn};

use resultat::fold::{conjunct_all, disjunct_all, sequence};
use resultat::{err, ok, Fault, Result};

/// Démonstration de l'algèbre Result (map, and_then, conjunct, disjunct...).
#[derive(Debug, Parser)]
#[command(name = "resultat", version)]
struct Cli {
    /// Nombres séparés par des virgules ; un élément invalide devient un Err.
    #[arg(long, default_value = "32,101,-2")]
    values: String,

    /// Étape(s) à exécuter.
    #[arg(long, value_enum, default_value_t = Scenario::All)]
    scenario: Scenario,

    /// Relance la première erreur de parsing au lieu de la garder en valeur.
    #[arg(long)]
    strict: bool,

    /// Verbosité (-v = info, -vv = debug, -vvv = trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scenario {
    Combinators,
    Conjunct,
    Disjunct,
    Sequence,
    All,
}

impl Scenario {
    fn includes(self, step: Scenario) -> bool {
        self == Scenario::All || self == step
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Chaque élément de la liste devient un Result indépendant.
fn parse_values(raw: &str) -> Vec<Result<i64, ParseIntError>> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            let parsed: Result<i64, ParseIntError> = item.parse::<i64>().into();
            debug!("'{}' → {}", item, parsed_label(&parsed));
            parsed
        })
        .collect()
}

fn parsed_label(result: &Result<i64, ParseIntError>) -> String {
    match result.as_ref() {
        Ok(value) => format!("Ok({})", value),
        Err(error) => format!("Err({})", error),
    }
}

/// Double la valeur puis refuse les négatifs ; un débordement devient un Err.
fn double_non_negative(result: Result<i64, ParseIntError>) -> Result<i64, Fault> {
    result
        .map_err(|e| Fault::new(format!("parsing : {}", e)))
        .and_then(|n| {
            n.checked_mul(2).map_or_else(
                || err(Fault::new(format!("{} × 2 déborde i64", n))),
                ok,
            )
        })
        .and_then(|n| {
            if n >= 0 {
                ok(n)
            } else {
                err(Fault::new(format!("{} est négatif", n)))
            }
        })
}

fn banner(title: &str) {
    println!("═══ {} ═══\n", title);
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Erreur : {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("╔══════════════════════════════════════════════════╗");
    println!("║      RESULTAT — Ok(valeur) | Err(erreur)         ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    let results = parse_values(&cli.values);
    info!("{} valeurs lues, scénario {:?}", results.len(), cli.scenario);

    if results.is_empty() {
        // Le repli conjunct/disjunct n'a pas de neutre : on refuse une liste vide.
        let missing: Result<(), Fault> = err(Fault::new("aucune valeur fournie (--values)"));
        missing.into_std()?;
    }

    for (i, r) in results.iter().enumerate() {
        println!("  [{}] {}", i, parsed_label(r));
    }
    println!();

    if cli.strict {
        if let Some(first) = results.iter().find(|r| r.is_err()) {
            warn!("mode strict : relance de la première erreur");
            first.clone().into_std()?;
        }
    }

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 1 : Combinateurs élément par élément
    // ═══════════════════════════════════════════════════════════
    if cli.scenario.includes(Scenario::Combinators) {
        banner("ÉTAPE 1 : map / and_then / or_else");

        for r in &results {
            let chained = double_non_negative(r.clone());
            let recovered: Result<i64, Fault> = chained.clone().or_else(|fault| {
                debug!("rattrapage de '{}'", fault);
                ok(0)
            });
            println!("  {:<40} → rattrapé : {}", chained.to_string(), recovered);
        }
        println!();
    }

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 2 : Repli ET (conjunct)
    // ═══════════════════════════════════════════════════════════
    if cli.scenario.includes(Scenario::Conjunct) {
        banner("ÉTAPE 2 : conjunct (premier Err, sinon dernier Ok)");
        if let Some(folded) = conjunct_all(results.clone()) {
            println!("  {}\n", parsed_label(&folded));
        }
    }

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 3 : Repli OU (disjunct)
    // ═══════════════════════════════════════════════════════════
    if cli.scenario.includes(Scenario::Disjunct) {
        banner("ÉTAPE 3 : disjunct (premier Ok, sinon dernier Err)");
        if let Some(folded) = disjunct_all(results.clone()) {
            println!("  {}\n", parsed_label(&folded));
        }
    }

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 4 : Accumulation (sequence)
    // ═══════════════════════════════════════════════════════════
    if cli.scenario.includes(Scenario::Sequence) {
        banner("ÉTAPE 4 : sequence (toutes les valeurs, ou le premier Err)");
        match sequence(results.clone()) {
            Result::Ok(values) => println!("  Ok({:?})\n", values),
            Result::Err(error) => println!("  Err({})\n", error),
        }
    }

    println!("═══════════════════════════════════════════════════");
    println!(
        "  {} Ok / {} Err",
        results.iter().filter(|r| r.is_ok()).count(),
        results.iter().filter(|r| r.is_err()).count()
    );
    println!("═══════════════════════════════════════════════════");

    Ok(())
}
