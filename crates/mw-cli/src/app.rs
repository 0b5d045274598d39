//! Command-line definition

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use mw_record::Category;

fn category_arg() -> Arg {
    Arg::new("category")
        .long("category")
        .short('c')
        .value_parser(value_parser!(Category))
        .help("Restrict to one category (mutant|superior)")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn html_arg(help: &'static str) -> Arg {
    Arg::new("html")
        .long("html")
        .action(ArgAction::SetTrue)
        .conflicts_with("json")
        .help(help)
}

/// Build the `mutant-watch` command tree
#[must_use]
pub fn build_cli() -> Command {
    Command::new("mutant-watch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Mutant Watch dossier catalog")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Site configuration file (.toml, .yaml or .yml)"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("list")
                .about("List file cards in store order")
                .arg(category_arg())
                .arg(json_arg())
                .arg(html_arg("Output the card markup")),
        )
        .subcommand(
            Command::new("search")
                .about("Search names, aliases and powers")
                .arg(
                    Arg::new("text")
                        .required(true)
                        .help("Case-insensitive search term"),
                )
                .arg(category_arg())
                .arg(json_arg())
                .arg(html_arg("Output the card markup")),
        )
        .subcommand(
            Command::new("show")
                .about("Open a dossier")
                .arg(Arg::new("id").required(true).help("Record id, e.g. M-001"))
                .arg(
                    Arg::new("from")
                        .long("from")
                        .default_value("home")
                        .help("Origin page used for the back link, name or path"),
                )
                .arg(json_arg())
                .arg(html_arg("Output the dossier markup")),
        )
        .subcommand(
            Command::new("feed")
                .about("Generate the activity ticker")
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('n')
                        .value_parser(value_parser!(usize))
                        .help("Number of lines (defaults to the configured size)"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .help("Random seed for reproducibility"),
                ),
        )
        .subcommand(
            Command::new("access")
                .about("Check an access key")
                .arg(Arg::new("key").required(true).help("Key to try")),
        )
        .subcommand(
            Command::new("hotspots")
                .about("Show the hotspot board")
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .short('f')
                        .default_value("all")
                        .help("all|mutant|superior|inconnu"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("hotspot")
                .about("Open a hotspot report")
                .arg(Arg::new("id").required(true).help("Report id, e.g. HS-001"))
                .arg(json_arg())
                .arg(html_arg("Output the report page markup")),
        )
        .subcommand(
            Command::new("report")
                .about("Build the mailto link of a field report")
                .arg(Arg::new("codename").long("codename").required(true).help("Witness code name"))
                .arg(Arg::new("location").long("location").required(true).help("Place of the sighting"))
                .arg(
                    Arg::new("phenomenon")
                        .long("phenomenon")
                        .required(true)
                        .help("Type of phenomenon"),
                )
                .arg(Arg::new("report").long("report").required(true).help("Detailed account"))
                .arg(
                    Arg::new("datetime")
                        .long("datetime")
                        .help("Observation time, YYYY-MM-DDTHH:MM"),
                )
                .arg(Arg::new("urgency").long("urgency").help("Urgency level")),
        )
        .subcommand(Command::new("sync").about("Print the last-sync stamp"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn category_values_parse() {
        let matches = build_cli()
            .try_get_matches_from(["mutant-watch", "list", "--category", "superior"])
            .unwrap();
        let (_, list) = matches.subcommand().unwrap();

        assert_eq!(list.get_one::<Category>("category"), Some(&Category::Superior));
    }

    #[test]
    fn json_and_html_are_exclusive() {
        for args in [
            &["mutant-watch", "show", "M-001", "--json", "--html"][..],
            &["mutant-watch", "list", "--html", "--json"][..],
            &["mutant-watch", "hotspot", "HS-001", "--json", "--html"][..],
        ] {
            assert!(build_cli().try_get_matches_from(args).is_err(), "{args:?}");
        }
    }
}
