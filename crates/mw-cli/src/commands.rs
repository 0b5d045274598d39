//! Subcommand handlers
//!
//! Handlers write to the supplied writer so they can be driven from tests;
//! diagnostics go through `tracing` to stderr.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use mw_catalog::builtin_store_with;
use mw_query::{Query, QueryEngine};
use mw_record::{Category, Record, RecordStore};
use mw_render::{render_card, render_card_html, render_detail, render_detail_html, CardView};
use mw_site::{
    dossier_link, hotspot_not_found_message, last_sync_now, list_page, origin_page,
    render_hotspot_not_found_html, AccessGate, AccessOutcome, ActivityFeed, DossierRoute,
    HotspotBoard, HotspotFilter, Router, Session, SiteConfig, Testimony, EVIDENCE_HEADING,
    HOTSPOT_NOT_FOUND_TITLE, NOT_FOUND_MESSAGE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Process outcome of a subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Command did what was asked
    Success,
    /// Command ran but the answer is negative (unknown id, wrong key)
    Failure,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        match exit {
            Exit::Success => Self::SUCCESS,
            Exit::Failure => Self::FAILURE,
        }
    }
}

/// Run the subcommand selected in `matches`
///
/// # Errors
///
/// Fails on unreadable configuration, a broken built-in table, invalid
/// arguments that clap cannot check, or output errors.
pub fn execute<W: Write>(matches: &ArgMatches, out: &mut W) -> Result<Exit> {
    let config = load_config(matches)?;

    match matches.subcommand() {
        Some(("list", args)) => {
            let store = load_store(&config)?;
            let query = args
                .get_one::<Category>("category")
                .map_or_else(Query::all, |category| Query::for_category(*category));
            print_cards(out, &QueryEngine::new(&store).run(&query), CardFormat::from_args(args))
        }
        Some(("search", args)) => {
            let store = load_store(&config)?;
            let engine = QueryEngine::new(&store);
            let text = string_arg(args, "text");
            let hits = match args.get_one::<Category>("category") {
                Some(category) => engine.filter_by_category(*category, text),
                None => engine.filter_global(text),
            };
            print_cards(out, &hits, CardFormat::from_args(args))
        }
        Some(("show", args)) => {
            let store = load_store(&config)?;
            show(out, &config, &store, args)
        }
        Some(("feed", args)) => {
            let feed = ActivityFeed::builtin().context("loading activity table")?;
            let count = args.get_one::<usize>("count").copied().unwrap_or(config.feed_size);
            let mut rng = match args.get_one::<u64>("seed") {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            for item in feed.generate(&mut rng, count) {
                writeln!(out, "{item}")?;
            }
            Ok(Exit::Success)
        }
        Some(("access", args)) => {
            let key = string_arg(args, "key");
            let mut session = Session::new();
            match AccessGate::from_config(&config).check(key, &mut session) {
                AccessOutcome::Granted { redirect } => {
                    writeln!(out, "ACCÈS AUTORISÉ → {redirect}")?;
                    Ok(Exit::Success)
                }
                AccessOutcome::Denied => {
                    writeln!(out, "ACCÈS REFUSÉ")?;
                    Ok(Exit::Failure)
                }
            }
        }
        Some(("hotspots", args)) => {
            let filter: HotspotFilter = args
                .get_one::<String>("filter")
                .map_or("all", String::as_str)
                .parse()?;
            let board = HotspotBoard::builtin().context("loading hotspot table")?;
            let visible = board.filter(filter);
            if args.get_flag("json") {
                writeln!(out, "{}", serde_json::to_string_pretty(&visible)?)?;
            } else {
                for h in visible {
                    writeln!(
                        out,
                        "{} [{}] {} — {} — {} ({})",
                        h.id, h.badge, h.title, h.location, h.date, h.category_label
                    )?;
                }
            }
            Ok(Exit::Success)
        }
        Some(("hotspot", args)) => {
            let board = HotspotBoard::builtin().context("loading hotspot table")?;
            show_hotspot(out, &board, args)
        }
        Some(("report", args)) => {
            let mut testimony = Testimony::new(
                string_arg(args, "codename"),
                string_arg(args, "location"),
                string_arg(args, "phenomenon"),
                string_arg(args, "report"),
            );
            if let Some(datetime) = args.get_one::<String>("datetime") {
                testimony = testimony.with_datetime(datetime.as_str());
            }
            if let Some(urgency) = args.get_one::<String>("urgency") {
                testimony = testimony.with_urgency(urgency.as_str());
            }
            writeln!(out, "{}", testimony.mailto_link(&config.report_recipient)?)?;
            Ok(Exit::Success)
        }
        Some(("sync", _)) => {
            writeln!(out, "Dernière synchro : {}", last_sync_now())?;
            Ok(Exit::Success)
        }
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("no command given"),
    }
}

fn string_arg<'a>(args: &'a ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name).map_or("", String::as_str)
}

fn load_config(matches: &ArgMatches) -> Result<SiteConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(SiteConfig::default()),
    }
}

fn load_store(config: &SiteConfig) -> Result<RecordStore> {
    builtin_store_with(&config.dossier_defaults()).context("loading built-in dossiers")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardFormat {
    Text,
    Json,
    Html,
}

impl CardFormat {
    fn from_args(args: &ArgMatches) -> Self {
        if args.get_flag("json") {
            Self::Json
        } else if args.get_flag("html") {
            Self::Html
        } else {
            Self::Text
        }
    }
}

fn print_cards<W: Write>(out: &mut W, records: &[&Record], format: CardFormat) -> Result<Exit> {
    let cards: Vec<CardView> = records.iter().map(|r| render_card(r)).collect();

    match format {
        CardFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&cards)?)?;
            return Ok(Exit::Success);
        }
        CardFormat::Html => {
            for (record, card) in records.iter().zip(&cards) {
                let link = dossier_link(card.id.as_str(), list_page(record.category()));
                write!(out, "{}", render_card_html(card, &link))?;
            }
            return Ok(Exit::Success);
        }
        CardFormat::Text => {}
    }

    if cards.is_empty() {
        writeln!(out, "Aucun résultat.")?;
    }
    for card in &cards {
        writeln!(
            out,
            "{} [{}] {} ({}) | Capacités : {}",
            card.header(),
            card.status,
            card.alias,
            card.name,
            card.powers
        )?;
    }
    Ok(Exit::Success)
}

fn show<W: Write>(
    out: &mut W,
    config: &SiteConfig,
    store: &RecordStore,
    args: &ArgMatches,
) -> Result<Exit> {
    let id = string_arg(args, "id");
    let from = origin_page(string_arg(args, "from"));

    // The operator of the binary has already passed the gate
    let mut session = Session::new();
    session.grant();

    let link = dossier_link(id, from);
    let query = link.split_once('?').map_or("", |(_, q)| q);

    match Router::from_config(config).resolve_dossier(&session, store, query) {
        DossierRoute::Show { record, back_link } => {
            let view = render_detail(record);
            if args.get_flag("json") {
                writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
            } else if args.get_flag("html") {
                write!(out, "{}", render_detail_html(&view))?;
            } else {
                writeln!(out, "{}", view.title)?;
                writeln!(out, "{} // {} — {}", view.id, view.class, view.category_label)?;
                writeln!(out, "Nom : {}", view.name)?;
                writeln!(out, "Capacités :")?;
                for power in &view.powers {
                    writeln!(out, "  - {power}")?;
                }
                writeln!(out)?;
                writeln!(out, "{}", view.narrative.to_text())?;
                writeln!(out)?;
                writeln!(out, "Biographie : {}", view.bio)?;
                if !view.tags.is_empty() {
                    writeln!(out, "Tags : {}", view.tags.join(", "))?;
                }
                writeln!(out, "Retour : {back_link}")?;
            }
            Ok(Exit::Success)
        }
        DossierRoute::NotFound { .. } => {
            writeln!(out, "{NOT_FOUND_MESSAGE}")?;
            Ok(Exit::Failure)
        }
        DossierRoute::RedirectHome { target } | DossierRoute::RedirectToGate { target } => {
            writeln!(out, "Aucun dossier demandé. Redirection vers {target}.")?;
            Ok(Exit::Failure)
        }
    }
}

fn show_hotspot<W: Write>(out: &mut W, board: &HotspotBoard, args: &ArgMatches) -> Result<Exit> {
    let id = string_arg(args, "id");

    let Some(detail) = board.detail(id) else {
        if args.get_flag("html") {
            write!(out, "{}", render_hotspot_not_found_html(Some(id)))?;
        } else {
            writeln!(out, "{HOTSPOT_NOT_FOUND_TITLE}")?;
            writeln!(out, "{}", hotspot_not_found_message(Some(id)))?;
        }
        return Ok(Exit::Failure);
    };

    if args.get_flag("json") {
        writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?;
    } else if args.get_flag("html") {
        write!(out, "{}", detail.render_html())?;
    } else {
        let h = detail.hotspot;
        writeln!(out, "{} [{}] {}", h.id, h.badge, h.title)?;
        writeln!(out, "📍 {} — 🕐 {} — {}", h.location, h.date, h.category_label)?;
        writeln!(out)?;
        writeln!(out, "{}", h.summary)?;
        writeln!(out)?;
        writeln!(out, "{}", detail.details_text())?;
        if !detail.evidence().is_empty() {
            writeln!(out)?;
            writeln!(out, "{EVIDENCE_HEADING}")?;
            for image in detail.evidence() {
                writeln!(out, "  - {} ({})", image.alt, image.src)?;
            }
        }
        writeln!(out, "Retour : {}", detail.back_link)?;
    }
    Ok(Exit::Success)
}
