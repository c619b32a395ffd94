//! # CLI Layer
//!
//! This module is one possible UI client for the catalog—it is not the
//! application itself. It is the only place in the codebase that knows
//! about terminal I/O and exit codes.
//!
//! Responsibilities:
//!
//! 1. **Argument parsing**: shell arguments become typed commands via clap
//! 2. **Context setup**: resolve the catalog source and build the API
//! 3. **API dispatch**: call the matching `SelectorApi` method
//! 4. **Output**: turn `CmdResult` into terminal output
//!
//! Filter flags arrive as plain text and are parsed here through the
//! `FromStr` impls of the facet enums, so `-c exótica` and `-c exotica`
//! mean the same thing.

use super::print::{
    print_cards, print_comparison, print_messages, print_species_list, print_suggestions,
};
use super::setup::{Cli, Commands, FilterArgs};
use clap::Parser;
use std::path::PathBuf;
use verdefica::api::SelectorApi;
use verdefica::catalog::Catalog;
use verdefica::error::Result;
use verdefica::export::ExportFormat;
use verdefica::filter::{FilterState, SortMode};
use verdefica::selection::Selection;

struct AppContext {
    api: SelectorApi,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Listar { filters }) => handle_listar(&ctx, &filters),
        Some(Commands::Ver { especies, filters }) => handle_ver(&ctx, &especies, &filters),
        Some(Commands::Comparar { especies, filters }) => {
            handle_comparar(&ctx, &especies, &filters)
        }
        Some(Commands::Recomendar { por_regiao }) => handle_recomendar(&ctx, por_regiao),
        Some(Commands::Exportar {
            formato,
            saida,
            filters,
        }) => handle_exportar(&ctx, &formato, saida, &filters),
        Some(Commands::Navegar) => super::browse::run(&ctx.api),
        None => handle_listar(&ctx, &FilterArgs::default()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let path = cli
        .catalog
        .clone()
        .or_else(|| std::env::var_os("VERDEFICA_CATALOG").map(PathBuf::from));
    let catalog = Catalog::load(path.as_deref())?;
    Ok(AppContext {
        api: SelectorApi::new(catalog),
    })
}

/// Turns raw flag values into a typed filter state and sort mode.
fn parse_filters(args: &FilterArgs) -> Result<(FilterState, SortMode)> {
    let mut filters = FilterState::default();
    if let Some(query) = &args.busca {
        filters.query = query.clone();
    }
    for raw in &args.categoria {
        filters.categories.insert(raw.parse()?);
    }
    for raw in &args.porte {
        filters.sizes.insert(raw.parse()?);
    }
    for raw in &args.uso {
        filters.uses.insert(raw.parse()?);
    }
    for raw in &args.condicao {
        filters.conditions.insert(raw.parse()?);
    }
    let sort = match &args.ordem {
        Some(raw) => raw.parse()?,
        None => SortMode::default(),
    };
    Ok((filters, sort))
}

fn handle_listar(ctx: &AppContext, args: &FilterArgs) -> Result<()> {
    let (filters, sort) = parse_filters(args)?;
    let result = ctx.api.list(&filters, sort)?;
    print_species_list(&result.listed, &Selection::new());
    print_messages(&result.messages);
    Ok(())
}

fn handle_ver(ctx: &AppContext, especies: &[String], args: &FilterArgs) -> Result<()> {
    let (filters, sort) = parse_filters(args)?;
    let result = ctx.api.show(&filters, sort, especies)?;
    print_cards(&result.cards);
    print_messages(&result.messages);
    Ok(())
}

fn handle_comparar(ctx: &AppContext, especies: &[String], args: &FilterArgs) -> Result<()> {
    let (filters, sort) = parse_filters(args)?;
    let result = ctx.api.compare(&filters, sort, especies)?;
    if let Some(table) = &result.table {
        print_comparison(table);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_recomendar(ctx: &AppContext, por_regiao: usize) -> Result<()> {
    let result = ctx.api.recommend(por_regiao)?;
    print_suggestions(&result.suggestions);
    print_messages(&result.messages);
    Ok(())
}

fn handle_exportar(
    ctx: &AppContext,
    formato: &str,
    saida: Option<PathBuf>,
    args: &FilterArgs,
) -> Result<()> {
    let (filters, sort) = parse_filters(args)?;
    let format: ExportFormat = formato.parse()?;
    let result = ctx.api.export(&filters, sort, format, saida.as_deref())?;
    if let Some(payload) = &result.payload {
        println!("{}", payload);
    }
    print_messages(&result.messages);
    Ok(())
}
