//! # Interactive Browser
//!
//! Terminal rendition of the catalog screen: the filtered list stays on
//! top, one-line commands flip filters, sorting and the comparison
//! selection, and every state change re-renders the list. Invalid input
//! prints an error and leaves the session untouched.

use super::print::{print_cards, print_comparison, print_species_list};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use verdefica::api::SelectorApi;
use verdefica::compare::build_table;
use verdefica::error::{Result, VerdeficaError};
use verdefica::model::Species;
use verdefica::session::Session;

const HELP: &str = "\
Comandos do navegador:
  busca TERMO        define a busca por nome (busca sem termo limpa)
  categoria VALOR    liga/desliga uma categoria (nativa, exotica, frutifera, ornamental)
  porte VALOR        liga/desliga um porte (pequeno, medio, grande)
  uso VALOR          liga/desliga um uso (ruas, avenidas, pracas, escolas)
  condicao VALOR     liga/desliga uma condição (sol, alagamentos, manutencao)
  ordem MODO         muda a ordenação (relevancia, nome, estoque)
  sel N              marca/desmarca a espécie na posição N
  ver N              mostra a ficha técnica da posição N
  comparar           tabela comparativa das espécies marcadas
  limpar             remove todos os filtros
  desmarcar          esvazia a seleção
  lista              mostra a lista de novo
  ajuda              esta ajuda
  sair               encerra (Ctrl-D também)";

#[derive(Debug, PartialEq)]
enum BrowseCmd {
    Busca(String),
    Categoria(String),
    Porte(String),
    Uso(String),
    Condicao(String),
    Ordem(String),
    Sel(usize),
    Ver(usize),
    Comparar,
    Limpar,
    Desmarcar,
    Lista,
    Ajuda,
    Sair,
}

enum Outcome {
    Redraw,
    Stay,
    Quit,
}

pub(super) fn run(api: &SelectorApi) -> Result<()> {
    let catalog = api.catalog().species().to_vec();
    let mut session = Session::new();

    render(&session, &catalog);
    println!();
    println!("{}", "Digite ajuda para ver os comandos.".dimmed());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("\nverdefica> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cmd = match parse_line(line) {
            Ok(cmd) => cmd,
            Err(msg) => {
                println!("{}", msg.red());
                continue;
            }
        };
        match apply(&mut session, &catalog, cmd) {
            Ok(Outcome::Redraw) => render(&session, &catalog),
            Ok(Outcome::Stay) => {}
            Ok(Outcome::Quit) => break,
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
    Ok(())
}

fn render(session: &Session, catalog: &[Species]) {
    let visible = session.visible(catalog);
    print_species_list(&visible, &session.selection);

    let mut status = vec![format!("ordem: {}", session.sort.label())];
    status.extend(session.filters.summary());
    if !session.selection.is_empty() {
        status.push(format!("{} na comparação", session.selection.len()));
    }
    println!();
    println!("{}", status.join("  ·  ").dimmed());
}

fn parse_line(line: &str) -> std::result::Result<BrowseCmd, String> {
    let mut parts = line.split_whitespace();
    let word = parts.next().unwrap_or("");
    let rest = parts.collect::<Vec<_>>().join(" ");

    let value = |cmd: &str, example: &str| {
        if rest.is_empty() {
            Err(format!("Informe o valor, ex.: {cmd} {example}"))
        } else {
            Ok(rest.clone())
        }
    };
    let position = |cmd: &str| {
        rest.parse::<usize>()
            .map_err(|_| format!("Informe a posição, ex.: {cmd} 3"))
    };

    match word {
        "busca" | "b" => Ok(BrowseCmd::Busca(rest.clone())),
        "categoria" | "cat" => value("categoria", "nativa").map(BrowseCmd::Categoria),
        "porte" => value("porte", "pequeno").map(BrowseCmd::Porte),
        "uso" => value("uso", "avenidas").map(BrowseCmd::Uso),
        "condicao" | "cond" => value("condicao", "sol").map(BrowseCmd::Condicao),
        "ordem" => value("ordem", "nome").map(BrowseCmd::Ordem),
        "sel" | "s" => position("sel").map(BrowseCmd::Sel),
        "ver" | "v" => position("ver").map(BrowseCmd::Ver),
        "comparar" | "comp" | "c" => Ok(BrowseCmd::Comparar),
        "limpar" => Ok(BrowseCmd::Limpar),
        "desmarcar" => Ok(BrowseCmd::Desmarcar),
        "lista" | "l" => Ok(BrowseCmd::Lista),
        "ajuda" | "?" => Ok(BrowseCmd::Ajuda),
        "sair" | "q" => Ok(BrowseCmd::Sair),
        other => Err(format!(
            "Comando desconhecido: \"{other}\". Digite ajuda para ver a lista."
        )),
    }
}

fn apply(session: &mut Session, catalog: &[Species], cmd: BrowseCmd) -> Result<Outcome> {
    match cmd {
        BrowseCmd::Busca(term) => {
            session.filters.query = term;
            Ok(Outcome::Redraw)
        }
        BrowseCmd::Categoria(raw) => {
            session.filters.toggle_category(raw.parse()?);
            Ok(Outcome::Redraw)
        }
        BrowseCmd::Porte(raw) => {
            session.filters.toggle_size(raw.parse()?);
            Ok(Outcome::Redraw)
        }
        BrowseCmd::Uso(raw) => {
            session.filters.toggle_use(raw.parse()?);
            Ok(Outcome::Redraw)
        }
        BrowseCmd::Condicao(raw) => {
            session.filters.toggle_condition(raw.parse()?);
            Ok(Outcome::Redraw)
        }
        BrowseCmd::Ordem(raw) => {
            session.sort = raw.parse()?;
            Ok(Outcome::Redraw)
        }
        BrowseCmd::Sel(n) => {
            let (species, selected) = session.toggle_position(catalog, n)?;
            if selected {
                println!("{}", format!("✓ {} entrou na comparação.", species.name).green());
            } else {
                println!("{}", format!("{} saiu da comparação.", species.name).yellow());
            }
            Ok(Outcome::Redraw)
        }
        BrowseCmd::Ver(n) => {
            let visible = session.visible(catalog);
            let found = visible
                .iter()
                .find(|d| d.index == n)
                .ok_or(VerdeficaError::IndexOutOfRange(n))?;
            print_cards(std::slice::from_ref(&found.species));
            Ok(Outcome::Stay)
        }
        BrowseCmd::Comparar => {
            let columns = session.comparison(catalog);
            if columns.is_empty() {
                println!(
                    "{}",
                    "Nenhuma espécie marcada. Use sel N para marcar.".yellow()
                );
                return Ok(Outcome::Stay);
            }
            print_comparison(&build_table(&columns));
            let hidden = session.hidden_selected(catalog);
            if hidden > 0 {
                println!(
                    "{}",
                    format!("{} espécie(s) marcada(s) fora do filtro atual.", hidden).dimmed()
                );
            }
            Ok(Outcome::Stay)
        }
        BrowseCmd::Limpar => {
            session.filters.clear();
            Ok(Outcome::Redraw)
        }
        BrowseCmd::Desmarcar => {
            session.selection.clear();
            Ok(Outcome::Redraw)
        }
        BrowseCmd::Lista => Ok(Outcome::Redraw),
        BrowseCmd::Ajuda => {
            println!("{HELP}");
            Ok(Outcome::Stay)
        }
        BrowseCmd::Sair => Ok(Outcome::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_commands_and_aliases() {
        assert_eq!(
            parse_line("busca ipê amarelo").unwrap(),
            BrowseCmd::Busca("ipê amarelo".to_string())
        );
        assert_eq!(
            parse_line("cat nativa").unwrap(),
            BrowseCmd::Categoria("nativa".to_string())
        );
        assert_eq!(parse_line("sel 3").unwrap(), BrowseCmd::Sel(3));
        assert_eq!(parse_line("q").unwrap(), BrowseCmd::Sair);
    }

    #[test]
    fn empty_search_term_clears_the_query() {
        assert_eq!(parse_line("busca").unwrap(), BrowseCmd::Busca(String::new()));
    }

    #[test]
    fn missing_values_are_rejected_with_a_hint() {
        assert!(parse_line("categoria").is_err());
        assert!(parse_line("sel").is_err());
        assert!(parse_line("sel oiti").is_err());
    }

    #[test]
    fn unknown_commands_are_rejected() {
        let err = parse_line("plantar 3").unwrap_err();
        assert!(err.contains("plantar"));
    }

    #[test]
    fn apply_mutations_round_trip() {
        let catalog = verdefica::catalog::Catalog::bundled()
            .unwrap()
            .species()
            .to_vec();
        let mut session = Session::new();

        apply(
            &mut session,
            &catalog,
            BrowseCmd::Categoria("nativa".to_string()),
        )
        .unwrap();
        assert_eq!(session.filters.categories.len(), 1);

        apply(
            &mut session,
            &catalog,
            BrowseCmd::Categoria("nativa".to_string()),
        )
        .unwrap();
        assert!(session.filters.categories.is_empty());

        apply(&mut session, &catalog, BrowseCmd::Sel(1)).unwrap();
        assert_eq!(session.selection.len(), 1);

        apply(&mut session, &catalog, BrowseCmd::Limpar).unwrap();
        assert!(session.filters.is_empty());

        // Bad facet value leaves the session untouched.
        let before = session.filters.clone();
        assert!(apply(
            &mut session,
            &catalog,
            BrowseCmd::Porte("gigante".to_string())
        )
        .is_err());
        assert_eq!(session.filters, before);
    }
}
