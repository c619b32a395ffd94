use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "verdefica")]
#[command(
    about = "Seletor de espécies para a arborização urbana do Recife",
    long_about = None,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Caminho para um catálogo JSON alternativo
    /// (também lido da variável VERDEFICA_CATALOG)
    #[arg(long = "catalogo", global = true, value_name = "ARQUIVO")]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lista as espécies que passam pelos filtros
    #[command(alias = "ls")]
    Listar {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Mostra a ficha técnica de uma ou mais espécies
    #[command(alias = "v")]
    Ver {
        /// Posições na lista ou parte do nome (ex.: 2, "ipê roxo")
        #[arg(required = true, num_args = 1.., value_name = "ESPÉCIE")]
        especies: Vec<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Compara espécies lado a lado
    #[command(alias = "c")]
    Comparar {
        /// Posições na lista ou nomes; nomes com espaço vão entre aspas
        #[arg(required = true, num_args = 1.., value_name = "ESPÉCIE")]
        especies: Vec<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Sugere espécies para cada região (RPA), pior déficit primeiro
    #[command(alias = "r")]
    Recomendar {
        /// Quantas espécies sugerir por região
        #[arg(long = "por-regiao", default_value_t = 3, value_name = "N")]
        por_regiao: usize,
    },

    /// Exporta a lista filtrada
    #[command(alias = "e")]
    Exportar {
        /// Formato de saída: json ou csv
        #[arg(short, long = "formato", default_value = "json", value_name = "FORMATO")]
        formato: String,

        /// Arquivo de destino; sem ele o resultado vai para a tela
        #[arg(short = 'o', long = "saida", value_name = "ARQUIVO")]
        saida: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Abre o navegador interativo de espécies
    #[command(alias = "n")]
    Navegar,
}

/// Filtros e ordenação compartilhados pelos comandos de consulta. Os
/// valores chegam como texto e são interpretados sem distinção de acentos
/// ou maiúsculas.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Busca por nome popular ou científico
    #[arg(short = 'q', long = "busca", value_name = "TERMO")]
    pub busca: Option<String>,

    /// Filtra por categoria (nativa, exotica, frutifera, ornamental)
    #[arg(short = 'c', long = "categoria", value_name = "CATEGORIA")]
    pub categoria: Vec<String>,

    /// Filtra por porte (pequeno, medio, grande)
    #[arg(short = 'p', long = "porte", value_name = "PORTE")]
    pub porte: Vec<String>,

    /// Filtra por uso recomendado (ruas, avenidas, pracas, escolas)
    #[arg(short = 'u', long = "uso", value_name = "USO")]
    pub uso: Vec<String>,

    /// Exige uma condição ambiental (sol, alagamentos, manutencao)
    #[arg(long = "condicao", value_name = "CONDIÇÃO")]
    pub condicao: Vec<String>,

    /// Ordenação: relevancia, nome ou estoque
    #[arg(short = 's', long = "ordem", value_name = "MODO")]
    pub ordem: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listar_accepts_repeated_filters() {
        let cli = Cli::parse_from([
            "verdefica", "listar", "-c", "nativa", "-c", "frutifera", "-q", "ipe", "-s", "nome",
        ]);
        match cli.command {
            Some(Commands::Listar { filters }) => {
                assert_eq!(filters.categoria, vec!["nativa", "frutifera"]);
                assert_eq!(filters.busca.as_deref(), Some("ipe"));
                assert_eq!(filters.ordem.as_deref(), Some("nome"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn comparar_collects_all_positionals() {
        let cli = Cli::parse_from(["verdefica", "comparar", "1", "3", "oiti"]);
        match cli.command {
            Some(Commands::Comparar { especies, .. }) => {
                assert_eq!(especies, vec!["1", "3", "oiti"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn aliases_map_to_their_commands() {
        let cli = Cli::parse_from(["verdefica", "ls"]);
        assert!(matches!(cli.command, Some(Commands::Listar { .. })));

        let cli = Cli::parse_from(["verdefica", "r"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Recomendar { por_regiao: 3 })
        ));
    }

    #[test]
    fn catalog_flag_is_global() {
        let cli = Cli::parse_from(["verdefica", "listar", "--catalogo", "/tmp/x.json"]);
        assert_eq!(cli.catalog.as_deref(), Some(std::path::Path::new("/tmp/x.json")));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["verdefica"]);
        assert!(cli.command.is_none());
    }
}
