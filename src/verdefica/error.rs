use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerdeficaError {
    #[error("Espécie não encontrada: {0}")]
    SpeciesNotFound(String),

    #[error("Nome ambíguo \"{0}\": corresponde a {1}")]
    AmbiguousSelector(String, String),

    #[error("Não há espécie na posição {0} da lista atual")]
    IndexOutOfRange(usize),

    #[error("Valor desconhecido para {0}: \"{1}\"")]
    UnknownFacet(&'static str, String),

    #[error("Catálogo inválido: {0}")]
    Catalog(String),

    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro de serialização: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VerdeficaError>;
