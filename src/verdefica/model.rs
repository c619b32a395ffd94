use crate::error::VerdeficaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercases and strips the Portuguese diacritics used throughout the
/// catalog, so "Ipê" matches a search for "ipe" and sorts next to it.
pub fn fold_key(s: &str) -> String {
    s.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Nativa,
    #[serde(rename = "Exótica")]
    Exotica,
    #[serde(rename = "Frutífera")]
    Frutifera,
    Ornamental,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Nativa,
        Category::Exotica,
        Category::Frutifera,
        Category::Ornamental,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Nativa => "Nativa",
            Category::Exotica => "Exótica",
            Category::Frutifera => "Frutífera",
            Category::Ornamental => "Ornamental",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = VerdeficaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_key(s.trim()).as_str() {
            "nativa" => Ok(Category::Nativa),
            "exotica" => Ok(Category::Exotica),
            "frutifera" => Ok(Category::Frutifera),
            "ornamental" => Ok(Category::Ornamental),
            _ => Err(VerdeficaError::UnknownFacet("categoria", s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    Pequeno,
    #[serde(rename = "Médio")]
    Medio,
    Grande,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Pequeno, SizeClass::Medio, SizeClass::Grande];

    pub fn label(self) -> &'static str {
        match self {
            SizeClass::Pequeno => "Pequeno",
            SizeClass::Medio => "Médio",
            SizeClass::Grande => "Grande",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SizeClass {
    type Err = VerdeficaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The UI labels sizes as "Pequeno porte" etc., accept both forms.
        let folded = fold_key(s.trim());
        let key = folded.strip_suffix(" porte").unwrap_or(&folded);
        match key {
            "pequeno" => Ok(SizeClass::Pequeno),
            "medio" => Ok(SizeClass::Medio),
            "grande" => Ok(SizeClass::Grande),
            _ => Err(VerdeficaError::UnknownFacet("porte", s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UseTag {
    #[serde(rename = "Ruas estreitas")]
    RuasEstreitas,
    Avenidas,
    #[serde(rename = "Praças")]
    Pracas,
    #[serde(rename = "Áreas escolares")]
    AreasEscolares,
}

impl UseTag {
    pub const ALL: [UseTag; 4] = [
        UseTag::RuasEstreitas,
        UseTag::Avenidas,
        UseTag::Pracas,
        UseTag::AreasEscolares,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UseTag::RuasEstreitas => "Ruas estreitas",
            UseTag::Avenidas => "Avenidas",
            UseTag::Pracas => "Praças",
            UseTag::AreasEscolares => "Áreas escolares",
        }
    }
}

impl fmt::Display for UseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UseTag {
    type Err = VerdeficaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_key(s.trim()).as_str() {
            "ruas estreitas" | "ruas" | "rua" => Ok(UseTag::RuasEstreitas),
            "avenidas" | "avenida" => Ok(UseTag::Avenidas),
            "pracas" | "praca" => Ok(UseTag::Pracas),
            "areas escolares" | "escolas" | "escola" => Ok(UseTag::AreasEscolares),
            _ => Err(VerdeficaError::UnknownFacet("uso", s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Condition {
    SolPleno,
    Alagamentos,
    BaixaManutencao,
}

impl Condition {
    pub const ALL: [Condition; 3] = [
        Condition::SolPleno,
        Condition::Alagamentos,
        Condition::BaixaManutencao,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Condition::SolPleno => "Resistência ao sol pleno",
            Condition::Alagamentos => "Resistência a alagamentos",
            Condition::BaixaManutencao => "Baixa manutenção",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = VerdeficaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_key(s.trim()).as_str() {
            "sol" | "sol pleno" | "resistencia ao sol pleno" => Ok(Condition::SolPleno),
            "alagamento" | "alagamentos" | "resistencia a alagamentos" => {
                Ok(Condition::Alagamentos)
            }
            "manutencao" | "baixa manutencao" => Ok(Condition::BaixaManutencao),
            _ => Err(VerdeficaError::UnknownFacet("condição", s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RootType {
    Profunda,
    Superficial,
    Agressiva,
}

impl RootType {
    pub fn label(self) -> &'static str {
        match self {
            RootType::Profunda => "Profunda",
            RootType::Superficial => "Superficial",
            RootType::Agressiva => "Agressiva",
        }
    }
}

impl fmt::Display for RootType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShadeLevel {
    Baixo,
    #[serde(rename = "Médio")]
    Medio,
    Alto,
    #[serde(rename = "Muito alto")]
    MuitoAlto,
}

impl ShadeLevel {
    pub fn label(self) -> &'static str {
        match self {
            ShadeLevel::Baixo => "Baixo",
            ShadeLevel::Medio => "Médio",
            ShadeLevel::Alto => "Alto",
            ShadeLevel::MuitoAlto => "Muito alto",
        }
    }
}

impl fmt::Display for ShadeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Height interval in meters, rendered as "8–15m".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterRange {
    pub min: u32,
    pub max: u32,
}

impl fmt::Display for MeterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}m", self.min, self.max)
    }
}

/// Projected canopy coverage in square meters, rendered as "25–40m²".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanopyRange {
    pub min: u32,
    pub max: u32,
}

impl fmt::Display for CanopyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}m²", self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    pub category: Category,
    pub size: SizeClass,
    pub height: MeterRange,
    pub canopy: CanopyRange,
    pub uses: Vec<UseTag>,
    pub stock: u32,
    #[serde(default)]
    pub low_stock: bool,
    pub root_type: RootType,
    pub shade: ShadeLevel,
    pub full_sun: bool,
    pub flooding: bool,
    pub low_maintenance: bool,
    pub image_url: String,
}

impl Species {
    pub fn meets(&self, condition: Condition) -> bool {
        match condition {
            Condition::SolPleno => self.full_sun,
            Condition::Alagamentos => self.flooding,
            Condition::BaixaManutencao => self.low_maintenance,
        }
    }

    pub fn maintenance_label(&self) -> &'static str {
        if self.low_maintenance {
            "Baixa"
        } else {
            "Média"
        }
    }

    pub fn stock_line(&self) -> String {
        if self.low_stock {
            format!("Estoque limitado ({} mudas)", self.stock)
        } else {
            format!("{} mudas disponíveis", self.stock)
        }
    }
}
