use console::Style;
use once_cell::sync::Lazy;
use verdefica::model::Category;

pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static SCIENTIFIC: Lazy<Style> = Lazy::new(|| Style::new().italic().dim());
pub static LOW_STOCK: Lazy<Style> = Lazy::new(|| Style::new().red());
pub static SELECTED: Lazy<Style> = Lazy::new(|| Style::new().green().bold());

static BADGE_NATIVA: Lazy<Style> = Lazy::new(|| Style::new().green());
static BADGE_EXOTICA: Lazy<Style> = Lazy::new(|| Style::new().magenta());
static BADGE_FRUTIFERA: Lazy<Style> = Lazy::new(|| Style::new().color256(208));
static BADGE_ORNAMENTAL: Lazy<Style> = Lazy::new(|| Style::new().cyan());

pub fn category_style(category: Category) -> &'static Style {
    match category {
        Category::Nativa => &BADGE_NATIVA,
        Category::Exotica => &BADGE_EXOTICA,
        Category::Frutifera => &BADGE_FRUTIFERA,
        Category::Ornamental => &BADGE_ORNAMENTAL,
    }
}
