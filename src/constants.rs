/// Default locations, relative to the working directory the importer runs in
pub const DEFAULT_INPUT_PATH: &str = "scripts/input/schemes.xlsx";
pub const DEFAULT_OUTPUT_PATH: &str = "scripts/output/schemes.json";
pub const DEFAULT_CONFIG_FILE: &str = "scheme_import.toml";
pub const DEFAULT_LOG_FILE: &str = "scheme_import.log";
pub const DEFAULT_LOG_FILTER: &str = "scheme_import=info";

// Environment overrides (read after `.env` is loaded)
pub const ENV_INPUT_PATH: &str = "SCHEME_IMPORT_INPUT";
pub const ENV_OUTPUT_PATH: &str = "SCHEME_IMPORT_OUTPUT";

/// Column header labels, matched case-sensitively against the first sheet row
pub mod columns {
    pub const NAME: &str = "name";
    pub const SUMMARY: &str = "summary";
    pub const CATEGORY: &str = "category";
    pub const STATES: &str = "states";
    pub const APPLY_LINK: &str = "applyLink";
    pub const SLUG: &str = "slug";
    pub const ID: &str = "id";
    pub const TAGS: &str = "tags";
    pub const BENEFITS: &str = "benefits";
    pub const DOCUMENTS: &str = "documents";
    pub const MIN_AGE: &str = "minAge";
    pub const INCOME_MAX: &str = "incomeMax";
    pub const GENDER: &str = "gender";
}

/// Columns that must hold a non-blank value in every data row
pub const REQUIRED_FIELDS: [&str; 5] = [
    columns::NAME,
    columns::SUMMARY,
    columns::CATEGORY,
    columns::STATES,
    columns::APPLY_LINK,
];

pub const ALL_STATES: &str = "all";
pub const DEFAULT_CATEGORY: &str = "other";

/// Separator for the tags and states columns
pub const COMMA_SEPARATOR: char = ',';
pub const LIST_SEPARATOR: char = '|';
