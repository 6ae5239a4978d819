use serde::Deserialize;
use std::collections::BTreeSet;
use std::collections::HashSet;
use std::path::Path;

pub const EXPECTED_COLUMNS: [&str; 9] = [
    "image_id",
    "company",
    "slide_type",
    "industry",
    "use_case",
    "details",
    "description",
    "tags",
    "slide_id",
];

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse dataset as CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset is missing column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: tags cell {cell:?} is not a list-of-strings literal: {reason}")]
    BadTags {
        row: usize,
        cell: String,
        reason: String,
    },
    #[error("row {row}: empty slide_id")]
    EmptySlideId { row: usize },
    #[error("row {row}: duplicate slide_id '{id}'")]
    DuplicateSlideId { row: usize, id: String },
}

#[derive(Debug, Clone)]
pub struct Slide {
    pub slide_id: String,
    pub company: String,
    pub slide_type: String,
    pub industry: String,
    pub use_case: String,
    pub details: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    image_id: String,
    company: String,
    slide_type: String,
    industry: String,
    use_case: String,
    details: String,
    description: String,
    tags: String,
    slide_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Company,
    SlideType,
    Industry,
    UseCase,
    Tag,
}

impl Facet {
    pub const ALL: [Facet; 5] = [
        Facet::Company,
        Facet::SlideType,
        Facet::Industry,
        Facet::UseCase,
        Facet::Tag,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Facet::Company => "Company",
            Facet::SlideType => "Slide Type",
            Facet::Industry => "Industry",
            Facet::UseCase => "Use Case",
            Facet::Tag => "Tag",
        }
    }
}

#[derive(Debug)]
pub struct Catalog {
    slides: Vec<Slide>,
}

impl Catalog {
    pub async fn load(path: &Path, image_base_url: &str) -> Result<Self, LoadError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_csv_bytes(&bytes, image_base_url)
    }

    pub fn from_csv_bytes(bytes: &[u8], image_base_url: &str) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(bytes);

        let headers = reader.headers()?.clone();
        for column in EXPECTED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(LoadError::MissingColumn(column));
            }
        }

        let mut slides = Vec::new();
        let mut seen_ids: HashSet<String> = HashSet::new();

        for (index, record) in reader.deserialize::<RawRecord>().enumerate() {
            let record = record?;
            // Header is line 1, so the first data row is row 2.
            let row = index + 2;

            let tags = parse_tags_literal(&record.tags).map_err(|reason| LoadError::BadTags {
                row,
                cell: record.tags.clone(),
                reason,
            })?;

            if record.slide_id.trim().is_empty() {
                return Err(LoadError::EmptySlideId { row });
            }
            if !seen_ids.insert(record.slide_id.clone()) {
                return Err(LoadError::DuplicateSlideId {
                    row,
                    id: record.slide_id,
                });
            }

            slides.push(Slide {
                slide_id: record.slide_id,
                company: record.company,
                slide_type: record.slide_type,
                industry: record.industry,
                use_case: record.use_case,
                details: record.details,
                description: record.description,
                tags,
                image_url: format!("{}{}", image_base_url, record.image_id),
            });
        }

        Ok(Self { slides })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn view(&self) -> Vec<&Slide> {
        self.slides.iter().collect()
    }

    pub fn distinct_values(&self, facet: Facet) -> Vec<String> {
        let mut values: BTreeSet<&str> = BTreeSet::new();
        for slide in &self.slides {
            match facet {
                Facet::Company => {
                    values.insert(&slide.company);
                }
                Facet::SlideType => {
                    values.insert(&slide.slide_type);
                }
                Facet::Industry => {
                    values.insert(&slide.industry);
                }
                Facet::UseCase => {
                    values.insert(&slide.use_case);
                }
                Facet::Tag => {
                    for tag in &slide.tags {
                        values.insert(tag);
                    }
                }
            }
        }
        values.into_iter().map(|v| v.to_string()).collect()
    }
}

/// Decodes a Python-style list-of-strings literal, the format the `tags`
/// column carries: `['revenue', "growth"]`. Accepts single or double quotes,
/// backslash escapes, and a trailing comma. Anything else is malformed.
pub fn parse_tags_literal(input: &str) -> Result<Vec<String>, String> {
    let mut chars = input.trim().chars().peekable();

    match chars.next() {
        Some('[') => {}
        _ => return Err("expected '['".to_string()),
    }

    let mut tags = Vec::new();

    loop {
        skip_whitespace(&mut chars);
        match chars.peek() {
            Some(']') => {
                chars.next();
                break;
            }
            Some('\'') | Some('"') => {
                tags.push(parse_quoted(&mut chars)?);
                skip_whitespace(&mut chars);
                match chars.peek() {
                    Some(',') => {
                        chars.next();
                    }
                    Some(']') => {}
                    Some(other) => {
                        return Err(format!("expected ',' or ']', found {:?}", other));
                    }
                    None => return Err("unterminated list".to_string()),
                }
            }
            Some(other) => return Err(format!("expected string literal, found {:?}", other)),
            None => return Err("unterminated list".to_string()),
        }
    }

    skip_whitespace(&mut chars);
    if chars.next().is_some() {
        return Err("trailing characters after ']'".to_string());
    }

    Ok(tags)
}

fn skip_whitespace(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

fn parse_quoted(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Result<String, String> {
    let quote = chars.next().ok_or("expected quote")?;
    let mut value = String::new();

    loop {
        match chars.next() {
            Some('\\') => match chars.next() {
                Some('n') => value.push('\n'),
                Some('t') => value.push('\t'),
                Some(escaped) => value.push(escaped),
                None => return Err("unterminated escape".to_string()),
            },
            Some(c) if c == quote => return Ok(value),
            Some(c) => value.push(c),
            None => return Err("unterminated string literal".to_string()),
        }
    }
}
