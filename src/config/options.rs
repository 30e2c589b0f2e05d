// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use super::consts::*;
use crate::core::sanitize::sanitize_filename;
use crate::error::{Error, Result};
use crate::specs::results::{Projection, FULL, MINIMAL};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Network pipeline defaults: full projection into a spreadsheet.
    pub fn for_fetch() -> Self {
        Self {
            fetch: FetchOptions::default(),
            export: ExportOptions {
                format: TableFormat::Xlsx,
                projection: ProjectionKind::Full,
                ..ExportOptions::default()
            },
        }
    }

    /// Archive replay defaults: minimal projection into CSV.
    pub fn for_replay() -> Self {
        Self {
            fetch: FetchOptions::default(),
            export: ExportOptions {
                format: TableFormat::Csv,
                projection: ProjectionKind::Minimal,
                ..ExportOptions::default()
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub base_url: String,
    /// `None` waits forever on a silent server.
    pub timeout: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            timeout: Some(Duration::from_secs(TIMEOUT_SECS)),
        }
    }
}

impl FetchOptions {
    pub fn results_url(&self, subject_id: &str) -> Result<String> {
        let id = check_subject_id(subject_id)?;
        let base = self.base_url.trim_end_matches('/');
        let path = RESULTS_PATH.replace("{id}", id);
        Ok(format!("{base}{path}"))
    }
}

/// Athlete ids are decimal numbers; anything else would change the request path.
pub fn check_subject_id(subject_id: &str) -> Result<&str> {
    let id = subject_id.trim();
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        Ok(id)
    } else {
        Err(Error::InvalidSubject(s!(subject_id)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    Csv,
    Xlsx,
}

impl TableFormat {
    pub fn ext(&self) -> &'static str {
        match self { TableFormat::Csv => "csv", TableFormat::Xlsx => "xlsx" }
    }

    fn default_template(&self) -> &'static str {
        match self { TableFormat::Csv => CSV_TEMPLATE, TableFormat::Xlsx => XLSX_TEMPLATE }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProjectionKind {
    Full,
    Minimal,
}

impl ProjectionKind {
    pub fn projection(&self) -> &'static Projection {
        match self { ProjectionKind::Full => &FULL, ProjectionKind::Minimal => &MINIMAL }
    }
}

/// File name pattern; every `{name}` is replaced with the sanitized subject name.
/// A template without the placeholder is used as a fixed file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilenameTemplate(String);

impl FilenameTemplate {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn render(&self, subject_name: &str) -> String {
        self.0.replace(NAME_PLACEHOLDER, &sanitize_filename(subject_name))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub format: TableFormat,
    pub projection: ProjectionKind,
    pub archive_name: FilenameTemplate,
    /// Falls back to the format's default template.
    pub table_name: Option<FilenameTemplate>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            format: TableFormat::Xlsx,
            projection: ProjectionKind::Full,
            archive_name: FilenameTemplate::new(ARCHIVE_TEMPLATE),
            table_name: None,
        }
    }
}

impl ExportOptions {
    pub fn archive_path(&self, subject_name: &str) -> PathBuf {
        self.out_dir.join(self.archive_name.render(subject_name))
    }

    pub fn table_path(&self, subject_name: &str) -> PathBuf {
        let file_name = match &self.table_name {
            Some(t) => t.render(subject_name),
            None => FilenameTemplate::new(self.format.default_template()).render(subject_name),
        };
        self.out_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn results_url_interpolates_subject() {
        let f = FetchOptions { base_url: s!("http://127.0.0.1:9/"), timeout: None };
        assert_eq!(f.results_url("1017653").unwrap(), "http://127.0.0.1:9/fina/athletes/1017653/results");
        assert_eq!(f.results_url(" 42 ").unwrap(), "http://127.0.0.1:9/fina/athletes/42/results");
    }

    #[test]
    fn subject_ids_that_would_change_the_path_are_rejected() {
        let f = FetchOptions::default();
        for bad in ["", "12/../34", "1?x=2", "1#frag", "abc", "١٢"] {
            assert!(matches!(f.results_url(bad), Err(Error::InvalidSubject(_))), "{bad:?}");
        }
    }

    #[test]
    fn default_names_follow_format() {
        let mut e = ExportOptions::default();
        assert_eq!(e.archive_path("SUN Yang"), Path::new(".").join("SUN Yang_原始数据.json"));
        assert_eq!(e.table_path("SUN Yang"), Path::new(".").join("SUN Yang_比赛记录.xlsx"));

        e.format = TableFormat::Csv;
        assert_eq!(e.table_path("SUN Yang"), Path::new(".").join("SUN Yang比赛成绩数据.csv"));
    }

    #[test]
    fn fixed_template_ignores_subject() {
        let e = ExportOptions {
            out_dir: PathBuf::from("out"),
            format: TableFormat::Csv,
            table_name: Some(FilenameTemplate::new("孙杨比赛成绩数据.csv")),
            ..ExportOptions::default()
        };
        assert_eq!(e.table_path("anyone"), Path::new("out").join("孙杨比赛成绩数据.csv"));
    }

    #[test]
    fn template_sanitizes_separators() {
        let t = FilenameTemplate::new("{name}.json");
        assert_eq!(t.render("A/B"), "A_B.json");
    }
}
